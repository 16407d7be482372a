pub mod auth;
pub mod common;
pub mod guard;
pub mod icon;
pub mod pages;
pub mod theme;

pub use auth::{AuthContext, provide_auth_context, use_auth_context};
pub use guard::SessionGuard;
pub use icon::{Icon, icons};
pub use theme::{ThemeContext, provide_theme_context, use_theme_context};
