//! Framework-free application logic: theme, routes, session and auth

pub mod auth;
pub mod browser;
#[cfg(feature = "ssr")]
pub mod config;
pub mod routes;
pub mod session;
pub mod theme;

pub use routes::{AppRoute, LoginErrorFlag, PageKind};
pub use session::{GuardDecision, Role, Session, SessionState, SessionUser, decide};
pub use theme::{ThemePreference, ThemeResolver, ThemeSource, ThemeStore};
