//! Authentication UI module
//!
//! This module provides the auth context (the app's single session holder)
//! and the forms used by the login, sign-up and reset pages.

mod context;
mod forgot_form;
mod layout;
mod login_form;
mod oauth_buttons;
mod register_form;
mod user_menu;

pub use context::{AuthContext, provide_auth_context, use_auth_context};
pub use forgot_form::ForgotForm;
pub use layout::AuthLayout;
pub use login_form::LoginForm;
pub use oauth_buttons::OAuthButtons;
pub use register_form::RegisterForm;
pub use user_menu::UserMenu;
