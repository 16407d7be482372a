//! Application pages module
//!
//! One component per route:
//! - Landing page (home) and About page
//! - Login, Sign-up and Forgotten-password pages
//! - Dashboard
//! - OAuth callback
//! - Not found

mod about;
mod auth_callback;
mod dashboard;
mod forgot;
mod landing;
mod login;
mod not_found;
mod signup;

pub use about::AboutPage;
pub use auth_callback::AuthCallbackPage;
pub use dashboard::DashboardPage;
pub use forgot::ForgotPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
