//! Common reusable UI components
//!
//! Components shared by the auth forms and the pages.

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{FormField, PasswordField, RoleSwitch};
pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::{InlineSpinner, LoadingScreen, Spinner, SpinnerSize};
