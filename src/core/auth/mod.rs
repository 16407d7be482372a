//! Authentication against the hosted auth service
//!
//! This module contains:
//! - Error types shared by the provider and the pages
//! - The `AuthProvider` boundary and its GoTrue HTTP implementation
//! - The dispatcher turning auth actions into navigation
//! - Form validation for the sign-in, sign-up and reset forms

mod dispatcher;
mod error;
pub mod gotrue;
mod provider;
pub mod validation;

pub use dispatcher::{AuthDispatcher, CallbackOutcome};
pub use error::{AuthError, AuthErrorKind, ProviderError};
pub use gotrue::{AuthSettings, GoTrueClient};
pub use provider::{
    AuthProvider, Credentials, OAuthProvider, SignUpOutcome, SignUpRequest,
};
