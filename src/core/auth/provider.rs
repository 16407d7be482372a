//! The auth provider boundary
//!
//! Everything the application asks of the hosted auth service goes through
//! [`AuthProvider`]. The browser implementation is
//! [`GoTrueClient`](super::gotrue::GoTrueClient); tests use in-memory fakes.

use std::fmt;

use serde::Serialize;

use super::error::ProviderError;
use crate::core::session::{Role, Session};

/// External identity providers offered on the login page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OAuthProvider {
    Google,
    Github,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 2] = [OAuthProvider::Google, OAuthProvider::Github];

    /// Provider name understood by the auth service
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Github => "github",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Continue with Google",
            OAuthProvider::Github => "Continue with GitHub",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email/password pair
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// New account request
#[derive(Clone, Debug)]
pub struct SignUpRequest {
    pub credentials: Credentials,
    pub name: Option<String>,
    pub role: Role,
}

/// Result of a sign-up
#[derive(Clone, Debug, PartialEq)]
pub enum SignUpOutcome {
    /// The provider signed the user in right away
    SignedIn(Session),
    /// The provider sent a confirmation email first
    ConfirmationSent { email: String },
}

/// Operations consumed from the hosted auth service
///
/// Futures are not required to be `Send`: every call runs on the browser's
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    /// Current session, if any
    async fn get_current_session(&self) -> Result<Option<Session>, ProviderError>;

    /// Build the redirect-based OAuth request
    ///
    /// Returns the URL the browser has to visit; the provider comes back to
    /// `redirect_to` once the external sign-in completes.
    async fn sign_in_with_oauth(
        &self,
        provider: OAuthProvider,
        redirect_to: &str,
    ) -> Result<String, ProviderError>;

    async fn sign_in_with_password(&self, credentials: &Credentials)
    -> Result<Session, ProviderError>;

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, ProviderError>;

    /// Ask the provider to email a password recovery link
    async fn send_password_reset(&self, email: &str, redirect_to: &str)
    -> Result<(), ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;
}
