//! Auth error types
//!
//! `ProviderError` is what a provider call fails with. `AuthError` is the
//! transient value the pages display; it only keeps the kind and a message.

use std::fmt;

use crate::core::routes::LoginErrorFlag;

/// Failure of a call to the auth provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with an error
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request could not be built
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request never got an answer
    #[error("network error: {0}")]
    Transport(String),

    /// The answer could not be understood
    #[error("invalid response: {0}")]
    Decode(String),

    /// Browser facilities (window, storage) are missing
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl ProviderError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        ProviderError::Rejected {
            status,
            message: message.into(),
        }
    }

    /// How the UI classifies this failure
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            ProviderError::Rejected { .. } | ProviderError::InvalidRequest(_) => {
                AuthErrorKind::Provider
            }
            ProviderError::Transport(_)
            | ProviderError::Decode(_)
            | ProviderError::Unavailable(_) => AuthErrorKind::Unexpected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    Provider,
    Unexpected,
}

impl AuthErrorKind {
    /// Query flag used when this failure ends in a redirect to login
    pub fn login_flag(&self) -> LoginErrorFlag {
        match self {
            AuthErrorKind::Provider => LoginErrorFlag::AuthError,
            AuthErrorKind::Unexpected => LoginErrorFlag::UnexpectedError,
        }
    }
}

/// Error shown inline on a page; cleared on the next attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    pub fn provider(message: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::Provider,
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::Unexpected,
            message: message.into(),
        }
    }
}

impl From<ProviderError> for AuthError {
    fn from(err: ProviderError) -> Self {
        let kind = err.kind();
        let message = match kind {
            AuthErrorKind::Provider => err.to_string(),
            AuthErrorKind::Unexpected => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        };
        Self { kind, message }
    }
}

impl From<LoginErrorFlag> for AuthError {
    fn from(flag: LoginErrorFlag) -> Self {
        let kind = match flag {
            LoginErrorFlag::AuthError => AuthErrorKind::Provider,
            LoginErrorFlag::UnexpectedError => AuthErrorKind::Unexpected,
        };
        Self {
            kind,
            message: flag.message().to_string(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            ProviderError::rejected(400, "Invalid login credentials").kind(),
            AuthErrorKind::Provider
        );
        assert_eq!(
            ProviderError::InvalidRequest("bad url".into()).kind(),
            AuthErrorKind::Provider
        );
        assert_eq!(
            ProviderError::Transport("offline".into()).kind(),
            AuthErrorKind::Unexpected
        );
        assert_eq!(
            ProviderError::Unavailable("no window".into()).kind(),
            AuthErrorKind::Unexpected
        );
    }

    #[test]
    fn test_provider_message_is_kept() {
        let err: AuthError = ProviderError::rejected(400, "Invalid login credentials").into();
        assert_eq!(err.kind, AuthErrorKind::Provider);
        assert_eq!(err.message, "Invalid login credentials");
    }

    #[test]
    fn test_unexpected_message_is_generic() {
        let err: AuthError = ProviderError::Decode("expected value at line 1".into()).into();
        assert_eq!(err.kind, AuthErrorKind::Unexpected);
        assert!(!err.message.contains("line 1"));
    }

    #[test]
    fn test_login_flag_mapping() {
        assert_eq!(AuthErrorKind::Provider.login_flag(), LoginErrorFlag::AuthError);
        assert_eq!(
            AuthErrorKind::Unexpected.login_flag(),
            LoginErrorFlag::UnexpectedError
        );
        let from_flag = AuthError::from(LoginErrorFlag::UnexpectedError);
        assert_eq!(from_flag.kind, AuthErrorKind::Unexpected);
    }
}
