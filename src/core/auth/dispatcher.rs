//! Auth actions and how their outcomes turn into navigation
//!
//! Every action is non-fatal: provider failures come back as [`AuthError`]
//! or as a login route carrying an error flag, never as a panic.

use leptos::logging::{error, log, warn};

use super::error::AuthError;
use super::provider::{AuthProvider, Credentials, OAuthProvider, SignUpOutcome, SignUpRequest};
use crate::core::routes::{AppRoute, LoginErrorFlag};
use crate::core::session::{Session, SessionState};

/// Terminal state of the callback route
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackOutcome {
    pub redirect: AppRoute,
    /// Session state learned while handling the callback
    pub session: SessionState,
}

/// Issues auth requests to a provider and interprets the results
#[derive(Debug, Clone)]
pub struct AuthDispatcher<P> {
    provider: P,
    site_url: String,
}

impl<P: AuthProvider> AuthDispatcher<P> {
    /// `site_url` is the public origin, e.g. `https://cocred.example.edu`
    pub fn new(provider: P, site_url: impl Into<String>) -> Self {
        let site_url = site_url.into().trim_end_matches('/').to_string();
        Self { provider, site_url }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Absolute URL the provider returns to after OAuth
    pub fn callback_url(&self) -> String {
        format!("{}{}", self.site_url, AppRoute::CALLBACK_PATH)
    }

    /// Absolute URL the password recovery email links back to
    ///
    /// Recovery links carry session tokens, so they land on the callback
    /// route and go through the same redirect as an OAuth return.
    pub fn recovery_url(&self) -> String {
        self.callback_url()
    }

    /// Look up the session once; failures count as signed out
    pub async fn current_session(&self) -> SessionState {
        let result = self.provider.get_current_session().await;
        if let Err(err) = &result {
            warn!("Session lookup failed, treating as signed out: {}", err);
        }
        SessionState::from_lookup(result)
    }

    /// Start a redirect-based OAuth flow; returns the authorize page to leave for
    pub async fn sign_in_with_oauth(&self, provider: OAuthProvider) -> Result<String, AuthError> {
        let redirect_to = self.callback_url();
        match self.provider.sign_in_with_oauth(provider, &redirect_to).await {
            Ok(url) => {
                log!("Redirecting to {} sign-in", provider);
                Ok(url)
            }
            Err(err) => {
                error!("Error signing in with {}: {}", provider, err);
                Err(err.into())
            }
        }
    }

    /// Resolve the callback route into its single redirect
    pub async fn handle_auth_callback(&self) -> CallbackOutcome {
        match self.provider.get_current_session().await {
            Ok(Some(session)) => {
                log!("User authenticated: {}", session.user.id);
                CallbackOutcome {
                    redirect: AppRoute::Dashboard,
                    session: SessionState::Authenticated(session),
                }
            }
            Ok(None) => CallbackOutcome {
                redirect: AppRoute::login(),
                session: SessionState::Unauthenticated,
            },
            // Any error reported by the lookup is an auth error here
            Err(err) => {
                error!("Error getting session: {}", err);
                CallbackOutcome {
                    redirect: AppRoute::Login {
                        error: Some(LoginErrorFlag::AuthError),
                    },
                    session: SessionState::Unauthenticated,
                }
            }
        }
    }

    pub async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, AuthError> {
        self.provider
            .sign_in_with_password(credentials)
            .await
            .map_err(|err| {
                warn!("Password sign-in failed: {}", err);
                AuthError::from(err)
            })
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AuthError> {
        self.provider.sign_up(request).await.map_err(|err| {
            warn!("Sign-up failed: {}", err);
            AuthError::from(err)
        })
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.provider
            .send_password_reset(email, &self.recovery_url())
            .await
            .map_err(|err| {
                warn!("Password reset request failed: {}", err);
                AuthError::from(err)
            })
    }

    /// End the session; always lands on the landing page
    pub async fn sign_out(&self) -> AppRoute {
        if let Err(err) = self.provider.sign_out().await {
            warn!("Sign-out request failed: {}", err);
        }
        AppRoute::Landing
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::auth::error::{AuthErrorKind, ProviderError};
    use crate::core::routes::LoginErrorFlag;
    use crate::core::session::fixtures::session;
    use crate::core::session::{GuardDecision, Role, decide};

    /// Provider answering every call with canned results
    #[derive(Default)]
    struct FakeProvider {
        session: Option<Result<Option<Session>, ProviderError>>,
        oauth: Option<Result<String, ProviderError>>,
        sign_out: Option<ProviderError>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeProvider {
        fn with_session(result: Result<Option<Session>, ProviderError>) -> Self {
            Self {
                session: Some(result),
                ..Default::default()
            }
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl AuthProvider for FakeProvider {
        async fn get_current_session(&self) -> Result<Option<Session>, ProviderError> {
            self.record("get_current_session".into());
            self.session.clone().unwrap_or(Ok(None))
        }

        async fn sign_in_with_oauth(
            &self,
            provider: OAuthProvider,
            redirect_to: &str,
        ) -> Result<String, ProviderError> {
            self.record(format!("oauth {provider} {redirect_to}"));
            self.oauth
                .clone()
                .unwrap_or_else(|| Ok(format!("https://auth.test/authorize?provider={provider}")))
        }

        async fn sign_in_with_password(
            &self,
            credentials: &Credentials,
        ) -> Result<Session, ProviderError> {
            self.record(format!("password {}", credentials.email));
            if credentials.password == "correct horse" {
                Ok(session())
            } else {
                Err(ProviderError::rejected(400, "Invalid login credentials"))
            }
        }

        async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, ProviderError> {
            self.record(format!("sign_up {}", request.credentials.email));
            Ok(SignUpOutcome::ConfirmationSent {
                email: request.credentials.email.clone(),
            })
        }

        async fn send_password_reset(
            &self,
            email: &str,
            redirect_to: &str,
        ) -> Result<(), ProviderError> {
            self.record(format!("reset {email} {redirect_to}"));
            Err(ProviderError::Transport("offline".into()))
        }

        async fn sign_out(&self) -> Result<(), ProviderError> {
            self.record("sign_out".into());
            match &self.sign_out {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn dispatcher(provider: FakeProvider) -> AuthDispatcher<FakeProvider> {
        AuthDispatcher::new(provider, "https://cocred.test/")
    }

    #[test]
    fn test_urls_drop_trailing_slash() {
        let d = dispatcher(FakeProvider::default());
        assert_eq!(d.callback_url(), "https://cocred.test/auth/callback");
        assert_eq!(d.recovery_url(), "https://cocred.test/auth/callback");
    }

    #[tokio::test]
    async fn test_callback_with_session_goes_to_dashboard() {
        let d = dispatcher(FakeProvider::with_session(Ok(Some(session()))));
        let outcome = d.handle_auth_callback().await;

        assert_eq!(outcome.redirect, AppRoute::Dashboard);
        assert!(outcome.session.is_authenticated());
        assert_eq!(d.provider().calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_callback_without_session_goes_to_plain_login() {
        let d = dispatcher(FakeProvider::with_session(Ok(None)));
        let outcome = d.handle_auth_callback().await;

        assert_eq!(outcome.redirect, AppRoute::login());
        assert_eq!(outcome.redirect.href(), "/login");
        assert_eq!(outcome.session, SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_callback_provider_error_flags_auth_error() {
        let d = dispatcher(FakeProvider::with_session(Err(ProviderError::rejected(
            401,
            "invalid JWT",
        ))));
        let outcome = d.handle_auth_callback().await;

        assert_eq!(outcome.redirect.href(), "/login?error=auth_error");
    }

    #[tokio::test]
    async fn test_callback_transport_and_decode_errors_flag_auth_error() {
        for err in [
            ProviderError::Decode("truncated body".into()),
            ProviderError::Transport("connection reset".into()),
        ] {
            let d = dispatcher(FakeProvider::with_session(Err(err)));
            let outcome = d.handle_auth_callback().await;

            assert_eq!(
                outcome.redirect,
                AppRoute::Login {
                    error: Some(LoginErrorFlag::AuthError)
                }
            );
            assert_eq!(outcome.session, SessionState::Unauthenticated);
        }
    }

    #[tokio::test]
    async fn test_oauth_uses_fixed_callback_url() {
        let d = dispatcher(FakeProvider::default());
        let url = d.sign_in_with_oauth(OAuthProvider::Google).await.unwrap();

        assert_eq!(url, "https://auth.test/authorize?provider=google");
        assert_eq!(
            d.provider().calls.borrow()[0],
            "oauth google https://cocred.test/auth/callback"
        );
    }

    #[tokio::test]
    async fn test_oauth_failures_map_to_error_kinds() {
        let d = dispatcher(FakeProvider {
            oauth: Some(Err(ProviderError::InvalidRequest("bad base url".into()))),
            ..Default::default()
        });
        let err = d.sign_in_with_oauth(OAuthProvider::Github).await.unwrap_err();
        assert_eq!(err.kind, AuthErrorKind::Provider);

        let d = dispatcher(FakeProvider {
            oauth: Some(Err(ProviderError::Unavailable("no window".into()))),
            ..Default::default()
        });
        let err = d.sign_in_with_oauth(OAuthProvider::Github).await.unwrap_err();
        assert_eq!(err.kind, AuthErrorKind::Unexpected);
    }

    #[tokio::test]
    async fn test_sign_out_lands_on_landing_even_on_failure() {
        let d = dispatcher(FakeProvider::default());
        assert_eq!(d.sign_out().await, AppRoute::Landing);

        let d = dispatcher(FakeProvider {
            sign_out: Some(ProviderError::Transport("offline".into())),
            ..Default::default()
        });
        assert_eq!(d.sign_out().await, AppRoute::Landing);
        assert_eq!(*d.provider().calls.borrow(), vec!["sign_out".to_string()]);
    }

    #[tokio::test]
    async fn test_password_sign_in() {
        let d = dispatcher(FakeProvider::default());
        let good = Credentials {
            email: "asha@example.edu".into(),
            password: "correct horse".into(),
        };
        assert_eq!(d.sign_in_with_password(&good).await.unwrap(), session());

        let bad = Credentials {
            password: "wrong".into(),
            ..good
        };
        let err = d.sign_in_with_password(&bad).await.unwrap_err();
        assert_eq!(err.kind, AuthErrorKind::Provider);
        assert_eq!(err.message, "Invalid login credentials");
    }

    #[tokio::test]
    async fn test_sign_up_and_reset() {
        let d = dispatcher(FakeProvider::default());
        let request = SignUpRequest {
            credentials: Credentials {
                email: "new@example.edu".into(),
                password: "long enough".into(),
            },
            name: None,
            role: Role::Student,
        };
        assert_eq!(
            d.sign_up(&request).await.unwrap(),
            SignUpOutcome::ConfirmationSent {
                email: "new@example.edu".into()
            }
        );

        let err = d.request_password_reset("new@example.edu").await.unwrap_err();
        assert_eq!(err.kind, AuthErrorKind::Unexpected);
        assert!(
            d.provider()
                .calls
                .borrow()
                .contains(&"reset new@example.edu https://cocred.test/auth/callback".to_string())
        );
    }

    #[tokio::test]
    async fn test_reset_link_returns_through_callback() {
        let d = dispatcher(FakeProvider::with_session(Ok(Some(session()))));
        let _ = d.request_password_reset("me@example.edu").await;
        assert_eq!(
            d.provider().calls.borrow()[0],
            "reset me@example.edu https://cocred.test/auth/callback"
        );

        // The emailed link adopts a session on the callback route
        let outcome = d.handle_auth_callback().await;
        assert_eq!(outcome.redirect, AppRoute::Dashboard);
        assert!(outcome.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_lookup_feeds_guard() {
        let signed_out = dispatcher(FakeProvider::with_session(Ok(None)));
        let state = signed_out.current_session().await;
        assert_eq!(
            decide(AppRoute::Dashboard.kind(), &state),
            GuardDecision::Redirect(AppRoute::login())
        );

        let signed_in = dispatcher(FakeProvider::with_session(Ok(Some(session()))));
        let state = signed_in.current_session().await;
        assert_eq!(
            decide(AppRoute::Landing.kind(), &state),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );

        let broken = dispatcher(FakeProvider::with_session(Err(ProviderError::Transport(
            "offline".into(),
        ))));
        assert_eq!(broken.current_session().await, SessionState::Unauthenticated);
    }
}
