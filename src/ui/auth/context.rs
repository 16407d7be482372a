//! Auth context shared by every page
//!
//! This module provides the single session holder for the app:
//! - Current session state (unknown until the first lookup completes)
//! - The dispatcher used for sign-in, sign-up, reset and sign-out
//! - One session lookup after hydration

use leptos::logging::warn;
use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::auth::{
    AuthDispatcher, AuthError, AuthSettings, Credentials, GoTrueClient, OAuthProvider,
    SignUpOutcome, SignUpRequest,
};
use crate::core::browser;
use crate::core::routes::AppRoute;
use crate::core::session::{SessionState, SessionUser};

type Dispatcher = AuthDispatcher<GoTrueClient>;

/// Auth context providing session state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session state
    pub state: RwSignal<SessionState>,
    dispatcher: StoredValue<Dispatcher>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<SessionUser> {
        self.state.with(|state| state.user().cloned())
    }

    fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.get_value()
    }

    /// Sign in with email and password
    pub async fn login(self, credentials: Credentials) -> Result<(), AuthError> {
        let session = self.dispatcher().sign_in_with_password(&credentials).await?;
        self.state.set(SessionState::Authenticated(session));
        Ok(())
    }

    /// Create an account; signs in right away when the service allows it
    pub async fn register(self, request: SignUpRequest) -> Result<SignUpOutcome, AuthError> {
        let outcome = self.dispatcher().sign_up(&request).await?;
        if let SignUpOutcome::SignedIn(session) = &outcome {
            self.state.set(SessionState::Authenticated(session.clone()));
        }
        Ok(outcome)
    }

    pub async fn request_password_reset(self, email: String) -> Result<(), AuthError> {
        self.dispatcher().request_password_reset(&email).await
    }

    /// Leave the app for the provider's authorize page
    pub async fn sign_in_with_oauth(self, provider: OAuthProvider) -> Result<(), AuthError> {
        let url = self.dispatcher().sign_in_with_oauth(provider).await?;
        browser::assign_location(&url).map_err(|e| {
            warn!("Could not leave for {} sign-in: {}", provider, e);
            AuthError::unexpected(e)
        })
    }

    /// Finish the OAuth round trip; returns the one route to go to next
    pub async fn complete_callback(self) -> AppRoute {
        let outcome = self.dispatcher().handle_auth_callback().await;
        self.state.set(outcome.session);
        outcome.redirect
    }

    /// Logout the current user and go to the landing page
    ///
    /// Navigation happens before the signed-out state is published, so the
    /// guard of the page being left does not redirect on its own.
    pub async fn logout(self) {
        let route = self.dispatcher().sign_out().await;
        let navigate = use_navigate();
        navigate(&route.href(), Default::default());
        self.state.set(SessionState::Unauthenticated);
    }
}

/// Settings handed over by the server, or read back from the page head
fn auth_settings() -> AuthSettings {
    let settings = use_context::<AuthSettings>().unwrap_or_else(AuthSettings::from_document);
    if !settings.is_configured() {
        warn!("Auth service is not configured; sign-in requests will fail");
    }
    settings
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    let settings = auth_settings();
    let site_url = settings.resolved_site_url();
    let dispatcher = AuthDispatcher::new(GoTrueClient::new(settings), site_url);

    // Unknown on both server and client so hydration matches
    let state = RwSignal::new(SessionState::Unknown);

    let ctx = AuthContext {
        state,
        dispatcher: StoredValue::new(dispatcher),
    };

    // Look the session up once after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            // The callback page does its own lookup and publishes the result
            if browser::location_path().as_deref() == Some(AppRoute::CALLBACK_PATH) {
                return;
            }
            let dispatcher = ctx.dispatcher();
            spawn_local(async move {
                let session = dispatcher.current_session().await;
                state.set(session);
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
