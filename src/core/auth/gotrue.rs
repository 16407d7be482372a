//! HTTP client for the hosted auth service (GoTrue REST API)
//!
//! The service issues sessions and handles OAuth; this client only talks to
//! it and keeps the resulting token pair in localStorage, the same way the
//! provider's own JavaScript SDK does.

use chrono::{DateTime, Utc};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::error::ProviderError;
use super::provider::{AuthProvider, Credentials, OAuthProvider, SignUpOutcome, SignUpRequest};
use crate::core::browser;
use crate::core::session::{Role, Session, SessionUser};

/// localStorage key for the serialized session
pub const SESSION_STORAGE_KEY: &str = "cocred-auth-token";

/// Sessions expiring within this many seconds are refreshed before use
const REFRESH_MARGIN_SECS: i64 = 60;

/// Public settings needed to reach the auth service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Base URL of the project, e.g. `https://abcd.supabase.co`
    pub url: String,
    /// Public anon key sent as `apikey`
    pub anon_key: String,
    /// Public origin of this site; the browser origin is used when unset
    pub site_url: Option<String>,
}

impl AuthSettings {
    /// `<meta>` names used to hand the settings to the browser
    pub const META_URL: &'static str = "cocred:auth-url";
    pub const META_KEY: &'static str = "cocred:auth-key";
    pub const META_SITE: &'static str = "cocred:site-url";

    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }

    /// Read the settings rendered into the page head
    pub fn from_document() -> Self {
        Self {
            url: browser::meta_content(Self::META_URL).unwrap_or_default(),
            anon_key: browser::meta_content(Self::META_KEY).unwrap_or_default(),
            site_url: browser::meta_content(Self::META_SITE),
        }
    }

    /// Site origin used for redirect URLs
    pub fn resolved_site_url(&self) -> String {
        self.site_url
            .clone()
            .or_else(browser::location_origin)
            .unwrap_or_default()
    }
}

/// `user_metadata` written at sign-up
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserMetadata {
    #[serde(default, alias = "full_name")]
    name: Option<String>,
    #[serde(default)]
    role: Option<Role>,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

impl From<UserResponse> for SessionUser {
    fn from(u: UserResponse) -> Self {
        SessionUser {
            id: u.id,
            email: u.email,
            name: u.user_metadata.name,
            role: u.user_metadata.role,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: UserResponse,
}

impl TokenResponse {
    fn into_session(self, now: i64) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at: self.expires_at.or(self.expires_in.map(|secs| now + secs)),
            user: self.user.into(),
        }
    }
}

/// Sign-up answers with a session when email confirmation is disabled,
/// otherwise with the bare user record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    User(UserResponse),
}

/// Error body shapes returned by the service
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Turn an error response body into a [`ProviderError::Rejected`]
fn rejection(status: u16, body: &str) -> ProviderError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| format!("Auth service returned status {status}"));
    ProviderError::rejected(status, message)
}

/// Tokens carried in the URL fragment after an implicit OAuth redirect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<i64>,
}

/// Parse the fragment the service appends to the callback URL
///
/// `Ok(None)` means the fragment is unrelated to auth.
pub fn parse_callback_fragment(
    fragment: &str,
    now: i64,
) -> Result<Option<CallbackTokens>, ProviderError> {
    let fragment = fragment.trim_start_matches('#');
    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_at = None;
    let mut expires_in = None;
    let mut error = None;
    let mut error_description = None;

    for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
        let value = value.into_owned();
        match key.as_ref() {
            "access_token" => access_token = Some(value),
            "refresh_token" => refresh_token = Some(value),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            "error" => error = Some(value),
            "error_description" => error_description = Some(value),
            _ => {}
        }
    }

    if let Some(code) = error {
        return Err(ProviderError::rejected(400, error_description.unwrap_or(code)));
    }

    match (access_token, refresh_token) {
        (Some(access_token), Some(refresh_token)) => Ok(Some(CallbackTokens {
            access_token,
            refresh_token,
            expires_at: expires_at.or(expires_in.map(|secs| now + secs)),
        })),
        _ => Ok(None),
    }
}

fn now() -> i64 {
    Utc::now().timestamp()
}

/// [`AuthProvider`] backed by the hosted service
#[derive(Debug, Clone)]
pub struct GoTrueClient {
    settings: AuthSettings,
}

impl GoTrueClient {
    pub fn new(settings: AuthSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AuthSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.settings.url.trim_end_matches('/'), path)
    }

    /// Authorize URL for a redirect-based OAuth sign-in
    pub fn authorize_url(
        &self,
        provider: OAuthProvider,
        redirect_to: &str,
    ) -> Result<String, ProviderError> {
        if !self.settings.is_configured() {
            return Err(ProviderError::InvalidRequest(
                "auth service is not configured".to_string(),
            ));
        }
        let mut url = url::Url::parse(&self.endpoint("authorize"))
            .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("provider", provider.as_str())
            .append_pair("redirect_to", redirect_to);
        Ok(url.into())
    }

    fn with_headers(&self, builder: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
        let builder = builder.header("apikey", &self.settings.anon_key);
        match bearer {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder.header("Authorization", &format!("Bearer {}", self.settings.anon_key)),
        }
    }

    async fn send(&self, request: Request) -> Result<Response, ProviderError> {
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(rejection(status, &body))
    }

    async fn post_json<B, R>(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<R, ProviderError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let request = self
            .with_headers(Request::post(url), bearer)
            .json(body)
            .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?;
        let response = self.send(request).await?;
        response
            .json::<R>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }

    async fn fetch_user(&self, access_token: &str) -> Result<SessionUser, ProviderError> {
        let request = self
            .with_headers(Request::get(&self.endpoint("user")), Some(access_token))
            .build()
            .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?;
        let response = self.send(request).await?;
        let user: UserResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        Ok(user.into())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, ProviderError> {
        let url = self.endpoint("token?grant_type=refresh_token");
        let tokens: TokenResponse = self
            .post_json(&url, None, &json!({ "refresh_token": refresh_token }))
            .await?;
        Ok(tokens.into_session(now()))
    }

    fn load_persisted(&self) -> Option<Session> {
        let raw = browser::storage_get(SESSION_STORAGE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Discarding unreadable stored session: {}", e);
                self.clear_persisted();
                None
            }
        }
    }

    fn persist(&self, session: &Session) {
        if let Ok(raw) = serde_json::to_string(session) {
            browser::storage_set(SESSION_STORAGE_KEY, &raw);
        }
    }

    fn clear_persisted(&self) {
        browser::storage_remove(SESSION_STORAGE_KEY);
    }

    /// Adopt tokens from an OAuth redirect, if the URL carries any
    async fn session_from_callback(&self) -> Result<Option<Session>, ProviderError> {
        let Some(fragment) = browser::location_hash() else {
            return Ok(None);
        };
        let parsed = parse_callback_fragment(&fragment, now());
        if !matches!(parsed, Ok(None)) {
            browser::clear_location_hash();
        }
        let Some(tokens) = parsed? else {
            return Ok(None);
        };

        let user = self.fetch_user(&tokens.access_token).await?;
        let session = Session {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_at: tokens.expires_at,
            user,
        };
        self.persist(&session);
        Ok(Some(session))
    }
}

impl AuthProvider for GoTrueClient {
    async fn get_current_session(&self) -> Result<Option<Session>, ProviderError> {
        if let Some(session) = self.session_from_callback().await? {
            return Ok(Some(session));
        }

        let Some(mut stored) = self.load_persisted() else {
            return Ok(None);
        };

        if stored.expires_within(now(), REFRESH_MARGIN_SECS) {
            return match self.refresh(&stored.refresh_token).await {
                Ok(session) => {
                    self.persist(&session);
                    Ok(Some(session))
                }
                Err(err) => {
                    warn!("Session refresh failed: {}", err);
                    self.clear_persisted();
                    Ok(None)
                }
            };
        }

        // Never trust a stored token without asking the service
        match self.fetch_user(&stored.access_token).await {
            Ok(user) => {
                stored.user = user;
                self.persist(&stored);
                Ok(Some(stored))
            }
            Err(ProviderError::Rejected { status: 401 | 403, .. }) => {
                self.clear_persisted();
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn sign_in_with_oauth(
        &self,
        provider: OAuthProvider,
        redirect_to: &str,
    ) -> Result<String, ProviderError> {
        self.authorize_url(provider, redirect_to)
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<Session, ProviderError> {
        let url = self.endpoint("token?grant_type=password");
        let tokens: TokenResponse = self.post_json(&url, None, credentials).await?;
        let session = tokens.into_session(now());
        self.persist(&session);
        Ok(session)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, ProviderError> {
        let body = json!({
            "email": request.credentials.email,
            "password": request.credentials.password,
            "data": UserMetadata {
                name: request.name.clone(),
                role: Some(request.role),
            },
        });
        let response: SignUpResponse = self.post_json(&self.endpoint("signup"), None, &body).await?;
        match response {
            SignUpResponse::Session(tokens) => {
                let session = tokens.into_session(now());
                self.persist(&session);
                Ok(SignUpOutcome::SignedIn(session))
            }
            SignUpResponse::User(user) => Ok(SignUpOutcome::ConfirmationSent {
                email: user
                    .email
                    .unwrap_or_else(|| request.credentials.email.clone()),
            }),
        }
    }

    async fn send_password_reset(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), ProviderError> {
        let mut url = url::Url::parse(&self.endpoint("recover"))
            .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?;
        url.query_pairs_mut().append_pair("redirect_to", redirect_to);
        let _: serde_json::Value = self
            .post_json(url.as_str(), None, &json!({ "email": email }))
            .await?;
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        let Some(stored) = self.load_persisted() else {
            return Ok(());
        };
        // Local state goes regardless of what the service says
        self.clear_persisted();

        let request = self
            .with_headers(
                Request::post(&self.endpoint("logout")),
                Some(&stored.access_token),
            )
            .build()
            .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?;
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GoTrueClient {
        GoTrueClient::new(AuthSettings {
            url: "https://project.supabase.test/".to_string(),
            anon_key: "anon-key".to_string(),
            site_url: None,
        })
    }

    #[test]
    fn test_authorize_url_encodes_redirect() {
        let url = client()
            .authorize_url(OAuthProvider::Google, "https://cocred.test/auth/callback")
            .unwrap();
        assert_eq!(
            url,
            "https://project.supabase.test/auth/v1/authorize?provider=google\
             &redirect_to=https%3A%2F%2Fcocred.test%2Fauth%2Fcallback"
        );
    }

    #[test]
    fn test_authorize_url_requires_settings() {
        let err = GoTrueClient::new(AuthSettings::default())
            .authorize_url(OAuthProvider::Github, "https://cocred.test/auth/callback")
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidRequest(_)));

        let err = GoTrueClient::new(AuthSettings {
            url: "not a url".into(),
            anon_key: "k".into(),
            site_url: None,
        })
        .authorize_url(OAuthProvider::Github, "/auth/callback")
        .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidRequest(_)));
    }

    #[test]
    fn test_fragment_with_tokens() {
        let tokens = parse_callback_fragment(
            "#access_token=abc&expires_in=3600&refresh_token=def&token_type=bearer&type=signup",
            1_000,
        )
        .unwrap()
        .unwrap();
        assert_eq!(tokens.access_token, "abc");
        assert_eq!(tokens.refresh_token, "def");
        assert_eq!(tokens.expires_at, Some(4_600));

        let tokens = parse_callback_fragment(
            "access_token=abc&refresh_token=def&expires_at=1900000000&expires_in=3600",
            1_000,
        )
        .unwrap()
        .unwrap();
        assert_eq!(tokens.expires_at, Some(1_900_000_000));
    }

    #[test]
    fn test_fragment_with_error() {
        let err = parse_callback_fragment(
            "error=access_denied&error_code=403&error_description=Email+link+is+invalid",
            0,
        )
        .unwrap_err();
        assert_eq!(err, ProviderError::rejected(400, "Email link is invalid"));
    }

    #[test]
    fn test_unrelated_fragment() {
        assert_eq!(parse_callback_fragment("section-2", 0), Ok(None));
        assert_eq!(parse_callback_fragment("access_token=only", 0), Ok(None));
    }

    #[test]
    fn test_rejection_message_sources() {
        let err = rejection(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(err, ProviderError::rejected(400, "Invalid login credentials"));

        let err = rejection(422, r#"{"code":422,"msg":"Password should be at least 6 characters"}"#);
        assert_eq!(err.to_string(), "Password should be at least 6 characters");

        let err = rejection(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Auth service returned status 502");
    }

    #[test]
    fn test_token_response_into_session() {
        let raw = r#"{
            "access_token": "at",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "rt",
            "user": {
                "id": "u-1",
                "email": "asha@example.edu",
                "created_at": "2025-09-03T10:00:00Z",
                "user_metadata": { "name": "Asha", "role": "faculty" }
            }
        }"#;
        let tokens: TokenResponse = serde_json::from_str(raw).unwrap();
        let session = tokens.into_session(100);

        assert_eq!(session.expires_at, Some(3_700));
        assert_eq!(session.user.display_name(), "Asha");
        assert_eq!(session.user.role, Some(Role::Faculty));
        assert!(session.user.created_at.is_some());
    }

    #[test]
    fn test_sign_up_response_shapes() {
        let confirm = r#"{"id":"u-2","email":"new@example.edu","confirmation_sent_at":"2025-09-03T10:00:00Z"}"#;
        assert!(matches!(
            serde_json::from_str::<SignUpResponse>(confirm).unwrap(),
            SignUpResponse::User(_)
        ));

        let signed_in = r#"{"access_token":"at","refresh_token":"rt","expires_in":3600,"user":{"id":"u-2"}}"#;
        assert!(matches!(
            serde_json::from_str::<SignUpResponse>(signed_in).unwrap(),
            SignUpResponse::Session(_)
        ));
    }

    #[test]
    fn test_metadata_accepts_full_name() {
        let user: UserResponse =
            serde_json::from_str(r#"{"id":"u-3","user_metadata":{"full_name":"Mir Danish"}}"#)
                .unwrap();
        let user: SessionUser = user.into();
        assert_eq!(user.display_name(), "Mir Danish");
        assert_eq!(user.email, None);
    }

    #[test]
    fn test_settings_configured() {
        assert!(client().settings().is_configured());
        assert!(!AuthSettings::default().is_configured());
    }
}
