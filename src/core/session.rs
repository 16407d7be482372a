//! Session model and the route-guard policy
//!
//! The session itself belongs to the auth provider. This module only keeps
//! what the pages need to read from it and decides what a page does for a
//! given session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::auth::ProviderError;
use crate::core::routes::{AppRoute, PageKind};

/// Account role chosen at sign-up
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Faculty,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
        }
    }
}

/// User fields read for greeting text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl SessionUser {
    /// Name used in "Welcome, ..." headers: display name, else email
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("User")
    }

    /// Dashboard welcome line
    pub fn greeting(&self) -> String {
        format!("Welcome, {}!", self.display_name())
    }

    /// Single uppercase letter for the avatar badge
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Account creation date formatted for the dashboard
    pub fn member_since(&self) -> Option<String> {
        self.created_at
            .map(|created| created.format("%-d %B %Y").to_string())
    }
}

/// Provider-issued session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) at which the access token expires
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

impl Session {
    /// Whether the access token expires within `margin_secs` of `now`
    pub fn expires_within(&self, now: i64, margin_secs: i64) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at <= now + margin_secs)
    }
}

/// What the application knows about the session
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SessionState {
    /// Lookup in flight
    #[default]
    Unknown,
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    /// Outcome of a session lookup; a failed lookup counts as signed out
    pub fn from_lookup(result: Result<Option<Session>, ProviderError>) -> Self {
        match result {
            Ok(Some(session)) => SessionState::Authenticated(session),
            Ok(None) | Err(_) => SessionState::Unauthenticated,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SessionState::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }
}

/// What a page should do for the current session state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show a loading affordance in place of the content
    Wait,
    Render,
    Redirect(AppRoute),
}

impl GuardDecision {
    /// Where the guard of `page` should send the user, if anywhere
    ///
    /// A guard whose page is no longer the current path never redirects.
    pub fn redirect_from(self, page: AppRoute, current_path: &str) -> Option<AppRoute> {
        match self {
            GuardDecision::Redirect(target) if current_path == page.path() => Some(target),
            _ => None,
        }
    }
}

/// Guard policy by page kind
pub fn decide(page: PageKind, state: &SessionState) -> GuardDecision {
    match (page, state) {
        (PageKind::Neutral, _) => GuardDecision::Render,

        (PageKind::Protected, SessionState::Unknown) => GuardDecision::Wait,
        (PageKind::Protected, SessionState::Authenticated(_)) => GuardDecision::Render,
        (PageKind::Protected, SessionState::Unauthenticated) => {
            GuardDecision::Redirect(AppRoute::login())
        }

        (PageKind::PublicOnly, SessionState::Authenticated(_)) => {
            GuardDecision::Redirect(AppRoute::Dashboard)
        }
        (PageKind::PublicOnly, _) => GuardDecision::Render,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn user(name: Option<&str>, email: Option<&str>) -> SessionUser {
        SessionUser {
            id: "3f1c6a40-7a5e-4a1b-9c53-0d2f5b7e8a11".to_string(),
            email: email.map(str::to_string),
            name: name.map(str::to_string),
            role: Some(Role::Student),
            created_at: None,
        }
    }

    pub fn session() -> Session {
        Session {
            access_token: "access-token".to_string(),
            refresh_token: "refresh-token".to_string(),
            expires_at: Some(1_900_000_000),
            user: user(Some("Asha Rather"), Some("asha@example.edu")),
        }
    }
}
