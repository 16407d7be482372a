//! Application routes and their session policy class

use std::fmt;

/// Error flag carried to the login page as `?error=...`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoginErrorFlag {
    /// The provider reported a failure while completing sign-in
    AuthError,
    /// Anything else went wrong while completing sign-in
    UnexpectedError,
}

impl LoginErrorFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginErrorFlag::AuthError => "auth_error",
            LoginErrorFlag::UnexpectedError => "unexpected_error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auth_error" => Some(LoginErrorFlag::AuthError),
            "unexpected_error" => Some(LoginErrorFlag::UnexpectedError),
            _ => None,
        }
    }

    /// Message shown on the login page for this flag
    pub fn message(&self) -> &'static str {
        match self {
            LoginErrorFlag::AuthError => "We couldn't complete your sign-in. Please try again.",
            LoginErrorFlag::UnexpectedError => {
                "Something went wrong while signing you in. Please try again."
            }
        }
    }
}

/// How a page reacts to the session state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// Requires a session, otherwise redirects to login
    Protected,
    /// Only for visitors, signed-in users go to the dashboard
    PublicOnly,
    /// Rendered regardless of session
    Neutral,
}

/// Every navigable route of the application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    About,
    Login { error: Option<LoginErrorFlag> },
    Signup,
    Forgot,
    Dashboard,
    AuthCallback,
}

impl AppRoute {
    /// Path of the OAuth callback handled by [`AppRoute::AuthCallback`]
    pub const CALLBACK_PATH: &'static str = "/auth/callback";

    pub const fn login() -> Self {
        AppRoute::Login { error: None }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::About => "/about",
            AppRoute::Login { .. } => "/login",
            AppRoute::Signup => "/signup",
            AppRoute::Forgot => "/forgot",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::AuthCallback => Self::CALLBACK_PATH,
        }
    }

    /// Path including the query string
    pub fn href(&self) -> String {
        match self {
            AppRoute::Login { error: Some(flag) } => {
                format!("{}?error={}", self.path(), flag.as_str())
            }
            _ => self.path().to_string(),
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            AppRoute::Dashboard => PageKind::Protected,
            AppRoute::Landing => PageKind::PublicOnly,
            AppRoute::About
            | AppRoute::Login { .. }
            | AppRoute::Signup
            | AppRoute::Forgot
            | AppRoute::AuthCallback => PageKind::Neutral,
        }
    }

    /// Parse a path with an optional query string
    ///
    /// Unknown `error` values on the login route are dropped.
    pub fn parse(href: &str) -> Option<Self> {
        let (path, query) = match href.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (href, None),
        };
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        let route = match path {
            "/" => AppRoute::Landing,
            "/about" => AppRoute::About,
            "/login" => AppRoute::Login {
                error: query.and_then(error_flag_from_query),
            },
            "/signup" => AppRoute::Signup,
            "/forgot" => AppRoute::Forgot,
            "/dashboard" => AppRoute::Dashboard,
            Self::CALLBACK_PATH => AppRoute::AuthCallback,
            _ => return None,
        };
        Some(route)
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

fn error_flag_from_query(query: &str) -> Option<LoginErrorFlag> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "error")
        .and_then(|(_, value)| LoginErrorFlag::parse(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_href_carries_error_flag() {
        let route = AppRoute::Login {
            error: Some(LoginErrorFlag::AuthError),
        };
        assert_eq!(route.href(), "/login?error=auth_error");
        assert_eq!(AppRoute::login().href(), "/login");
        assert_eq!(
            AppRoute::Login {
                error: Some(LoginErrorFlag::UnexpectedError)
            }
            .to_string(),
            "/login?error=unexpected_error"
        );
    }

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(AppRoute::parse("/"), Some(AppRoute::Landing));
        assert_eq!(AppRoute::parse(""), Some(AppRoute::Landing));
        assert_eq!(AppRoute::parse("/about/"), Some(AppRoute::About));
        assert_eq!(AppRoute::parse("/auth/callback"), Some(AppRoute::AuthCallback));
        assert_eq!(AppRoute::parse("/dashboard"), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::parse("/nope"), None);
    }

    #[test]
    fn test_parse_login_query() {
        assert_eq!(
            AppRoute::parse("/login?error=unexpected_error"),
            Some(AppRoute::Login {
                error: Some(LoginErrorFlag::UnexpectedError)
            })
        );
        assert_eq!(
            AppRoute::parse("/login?foo=1&error=auth_error"),
            Some(AppRoute::Login {
                error: Some(LoginErrorFlag::AuthError)
            })
        );
        assert_eq!(AppRoute::parse("/login?error=bogus"), Some(AppRoute::login()));
    }

    #[test]
    fn test_page_kinds() {
        assert_eq!(AppRoute::Dashboard.kind(), PageKind::Protected);
        assert_eq!(AppRoute::Landing.kind(), PageKind::PublicOnly);
        for route in [
            AppRoute::About,
            AppRoute::login(),
            AppRoute::Signup,
            AppRoute::Forgot,
            AppRoute::AuthCallback,
        ] {
            assert_eq!(route.kind(), PageKind::Neutral, "{route}");
        }
    }
}
