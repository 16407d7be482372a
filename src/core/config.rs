//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::auth::AuthSettings;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the hosted auth service
    /// Example: https://abcd.supabase.co
    pub auth_url: Option<String>,

    /// Public anon key of the auth service
    pub auth_anon_key: Option<String>,

    /// Public origin of this site, used for OAuth and recovery redirects
    /// Example: https://cocred.example.edu
    pub site_url: Option<String>,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            auth_url: get("COCRED_AUTH_URL"),
            auth_anon_key: get("COCRED_AUTH_ANON_KEY"),
            site_url: get("COCRED_SITE_URL").map(|v| v.trim_end_matches('/').to_string()),
            log_filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Check if the auth service is configured
    pub fn has_auth(&self) -> bool {
        self.auth_url.is_some() && self.auth_anon_key.is_some()
    }

    /// Check if a public site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Settings handed to the browser
    pub fn auth_settings(&self) -> AuthSettings {
        AuthSettings {
            url: self.auth_url.clone().unwrap_or_default(),
            anon_key: self.auth_anon_key.clone().unwrap_or_default(),
            site_url: self.site_url.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

// The anon key is public, but it still stays out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("auth_url", &self.auth_url)
            .field("auth_anon_key", &self.auth_anon_key.as_ref().map(|_| "<set>"))
            .field("site_url", &self.site_url)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = config_from(&[
            ("COCRED_AUTH_URL", "https://abcd.supabase.co"),
            ("COCRED_AUTH_ANON_KEY", "anon"),
            ("COCRED_SITE_URL", "https://cocred.example.edu/"),
            ("RUST_LOG", "cocred=debug"),
        ]);

        assert!(config.has_auth());
        assert!(config.has_site_url());
        assert_eq!(config.site_url.as_deref(), Some("https://cocred.example.edu"));
        assert_eq!(config.log_filter, "cocred=debug");
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = config_from(&[]);

        assert!(!config.has_auth());
        assert!(!config.has_site_url());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.auth_settings(), AuthSettings::default());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("COCRED_AUTH_URL", "  "), ("COCRED_AUTH_ANON_KEY", "anon")]);

        assert!(config.auth_url.is_none());
        assert!(!config.has_auth());
    }

    #[test]
    fn test_auth_settings_copy_values() {
        let config = config_from(&[
            ("COCRED_AUTH_URL", "https://abcd.supabase.co"),
            ("COCRED_AUTH_ANON_KEY", "anon"),
        ]);
        let settings = config.auth_settings();

        assert!(settings.is_configured());
        assert_eq!(settings.url, "https://abcd.supabase.co");
        assert_eq!(settings.site_url, None);
    }

    #[test]
    fn test_debug_hides_key() {
        let config = config_from(&[("COCRED_AUTH_ANON_KEY", "very-secret-looking")]);
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("<set>"));
        assert!(!debug_str.contains("very-secret-looking"));
    }
}
