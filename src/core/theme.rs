//! Light/dark theme resolution
//!
//! The resolver owns the one piece of client state that outlives a page load:
//! the user's explicit theme choice. Resolution order is
//! stored choice > OS `prefers-color-scheme` signal > light.
//!
//! Storage and the OS signal are injected so the state machine can be driven
//! natively in tests and by the browser bindings in `ui::theme`.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

/// localStorage key holding the explicit choice
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` while the dark theme is active
pub const DARK_CLASS: &str = "dark";

/// Media query used for the OS dark-mode signal
pub const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Logo shown on dark backgrounds
pub const LOGO_DARK: &str = "/logo.svg";

/// Logo shown on light backgrounds
pub const LOGO_LIGHT: &str = "/logo-w.svg";

/// Visual mode of the application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Theme implied by the OS signal
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    /// Logo asset matching this theme
    pub fn logo_src(&self) -> &'static str {
        match self {
            ThemePreference::Dark => LOGO_DARK,
            ThemePreference::Light => LOGO_LIGHT,
        }
    }

    /// Label for a button that switches away from this theme
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "Light Mode",
            ThemePreference::Light => "Dark Mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Where the resolver's current value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    /// Explicit user choice read from storage or made by toggling
    Stored,
    /// Following the OS color scheme
    System,
    /// Nothing stored and no OS signal available
    Default,
}

/// Persistent storage for the explicit choice
///
/// Implementations swallow their own failures: a theme that cannot be
/// persisted is still applied for the current page.
pub trait ThemeStore {
    fn load(&self) -> Option<ThemePreference>;
    fn save(&self, preference: ThemePreference);
    fn clear(&self);
}

/// Store kept in memory, used on the server and in tests
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: Cell<Option<ThemePreference>>,
}

impl MemoryThemeStore {
    pub fn new(initial: Option<ThemePreference>) -> Self {
        Self {
            value: Cell::new(initial),
        }
    }

    pub fn get(&self) -> Option<ThemePreference> {
        self.value.get()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<ThemePreference> {
        self.value.get()
    }

    fn save(&self, preference: ThemePreference) {
        self.value.set(Some(preference));
    }

    fn clear(&self) {
        self.value.set(None);
    }
}

type Subscriber = Box<dyn Fn(ThemePreference) + Send + Sync>;

/// Theme state machine with a single subscriber list
///
/// While no explicit choice exists the resolver tracks the OS signal. The
/// first [`toggle`](Self::toggle) persists the result and pins it; OS changes
/// are ignored from then on until [`clear_preference`](Self::clear_preference).
pub struct ThemeResolver<S> {
    store: S,
    current: ThemePreference,
    source: ThemeSource,
    system_dark: Option<bool>,
    subscribers: Vec<Subscriber>,
}

impl<S: ThemeStore> ThemeResolver<S> {
    /// Resolve the initial theme from storage and the OS signal
    ///
    /// `system_dark` is `None` when the media query is unavailable.
    pub fn resolve(store: S, system_dark: Option<bool>) -> Self {
        let (current, source) = match (store.load(), system_dark) {
            (Some(stored), _) => (stored, ThemeSource::Stored),
            (None, Some(dark)) => (ThemePreference::from_system(dark), ThemeSource::System),
            (None, None) => (ThemePreference::default(), ThemeSource::Default),
        };

        Self {
            store,
            current,
            source,
            system_dark,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    /// Whether OS changes still affect the theme
    pub fn follows_system(&self) -> bool {
        self.source != ThemeSource::Stored
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a callback run after every change of the effective theme
    pub fn subscribe(&mut self, subscriber: impl Fn(ThemePreference) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Feed a new OS signal; returns the new theme if it changed
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<ThemePreference> {
        self.system_dark = Some(prefers_dark);
        if !self.follows_system() {
            return None;
        }
        self.source = ThemeSource::System;
        self.apply(ThemePreference::from_system(prefers_dark))
    }

    /// Flip the theme and persist it as the explicit choice
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    /// Persist an explicit choice
    pub fn set(&mut self, preference: ThemePreference) {
        self.store.save(preference);
        self.source = ThemeSource::Stored;
        self.apply(preference);
    }

    /// Forget the explicit choice and go back to following the OS
    pub fn clear_preference(&mut self) -> ThemePreference {
        self.store.clear();
        match self.system_dark {
            Some(dark) => {
                self.source = ThemeSource::System;
                self.apply(ThemePreference::from_system(dark));
            }
            None => {
                self.source = ThemeSource::Default;
                self.apply(ThemePreference::default());
            }
        }
        self.current
    }

    /// Run every subscriber with the current value
    pub fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(self.current);
        }
    }

    fn apply(&mut self, preference: ThemePreference) -> Option<ThemePreference> {
        if preference == self.current {
            return None;
        }
        self.current = preference;
        self.notify();
        Some(preference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder<S: ThemeStore>(
        resolver: &mut ThemeResolver<S>,
    ) -> Arc<Mutex<Vec<ThemePreference>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        resolver.subscribe(move |pref| sink.lock().unwrap().push(pref));
        seen
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(" light ".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert!("auto".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }

    #[test]
    fn test_logo_follows_theme() {
        assert_eq!(ThemePreference::Dark.logo_src(), LOGO_DARK);
        assert_eq!(ThemePreference::Light.logo_src(), LOGO_LIGHT);
        assert_eq!(ThemePreference::Dark.toggle_label(), "Light Mode");
    }

    #[test]
    fn test_stored_choice_beats_system() {
        let store = MemoryThemeStore::new(Some(ThemePreference::Light));
        let resolver = ThemeResolver::resolve(store, Some(true));

        assert_eq!(resolver.current(), ThemePreference::Light);
        assert_eq!(resolver.source(), ThemeSource::Stored);
        assert!(!resolver.follows_system());
    }

    #[test]
    fn test_system_used_when_nothing_stored() {
        let resolver = ThemeResolver::resolve(MemoryThemeStore::default(), Some(true));

        assert_eq!(resolver.current(), ThemePreference::Dark);
        assert_eq!(resolver.source(), ThemeSource::System);
    }

    #[test]
    fn test_default_is_light() {
        let resolver = ThemeResolver::resolve(MemoryThemeStore::default(), None);

        assert_eq!(resolver.current(), ThemePreference::Light);
        assert_eq!(resolver.source(), ThemeSource::Default);
        assert!(resolver.follows_system());
    }

    #[test]
    fn test_toggle_twice_round_trips_and_persists() {
        for initial in [ThemePreference::Light, ThemePreference::Dark] {
            let store = MemoryThemeStore::new(Some(initial));
            let mut resolver = ThemeResolver::resolve(store, Some(false));

            let first = resolver.toggle();
            assert_eq!(first, initial.toggled());
            assert_eq!(resolver.store().get(), Some(first));

            let second = resolver.toggle();
            assert_eq!(second, initial);
            assert_eq!(resolver.current(), initial);
            assert_eq!(resolver.store().get(), Some(initial));
        }
    }

    #[test]
    fn test_os_change_tracked_until_toggle() {
        let mut resolver = ThemeResolver::resolve(MemoryThemeStore::default(), Some(false));
        assert_eq!(resolver.current(), ThemePreference::Light);

        assert_eq!(resolver.system_changed(true), Some(ThemePreference::Dark));
        assert_eq!(resolver.current(), ThemePreference::Dark);
        // Following the OS never writes storage
        assert_eq!(resolver.store().get(), None);

        resolver.toggle();
        assert_eq!(resolver.current(), ThemePreference::Light);

        assert_eq!(resolver.system_changed(false), None);
        assert_eq!(resolver.system_changed(true), None);
        assert_eq!(resolver.current(), ThemePreference::Light);
    }

    #[test]
    fn test_stored_choice_ignores_os_changes() {
        let store = MemoryThemeStore::new(Some(ThemePreference::Dark));
        let mut resolver = ThemeResolver::resolve(store, Some(true));

        assert_eq!(resolver.system_changed(false), None);
        assert_eq!(resolver.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_subscribers_see_changes_only() {
        let mut resolver = ThemeResolver::resolve(MemoryThemeStore::default(), Some(false));
        let seen = recorder(&mut resolver);

        resolver.system_changed(false);
        resolver.system_changed(true);
        resolver.toggle();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![ThemePreference::Dark, ThemePreference::Light]
        );
    }

    #[test]
    fn test_clear_preference_resumes_following_system() {
        let store = MemoryThemeStore::new(Some(ThemePreference::Light));
        let mut resolver = ThemeResolver::resolve(store, Some(true));

        assert_eq!(resolver.clear_preference(), ThemePreference::Dark);
        assert_eq!(resolver.source(), ThemeSource::System);
        assert_eq!(resolver.store().get(), None);

        assert_eq!(resolver.system_changed(false), Some(ThemePreference::Light));
    }
}
