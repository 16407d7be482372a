//! Theme context module for the light/dark theme
//!
//! Provides:
//! - ThemeContext, one per application, wrapping the core `ThemeResolver`
//! - LocalStorage persistence through `BrowserThemeStore`
//! - System theme tracking via prefers-color-scheme
//! - ThemeToggle and Logo components

use leptos::prelude::*;

use crate::core::browser;
use crate::core::theme::{
    COLOR_SCHEME_QUERY, DARK_CLASS, THEME_STORAGE_KEY, ThemePreference, ThemeResolver,
    ThemeStore,
};

/// Theme choice kept in localStorage
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeStore;

impl ThemeStore for BrowserThemeStore {
    fn load(&self) -> Option<ThemePreference> {
        browser::storage_get(THEME_STORAGE_KEY)?.parse().ok()
    }

    fn save(&self, preference: ThemePreference) {
        browser::storage_set(THEME_STORAGE_KEY, preference.as_str());
    }

    fn clear(&self) {
        browser::storage_remove(THEME_STORAGE_KEY);
    }
}

/// Toggle the `dark` class on `<html>`
fn apply_theme_class(preference: ThemePreference) {
    browser::set_root_class(DARK_CLASS, preference.is_dark());
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Effective theme
    pub preference: RwSignal<ThemePreference>,
    resolver: StoredValue<ThemeResolver<BrowserThemeStore>>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.preference.get().is_dark()
    }

    /// Logo asset for the current theme
    pub fn logo_src(&self) -> &'static str {
        self.preference.get().logo_src()
    }

    /// Flip the theme and persist the choice
    pub fn toggle(&self) {
        self.resolver.update_value(|resolver| {
            resolver.toggle();
        });
    }

    fn system_changed(&self, prefers_dark: bool) {
        self.resolver.update_value(|resolver| {
            resolver.system_changed(prefers_dark);
        });
    }
}

/// Provide theme context to the application
///
/// Called once at the root. Server and client both start from light so the
/// hydrated markup matches; the resolved theme is applied right after
/// hydration (the head bootstrap script has already set the class).
pub fn provide_theme_context() -> ThemeContext {
    let preference = RwSignal::new(ThemePreference::default());

    let mut resolver =
        ThemeResolver::resolve(BrowserThemeStore, browser::media_matches(COLOR_SCHEME_QUERY));
    resolver.subscribe(move |next| {
        apply_theme_class(next);
        preference.set(next);
    });

    let ctx = ThemeContext {
        preference,
        resolver: StoredValue::new(resolver),
    };

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            ctx.resolver.with_value(|resolver| {
                leptos::logging::log!(
                    "Theme resolved to {} ({:?})",
                    resolver.current(),
                    resolver.source()
                );
                apply_theme_class(resolver.current());
                preference.set(resolver.current());
            });
        });

        watch_system_theme(ctx);
    }

    provide_context(ctx);
    ctx
}

/// Listen for system theme changes for the lifetime of the page
#[cfg(not(feature = "ssr"))]
fn watch_system_theme(ctx: ThemeContext) {
    use leptos::web_sys;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(media_query)) = window.match_media(COLOR_SCHEME_QUERY) else {
        return;
    };

    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
        move |e: web_sys::MediaQueryListEvent| {
            ctx.system_changed(e.matches());
        },
    );
    let _ = media_query.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());

    // The context lives as long as the page
    handler.forget();
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Script run in `<head>` before first paint, mirroring the resolver's order
pub const THEME_BOOTSTRAP_SCRIPT: &str = r#"(function(){try{var t=localStorage.getItem("theme");if(t!=="light"&&t!=="dark"){t=window.matchMedia&&window.matchMedia("(prefers-color-scheme: dark)").matches?"dark":"light";}if(t==="dark"){document.documentElement.classList.add("dark");}}catch(e){}})();"#;

/// Floating or inline light/dark switch
#[component]
pub fn ThemeToggle(
    /// Additional CSS classes
    #[prop(default = "theme-toggle")]
    class: &'static str,
) -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            type="button"
            class=class
            on:click=move |_| theme.toggle()
            title="Toggle theme"
        >
            {move || theme.preference.get().toggle_label()}
        </button>
    }
}

/// Application logo, swapped with the theme
#[component]
pub fn Logo(
    #[prop(default = "h-12 w-auto")]
    class: &'static str,
) -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <img src=move || theme.logo_src() alt="CoCred Logo" class=class draggable="false" />
    }
}
