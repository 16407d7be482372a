//! OAuth return page
//!
//! Finishes the provider round trip once, publishes the resulting session
//! and replaces itself with exactly one destination.

use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::use_auth_context;
use crate::ui::common::{Spinner, SpinnerSize};

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let auth = use_auth_context();

    // Runs once, after hydration
    Effect::new(move |_| {
        spawn_local(async move {
            let route = auth.complete_callback().await;
            log!("Auth callback finished, continuing to {}", route);
            let navigate = use_navigate();
            navigate(
                &route.href(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    });

    view! {
        <div class="min-h-screen bg-theme-primary flex items-center justify-center">
            <Spinner size=SpinnerSize::Large label="Authenticating...".to_string() />
        </div>
    }
}
