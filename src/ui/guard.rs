//! Per-page session guard
//!
//! Wraps a page and decides from the shared session state whether to show
//! it, show a loading state, or send the user elsewhere.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::routes::AppRoute;
use crate::core::session::{GuardDecision, decide};
use crate::ui::auth::use_auth_context;
use crate::ui::common::LoadingScreen;

#[component]
pub fn SessionGuard(
    /// The page being guarded
    route: AppRoute,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth_context();
    let location = use_location();
    let kind = route.kind();
    let decision = Memo::new(move |_| auth.state.with(|state| decide(kind, state)));

    // Sign-out navigates to "/" before publishing the signed-out state. The
    // dashboard guard then sees a path that is no longer its own and stays
    // quiet, and the landing guard only ever sees the signed-out state.
    Effect::new(move |_| {
        let current = location.pathname.get_untracked();
        let Some(target) = decision.get().redirect_from(route, &current) else {
            return;
        };
        log!("Redirecting from {} to {}", route.path(), target);
        let navigate = use_navigate();
        navigate(
            &target.href(),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Wait => view! { <LoadingScreen /> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
