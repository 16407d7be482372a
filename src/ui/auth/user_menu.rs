//! User menu component
//!
//! Shows login/sign-up links when signed out, or the user's name with
//! dashboard and sign-out actions when signed in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::use_auth_context;
use crate::core::routes::AppRoute;
use crate::core::session::SessionState;

/// User menu component for the header
#[component]
pub fn UserMenu(
    /// Show the dashboard link when signed in
    #[prop(default = true)]
    dashboard_link: bool,
) -> impl IntoView {
    let auth = use_auth_context();
    let signing_out = RwSignal::new(false);

    let handle_logout = move |_| {
        signing_out.set(true);
        // Always ends with a navigation; the menu is re-rendered signed out
        spawn_local(auth.logout());
    };

    view! {
        <div class="flex items-center gap-3">
            {move || {
                auth.state.with(|state| match state {
                    SessionState::Unknown => {
                        view! {
                            <div class="w-24 h-8 rounded-lg bg-theme-secondary animate-pulse"></div>
                        }.into_any()
                    }
                    SessionState::Unauthenticated => {
                        view! {
                            <A href=AppRoute::login().path() attr:class="nav-link">"Log In"</A>
                            <A href=AppRoute::Signup.path() attr:class="btn-primary">"Sign Up"</A>
                        }.into_any()
                    }
                    SessionState::Authenticated(session) => {
                        let name = session.user.display_name().to_string();
                        let initial = session.user.initial();
                        view! {
                            {dashboard_link.then(|| view! {
                                <A href=AppRoute::Dashboard.path() attr:class="nav-link">"Dashboard"</A>
                            })}
                            <div class="hidden sm:flex items-center gap-2 text-sm text-theme-secondary">
                                <span class="avatar-sm">{initial}</span>
                                <span>"Welcome, " {name}</span>
                            </div>
                            <button
                                type="button"
                                class="btn-outline"
                                disabled=move || signing_out.get()
                                on:click=handle_logout
                            >
                                "Sign Out"
                            </button>
                        }.into_any()
                    }
                })
            }}
        </div>
    }
}
