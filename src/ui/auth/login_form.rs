//! Login form component
//!
//! Email and password sign-in with a role switch, the forgotten-password
//! link and the OAuth buttons. An `?error=` flag left by the callback page
//! is shown as the initial error.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::context::use_auth_context;
use super::oauth_buttons::OAuthButtons;
use crate::core::auth::validation::{self, FormErrors};
use crate::core::routes::{AppRoute, LoginErrorFlag};
use crate::core::session::Role;
use crate::ui::common::{ErrorMessage, FormField, InlineSpinner, PasswordField, RoleSwitch};

/// Login form component
#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = use_auth_context();
    let query = use_query_map();

    // Form state
    let role = RwSignal::new(Role::Student);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let loading = RwSignal::new(false);

    let flagged = query.with_untracked(|q| {
        q.get("error")
            .and_then(|value| LoginErrorFlag::parse(&value))
            .map(|flag| flag.message().to_string())
    });
    let error = RwSignal::new(flagged);

    // Clear a field's message as soon as it is edited
    Effect::new(move |_| {
        email.track();
        errors.update(|e| e.email = None);
    });
    Effect::new(move |_| {
        password.track();
        errors.update(|e| e.password = None);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let credentials =
            match validation::sign_in_form(&email.get_untracked(), &password.get_untracked()) {
                Ok(credentials) => credentials,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };

        loading.set(true);
        spawn_local(async move {
            match auth.login(credentials).await {
                Ok(()) => {
                    let navigate = use_navigate();
                    navigate(&AppRoute::Dashboard.href(), Default::default());
                }
                Err(err) => {
                    error.set(Some(err.message));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate>
            <RoleSwitch value=role order=[Role::Faculty, Role::Student] />

            <ErrorMessage error=error />

            <FormField
                id="email"
                label="Email"
                input_type="email"
                autocomplete="email"
                placeholder="you@college.edu"
                value=email
                error=Signal::derive(move || errors.get().email)
                disabled=loading
            />

            <PasswordField
                id="password"
                label="Password"
                value=password
                error=Signal::derive(move || errors.get().password)
                disabled=loading
            />

            <div class="flex justify-end">
                <A href=AppRoute::Forgot.path() attr:class="text-sm link-accent">
                    "Forgotten password?"
                </A>
            </div>

            <button type="submit" class="btn-primary w-full" disabled=move || loading.get()>
                {move || {
                    if loading.get() {
                        view! {
                            <span class="flex items-center justify-center">
                                <InlineSpinner class="mr-2".to_string() />
                                "Logging in..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Log In"</span> }.into_any()
                    }
                }}
            </button>

            <OAuthButtons error=error />

            <div class="text-center text-sm text-theme-secondary">
                "Don't have an account? "
                <A href=AppRoute::Signup.path() attr:class="link-accent font-medium">
                    "Sign up"
                </A>
            </div>
        </form>
    }
}
