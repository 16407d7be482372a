use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::use_auth_context;
use crate::core::auth::validation;
use crate::core::routes::AppRoute;
use crate::ui::common::{ErrorMessage, FormField, InlineSpinner, SuccessMessage};

/// Password reset request form
#[component]
pub fn ForgotForm() -> impl IntoView {
    let auth = use_auth_context();

    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        notice.set(None);

        let value = email.get_untracked();
        if let Err(message) = validation::check_email(&value) {
            email_error.set(Some(message));
            return;
        }
        email_error.set(None);

        let value = value.trim().to_string();
        loading.set(true);
        spawn_local(async move {
            match auth.request_password_reset(value.clone()).await {
                Ok(()) => notice.set(Some(format!(
                    "If an account exists for {value}, a reset link is on its way."
                ))),
                Err(err) => error.set(Some(err.message)),
            }
            loading.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate>
            <ErrorMessage error=error />
            <SuccessMessage message=notice />

            <FormField
                id="email"
                label="Email"
                input_type="email"
                autocomplete="email"
                placeholder="you@college.edu"
                value=email
                error=email_error
                disabled=loading
            />

            <button type="submit" class="btn-primary w-full" disabled=move || loading.get()>
                {move || {
                    if loading.get() {
                        view! {
                            <span class="flex items-center justify-center">
                                <InlineSpinner class="mr-2".to_string() />
                                "Sending..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Send Reset Link"</span> }.into_any()
                    }
                }}
            </button>

            <div class="text-center text-sm text-theme-secondary">
                <A href=AppRoute::login().path() attr:class="link-accent font-medium">
                    "Back to Log In"
                </A>
            </div>
        </form>
    }
}
