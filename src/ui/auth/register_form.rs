//! Sign-up form component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_auth_context;
use super::oauth_buttons::OAuthButtons;
use crate::core::auth::SignUpOutcome;
use crate::core::auth::validation::{self, FormErrors};
use crate::core::routes::AppRoute;
use crate::core::session::Role;
use crate::ui::common::{
    ErrorMessage, FormField, InlineSpinner, PasswordField, RoleSwitch, SuccessMessage,
};

/// Sign-up form component
///
/// The user is signed straight in when the service allows it; otherwise
/// the form is replaced by a confirmation notice.
#[component]
pub fn RegisterForm() -> impl IntoView {
    let auth = use_auth_context();

    let role = RwSignal::new(Role::Student);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let request = match validation::sign_up_form(
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
            &name.get_untracked(),
            role.get_untracked(),
        ) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FormErrors::default());

        loading.set(true);
        spawn_local(async move {
            match auth.register(request).await {
                Ok(SignUpOutcome::SignedIn(_)) => {
                    let navigate = use_navigate();
                    navigate(&AppRoute::Dashboard.href(), Default::default());
                }
                Ok(SignUpOutcome::ConfirmationSent { email }) => {
                    notice.set(Some(format!(
                        "Check {email} for a link to confirm your account, then log in."
                    )));
                    loading.set(false);
                }
                Err(err) => {
                    error.set(Some(err.message));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <Show
            when=move || notice.with(Option::is_none)
            fallback=move || view! {
                <div class="space-y-5">
                    <SuccessMessage message=notice />
                    <A href=AppRoute::login().path() attr:class="btn-primary w-full">
                        "Back to Log In"
                    </A>
                </div>
            }
        >
            <form on:submit=on_submit class="space-y-5" novalidate>
                <RoleSwitch value=role />

                <ErrorMessage error=error />

                <FormField
                    id="name"
                    label="Full name"
                    autocomplete="name"
                    placeholder="Your name"
                    value=name
                    disabled=loading
                />

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
                    autocomplete="new-password"
                    placeholder="At least 6 characters"
                    value=password
                    error=Signal::derive(move || errors.get().password)
                    disabled=loading
                />

                <PasswordField
                    id="confirm"
                    label="Confirm password"
                    autocomplete="new-password"
                    placeholder="Repeat your password"
                    value=confirm
                    error=Signal::derive(move || errors.get().confirm)
                    disabled=loading
                />

                <button type="submit" class="btn-primary w-full" disabled=move || loading.get()>
                    {move || {
                        if loading.get() {
                            view! {
                                <span class="flex items-center justify-center">
                                    <InlineSpinner class="mr-2".to_string() />
                                    "Creating account..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Sign Up"</span> }.into_any()
                        }
                    }}
                </button>

                <OAuthButtons error=error />

                <div class="text-center text-sm text-theme-secondary">
                    "Already have an account? "
                    <A href=AppRoute::login().path() attr:class="link-accent font-medium">
                        "Log in"
                    </A>
                </div>
            </form>
        </Show>
    }
}
