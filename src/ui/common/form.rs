use crate::core::session::Role;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Text input with label and inline error
#[component]
pub fn FormField(
    /// Input id, also used for the label's `for`
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value
    value: RwSignal<String>,
    /// Message shown under the input
    #[prop(into, optional)]
    error: Option<Signal<Option<&'static str>>>,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| Signal::from(None));

    view! {
        <div>
            <label for=id class="label">{label}</label>
            <input
                type=input_type
                id=id
                name=id
                autocomplete=autocomplete
                placeholder=placeholder
                class="input-base"
                class:input-invalid=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError error=error />
        </div>
    }
}

/// Password input with a show/hide switch
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    #[prop(default = "Enter your password")]
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(into, optional)]
    error: Option<Signal<Option<&'static str>>>,
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| Signal::from(None));
    let show_password = RwSignal::new(false);

    view! {
        <div>
            <label for=id class="label">{label}</label>
            <div class="relative">
                <input
                    type=move || if show_password.get() { "text" } else { "password" }
                    id=id
                    name=id
                    autocomplete=autocomplete
                    placeholder=placeholder
                    class="input-base pr-10"
                    class:input-invalid=move || error.get().is_some()
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    title=move || if show_password.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || {
                        if show_password.get() {
                            view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <FieldError error=error />
        </div>
    }
}

#[component]
fn FieldError(error: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <p class="mt-1 flex items-center text-sm text-theme-error">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </p>
            }
        })
    }
}

/// Two-way switch between the student and faculty roles
#[component]
pub fn RoleSwitch(
    /// Selected role
    value: RwSignal<Role>,
    /// Button order, left to right
    #[prop(default = [Role::Student, Role::Faculty])]
    order: [Role; 2],
) -> impl IntoView {
    view! {
        <div class="role-switch" role="radiogroup" aria-label="Role">
            {order
                .into_iter()
                .map(|role| {
                    view! {
                        <button
                            type="button"
                            role="radio"
                            class="role-switch-option"
                            class:role-switch-active=move || value.get() == role
                            aria-checked=move || (value.get() == role).to_string()
                            on:click=move |_| value.set(role)
                        >
                            {role.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
