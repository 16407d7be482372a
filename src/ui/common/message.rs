//! Message banners for form errors and confirmations

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Shows the message when Some; the close button clears it
#[component]
pub fn ErrorMessage(
    /// Error signal, cleared on dismiss
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span class="flex-1">{move || error.get().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="message-dismiss"
                    title="Dismiss"
                    on:click=move |_| error.set(None)
                >
                    <Icon name=icons::X class="h-4 w-4"/>
                </button>
            </div>
        </Show>
    }
}

/// Success message component
/// Displays a success message with a check icon
#[component]
pub fn SuccessMessage(
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="success-message">
                <Icon name=icons::CHECK class="icon-text"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
