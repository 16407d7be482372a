use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::auth::OAuthProvider;
use crate::ui::icon::{Icon, icons};

fn provider_icon(provider: OAuthProvider) -> &'static str {
    match provider {
        OAuthProvider::Google => icons::GOOGLE,
        OAuthProvider::Github => icons::GITHUB,
    }
}

/// One button per external identity provider
///
/// Success leaves the app for the provider; failures land in `error`.
#[component]
pub fn OAuthButtons(error: RwSignal<Option<String>>) -> impl IntoView {
    let auth = use_auth_context();
    let pending = RwSignal::new(None::<OAuthProvider>);

    let start = move |provider: OAuthProvider| {
        error.set(None);
        pending.set(Some(provider));
        spawn_local(async move {
            if let Err(err) = auth.sign_in_with_oauth(provider).await {
                error.set(Some(err.message));
                pending.set(None);
            }
        });
    };

    view! {
        <div class="divider-label">"or"</div>
        <div class="space-y-3">
            {OAuthProvider::ALL
                .into_iter()
                .map(|provider| {
                    view! {
                        <button
                            type="button"
                            class="btn-outline w-full"
                            disabled=move || pending.get().is_some()
                            on:click=move |_| start(provider)
                        >
                            <Icon name=provider_icon(provider) class="h-5 w-5 mr-2" />
                            {provider.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
