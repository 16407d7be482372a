//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routes::AppRoute;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-theme-secondary rounded-full flex items-center justify-center">
                    <Icon name=icons::DOCUMENT_TEXT class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-theme-primary mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-theme-primary mb-2">"Page Not Found"</h2>
                <p class="text-theme-secondary mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href=AppRoute::Landing.path() attr:class="btn-primary px-6 py-3">"Go Home"</A>
                    <A href=AppRoute::Dashboard.path() attr:class="btn-outline px-6 py-3">"My Dashboard"</A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-theme-tertiary">"© 2025 CoCred"</p>
            </div>
        </div>
    }
}
