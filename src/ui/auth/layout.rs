//! Card layout shared by the login, sign-up and reset pages

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::theme::{Logo, ThemeToggle};

#[component]
pub fn AuthLayout(
    /// Card heading
    title: &'static str,
    /// Line under the heading
    #[prop(default = "")]
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center px-4 py-12">
            <ThemeToggle class="theme-toggle fixed top-4 right-4" />

            <A href="/" attr:class="mb-8" attr:title="Home">
                <Logo class="h-14 w-auto" />
            </A>

            <div class="w-full max-w-md bg-theme-surface rounded-xl shadow-lg p-6 sm:p-8 border border-theme">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-theme-primary">{title}</h1>
                    {(!subtitle.is_empty()).then(|| view! {
                        <p class="mt-2 text-sm text-theme-secondary">{subtitle}</p>
                    })}
                </div>
                {children()}
            </div>
        </div>
    }
}
