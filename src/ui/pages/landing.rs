//! Landing page component
//!
//! The public home page: navigation, hero copy and the feature tags.
//! Signed-in users are sent on to the dashboard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routes::AppRoute;
use crate::ui::auth::UserMenu;
use crate::ui::guard::SessionGuard;
use crate::ui::theme::{Logo, ThemeToggle};

const FEATURE_TAGS: [&str; 3] = ["QR-Verification", "Digital Certification", "Smart Portfolio"];

/// Top navigation shared by the public pages
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="border-b border-theme">
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <A href=AppRoute::Landing.path() attr:class="flex items-center gap-2">
                    <Logo class="h-9 w-auto" />
                    <span class="text-lg font-bold text-theme-primary">"CoCred"</span>
                </A>
                <div class="flex items-center gap-4">
                    <A href=AppRoute::Landing.path() attr:class="nav-link">"Home"</A>
                    <A href=AppRoute::About.path() attr:class="nav-link">"About"</A>
                    <UserMenu />
                    <ThemeToggle />
                </div>
            </nav>
        </header>
    }
}

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SessionGuard route=AppRoute::Landing>
            <div class="min-h-screen bg-theme-primary flex flex-col">
                <SiteHeader />

                <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-16 flex flex-col md:flex-row items-center gap-12">
                    <section class="flex-1 flex flex-col gap-6">
                        <h1 class="text-4xl md:text-6xl font-bold leading-tight text-theme-primary">
                            "Showcase Your Achievements. Certify Your Journey."
                        </h1>
                        <p class="text-lg md:text-xl text-accent font-medium max-w-xl">
                            "A smart, centralised platform for students to log, track, and share "
                            "co-curricular work. QR-verified, portfolio-ready, and built for the future."
                        </p>
                        <div class="flex gap-4 mt-4">
                            <A href=AppRoute::Signup.path() attr:class="btn-primary rounded-full px-6 py-3">
                                "Get Started"
                            </A>
                            <A href=AppRoute::About.path() attr:class="btn-outline rounded-full px-6 py-3">
                                "Learn More"
                            </A>
                        </div>
                    </section>

                    <section class="flex-1 flex flex-col items-center gap-4">
                        {FEATURE_TAGS
                            .into_iter()
                            .map(|tag| view! { <span class="feature-tag">{tag}</span> })
                            .collect_view()}
                    </section>
                </main>

                <footer class="py-6 text-center text-sm text-theme-tertiary">
                    "© 2025 CoCred"
                </footer>
            </div>
        </SessionGuard>
    }
}
