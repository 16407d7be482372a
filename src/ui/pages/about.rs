use leptos::prelude::*;

use super::landing::SiteHeader;

const SOLUTION_POINTS: [&str; 7] = [
    "A clean web + mobile app where students log activities in seconds.",
    "Faculty approve with one tap for quick validation.",
    "The system generates a signed PDF with a QR code for easy and fast verification.",
    "The student's portfolio is automatically updated with every approved activity.",
    "Supports offline submissions for areas with weak or no internet connectivity.",
    "Ensures fraud prevention through QR-based verification.",
    "Can link profiles to unique IDs for consistent and reliable identity management.",
];

const INNOVATION_POINTS: [&str; 5] = [
    "Offline-first submission for patchy connectivity",
    "QR-based verification to prevent fraud",
    "Modular design that can link profiles to APAAR ID for consistent identity",
    "Optional DigiLocker publishing",
    "Tailored for J&K now, ready to scale nationwide later",
];

#[component]
fn BulletList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="list-disc pl-6 space-y-2 text-theme-secondary">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

/// About page, open to everyone
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader />

            <main class="max-w-4xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-12 space-y-10">
                <h1 class="text-4xl font-bold text-theme-primary">"About CoCred"</h1>

                <section class="card space-y-2">
                    <h2 class="text-sm font-semibold uppercase tracking-wide text-theme-tertiary">
                        "Problem Statement Title"
                    </h2>
                    <p class="text-lg text-theme-primary">
                        "Centralised Digital Platform for Comprehensive student activity record in HEIs"
                    </p>
                    <h2 class="pt-2 text-sm font-semibold uppercase tracking-wide text-theme-tertiary">
                        "Theme"
                    </h2>
                    <p class="text-lg text-theme-primary">"Smart Education"</p>
                </section>

                <section class="space-y-4">
                    <h2 class="text-2xl font-semibold text-theme-primary">"Proposed Solution"</h2>
                    <p class="text-theme-secondary">
                        "An all-in-one platform to log, track, and certify student's co-curricular "
                        "work with QR-verifiable proofs and a clean, shareable portfolio."
                    </p>
                    <BulletList items=&SOLUTION_POINTS />
                </section>

                <section class="space-y-4">
                    <h2 class="text-2xl font-semibold text-theme-primary">
                        "How It Addresses the Problem"
                    </h2>
                    <p class="text-theme-secondary">
                        "It replaces scattered emails, paper files, and spreadsheets with one easy "
                        "system to log and approve co-curricular activities. This makes sharing and "
                        "verifying achievements quick and hassle-free for jobs and scholarships."
                    </p>
                </section>

                <section class="space-y-4">
                    <h2 class="text-2xl font-semibold text-theme-primary">"Innovation and Uniqueness"</h2>
                    <BulletList items=&INNOVATION_POINTS />
                </section>
            </main>
        </div>
    }
}
