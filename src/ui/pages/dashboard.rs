//! Dashboard page component
//!
//! The protected home for signed-in users: a welcome card, activity
//! counters, quick actions and the recent activity feed.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routes::AppRoute;
use crate::core::session::SessionUser;
use crate::ui::auth::{UserMenu, use_auth_context};
use crate::ui::guard::SessionGuard;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::{Logo, ThemeToggle};

/// Counter card on the dashboard grid
struct Stat {
    title: &'static str,
    value: &'static str,
    caption: &'static str,
    icon: &'static str,
}

const STATS: [Stat; 3] = [
    Stat {
        title: "My Activities",
        value: "0",
        caption: "Total activities logged",
        icon: icons::ACTIVITY,
    },
    Stat {
        title: "Certificates",
        value: "0",
        caption: "Verified certificates",
        icon: icons::CERTIFICATE,
    },
    Stat {
        title: "Portfolio",
        value: "Ready",
        caption: "Portfolio status",
        icon: icons::PORTFOLIO,
    },
];

const QUICK_ACTIONS: [(&str, &str, &str); 4] = [
    ("Log Activity", "Add new co-curricular activity", icons::UPLOAD),
    ("View Reports", "Analytics and insights", icons::DOCUMENT_TEXT),
    ("Portfolio", "View your portfolio", icons::PORTFOLIO),
    ("Settings", "Account preferences", icons::QR_CODE),
];

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <SessionGuard route=AppRoute::Dashboard>
            <DashboardContent />
        </SessionGuard>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <div class="min-h-screen bg-theme-primary">
            // Header
            <header class="sticky top-0 z-40 bg-theme-primary/80 backdrop-blur-md border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <A href=AppRoute::Dashboard.path() attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <Logo class="h-10 w-auto" />
                            <span class="text-xl font-bold text-theme-primary">"CoCred Dashboard"</span>
                        </A>

                        <div class="flex items-center gap-4">
                            <ThemeToggle />
                            <UserMenu dashboard_link=false />
                        </div>
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                {move || auth.user().map(|user| view! { <WelcomeCard user=user /> })}

                // Counters
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="card">
                                    <div class="flex items-center justify-between mb-4">
                                        <h3 class="text-lg font-semibold text-theme-primary">{stat.title}</h3>
                                        <Icon name=stat.icon class="w-6 h-6" />
                                    </div>
                                    <p class="text-3xl font-bold text-accent">{stat.value}</p>
                                    <p class="text-sm text-theme-tertiary">{stat.caption}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Quick actions
                <section class="card">
                    <h3 class="text-lg font-semibold text-theme-primary mb-4">"Quick Actions"</h3>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                        {QUICK_ACTIONS
                            .into_iter()
                            .map(|(title, caption, icon)| {
                                view! {
                                    <button type="button" class="quick-action" title="Coming soon" disabled>
                                        <Icon name=icon class="w-6 h-6 mb-2" />
                                        <span class="font-medium text-theme-primary">{title}</span>
                                        <span class="text-sm text-theme-tertiary">{caption}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                // Recent activity
                <section class="card">
                    <h3 class="text-lg font-semibold text-theme-primary mb-4">"Recent Activity"</h3>
                    <div class="text-center py-12">
                        <div class="w-16 h-16 mx-auto mb-4 bg-theme-secondary rounded-full flex items-center justify-center">
                            <Icon name=icons::ACTIVITY class="w-8 h-8" />
                        </div>
                        <p class="text-theme-secondary">"No activities yet"</p>
                        <p class="text-sm text-theme-tertiary mt-1">
                            "Start by logging your first co-curricular activity!"
                        </p>
                    </div>
                </section>
            </main>
        </div>
    }
}

#[component]
fn WelcomeCard(user: SessionUser) -> impl IntoView {
    let initial = user.initial();
    let greeting = user.greeting();
    let email = user.email.clone().unwrap_or_default();
    let details = [
        user.role.map(|role| role.label().to_string()),
        user.member_since().map(|date| format!("Member since {date}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    view! {
        <section class="card flex items-center gap-6">
            <div class="avatar-lg">{initial}</div>
            <div>
                <h2 class="text-2xl font-bold text-theme-primary mb-1">{greeting}</h2>
                <p class="text-theme-secondary">{email}</p>
                <p class="text-sm text-theme-tertiary mt-1">{details}</p>
            </div>
        </section>
    }
}
