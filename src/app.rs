use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::auth::AuthSettings;
use crate::ui::pages::{
    AboutPage, AuthCallbackPage, DashboardPage, ForgotPage, LandingPage, LoginPage, NotFoundPage,
    SignupPage,
};
use crate::ui::theme::THEME_BOOTSTRAP_SCRIPT;
use crate::ui::{provide_auth_context, provide_theme_context};

/// Document shell rendered by the server
///
/// Auth settings come from the server context and are handed to the
/// browser as `<meta>` tags.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = use_context::<AuthSettings>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name={AuthSettings::META_URL} content=settings.url/>
                <meta name={AuthSettings::META_KEY} content=settings.anon_key/>
                {settings.site_url.map(|site| view! {
                    <meta name={AuthSettings::META_SITE} content=site/>
                })}
                // Sets the theme class before first paint
                <script inner_html=THEME_BOOTSTRAP_SCRIPT></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // One theme and one session for the whole app
    provide_theme_context();
    provide_auth_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/cocred.css"/>

        <Title text="CoCred - Co-curricular Credentials"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/about") view=AboutPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/forgot") view=ForgotPage/>
                <Route path=path!("/dashboard") view=DashboardPage/>
                <Route path=path!("/auth/callback") view=AuthCallbackPage/>
            </Routes>
        </Router>
    }
}
