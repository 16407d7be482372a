//! Login page component

use leptos::prelude::*;

use crate::ui::auth::{AuthLayout, LoginForm};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AuthLayout title="Welcome Back" subtitle="Log in to continue to CoCred">
            <LoginForm />
        </AuthLayout>
    }
}
