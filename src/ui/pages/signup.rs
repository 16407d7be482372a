use leptos::prelude::*;

use crate::ui::auth::{AuthLayout, RegisterForm};

/// Sign-up page component
#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <AuthLayout title="Create your account" subtitle="Start building your verified portfolio">
            <RegisterForm />
        </AuthLayout>
    }
}
