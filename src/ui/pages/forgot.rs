use leptos::prelude::*;

use crate::ui::auth::{AuthLayout, ForgotForm};

/// Password reset request page
#[component]
pub fn ForgotPage() -> impl IntoView {
    view! {
        <AuthLayout
            title="Forgotten password?"
            subtitle="Enter your email and we'll send you a link to reset it"
        >
            <ForgotForm />
        </AuthLayout>
    }
}
