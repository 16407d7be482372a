use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Optional label text
    #[prop(default = String::new())]
    label: String,
) -> impl IntoView {
    let classes = if class.is_empty() {
        format!("spinner {}", size.class())
    } else {
        format!("spinner {} {}", size.class(), class)
    };

    view! {
        <div class="spinner-container">
            <div class=classes role="status" aria-live="polite">
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <div class="spinner-label">{label.clone()}</div>
            })}
        </div>
    }
}

/// Inline spinner for buttons or text
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <Spinner size=SpinnerSize::Small class=format!("spinner-inline {}", class) />
    }
}

/// Full-page loading state, shown while the session is still unknown
#[component]
pub fn LoadingScreen(
    /// Loading message
    #[prop(default = "Loading...".to_string(), into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex items-center justify-center">
            <Spinner size=SpinnerSize::Large label=message />
        </div>
    }
}
