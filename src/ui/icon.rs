use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name, without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped under `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const GOOGLE: &str = "google";
    pub const GITHUB: &str = "github";
    pub const ACTIVITY: &str = "activity";
    pub const CERTIFICATE: &str = "certificate";
    pub const PORTFOLIO: &str = "portfolio";
    pub const UPLOAD: &str = "upload";
    pub const QR_CODE: &str = "qr-code";
    pub const DOCUMENT_TEXT: &str = "document-text";
}
