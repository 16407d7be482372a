//! Thin wrappers over the browser APIs the app touches
//!
//! Every function degrades to a no-op (or `None`) when the API is missing,
//! and on the server build, where there is no browser at all.

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read a localStorage entry
#[cfg(not(feature = "ssr"))]
pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a localStorage entry, ignoring quota and privacy-mode failures
#[cfg(not(feature = "ssr"))]
pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Current value of a media query, `None` if it cannot be evaluated
#[cfg(not(feature = "ssr"))]
pub fn media_matches(query: &str) -> Option<bool> {
    let list = web_sys::window()?.match_media(query).ok()??;
    Some(list.matches())
}

/// Add or remove a class on `<html>`
#[cfg(not(feature = "ssr"))]
pub fn set_root_class(class: &str, enabled: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let class_list = root.class_list();
    if enabled {
        let _ = class_list.add_1(class);
    } else {
        let _ = class_list.remove_1(class);
    }
}

/// Content of `<meta name="...">` in the document head
#[cfg(not(feature = "ssr"))]
pub fn meta_content(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    let content = meta.content();
    (!content.is_empty()).then_some(content)
}

/// `window.location.origin`
#[cfg(not(feature = "ssr"))]
pub fn location_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// `window.location.pathname`
#[cfg(not(feature = "ssr"))]
pub fn location_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// URL fragment without the leading `#`, if non-empty
#[cfg(not(feature = "ssr"))]
pub fn location_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let hash = hash.trim_start_matches('#');
    (!hash.is_empty()).then(|| hash.to_string())
}

/// Drop the fragment from the address bar without reloading
#[cfg(not(feature = "ssr"))]
pub fn clear_location_hash() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = format!(
        "{}{}",
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default()
    );
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
    }
}

/// Full page navigation to an absolute URL
#[cfg(not(feature = "ssr"))]
pub fn assign_location(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    window
        .location()
        .assign(url)
        .map_err(|e| format!("{:?}", e))
}

// Server build: there is no browser.

#[cfg(feature = "ssr")]
pub fn storage_get(_key: &str) -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn storage_set(_key: &str, _value: &str) {}

#[cfg(feature = "ssr")]
pub fn storage_remove(_key: &str) {}

#[cfg(feature = "ssr")]
pub fn media_matches(_query: &str) -> Option<bool> {
    None
}

#[cfg(feature = "ssr")]
pub fn set_root_class(_class: &str, _enabled: bool) {}

#[cfg(feature = "ssr")]
pub fn meta_content(_name: &str) -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn location_origin() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn location_path() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn location_hash() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn clear_location_hash() {}

#[cfg(feature = "ssr")]
pub fn assign_location(_url: &str) -> Result<(), String> {
    Err("Navigation not available on server".to_string())
}
