//! Small wrappers over the browser globals the dashboard touches

use backoffice_core::BrowserEngine;
use wasm_bindgen::JsValue;

/// Probe `window.safari`, which only Safari defines
pub fn detect_engine() -> BrowserEngine {
    let has_safari_global = web_sys::window()
        .is_some_and(|window| js_sys::Reflect::has(&window, &JsValue::from_str("safari")).unwrap_or(false));
    let engine = BrowserEngine::from_safari_probe(has_safari_global);
    tracing::info!(
        ?engine,
        notifications = engine.notifications_supported(),
        "Detected browser engine"
    );
    engine
}

/// `location.protocol` of the page, e.g. `"https:"`
pub fn protocol() -> String {
    web_sys::window()
        .and_then(|window| window.location().protocol().ok())
        .unwrap_or_default()
}

/// `location.origin` of the page, used when no API URL was configured
pub fn origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}
