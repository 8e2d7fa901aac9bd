//! Cookie session backed by `document.cookie`

use backoffice_core::session::SessionStore;
use backoffice_core::{CookieJar, CookieOptions, SessionCookies, SessionTokens};
use chrono::Utc;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// [`CookieJar`] over the page's `document.cookie`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentCookieJar;

impl DocumentCookieJar {
    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }
}

impl CookieJar for DocumentCookieJar {
    fn read_all(&self) -> String {
        Self::document()
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }

    fn write(&self, cookie: &str) {
        let Some(document) = Self::document() else {
            tracing::warn!("No document available, cookie not written");
            return;
        };
        if let Err(error) = document.set_cookie(cookie) {
            tracing::warn!(?error, "Failed to write cookie");
        }
    }
}

/// Session store plus the page facts its cookie attributes depend on
#[derive(Clone, Debug)]
pub struct BrowserSession {
    store: SessionStore<DocumentCookieJar>,
    protocol: String,
}

impl PartialEq for BrowserSession {
    fn eq(&self, other: &Self) -> bool {
        self.protocol == other.protocol
    }
}

impl BrowserSession {
    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            store: SessionStore::new(DocumentCookieJar),
            protocol: protocol.into(),
        }
    }

    /// Attributes for a cookie written now
    pub fn options(&self) -> CookieOptions {
        CookieOptions::session(&self.protocol, Utc::now())
    }

    pub fn cookies(&self) -> SessionCookies {
        self.store.session()
    }

    pub fn auth_token(&self) -> Option<String> {
        self.store.auth_token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    pub fn sign_in(&self, tokens: &SessionTokens) {
        self.store.store_tokens(tokens, &self.options());
    }

    /// Drop both session cookies
    pub fn sign_out(&self) {
        self.store.clear(&self.options());
    }
}
