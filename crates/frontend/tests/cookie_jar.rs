//! Browser tests for the `document.cookie` session backend
//!
//! Run with `wasm-pack test --headless --firefox crates/frontend`.
#![cfg(target_arch = "wasm32")]

use backoffice_core::CookieKeys;
use backoffice_core::session::SessionStore;
use backoffice_core::{CookieJar, CookieOptions, SessionTokens};
use backoffice_frontend::session::{BrowserSession, DocumentCookieJar};
use chrono::Utc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn session() -> BrowserSession {
    // Test pages are served over http, so cookies are written without `secure`.
    BrowserSession::new("http:")
}

#[wasm_bindgen_test]
fn test_sign_in_then_out() {
    let session = session();
    session.sign_in(&SessionTokens {
        auth_token: "token with spaces".into(),
        refresh_token: Some("refresh".into()),
    });

    assert!(session.is_authenticated());
    assert_eq!(session.auth_token().as_deref(), Some("token with spaces"));
    assert_eq!(session.cookies().refresh_token.as_deref(), Some("refresh"));

    session.sign_out();
    assert!(!session.is_authenticated());
    assert_eq!(session.cookies().refresh_token, None);
}

#[wasm_bindgen_test]
fn test_store_over_document_jar() {
    let store = SessionStore::new(DocumentCookieJar);
    let options = CookieOptions::session("http:", Utc::now());

    store.set(CookieKeys::API_TOKEN, "k=1;2", &options);
    assert_eq!(store.get(CookieKeys::API_TOKEN).as_deref(), Some("k=1;2"));
    assert!(DocumentCookieJar.read_all().contains(CookieKeys::API_TOKEN));

    store.remove(CookieKeys::API_TOKEN, &options);
    assert_eq!(store.get(CookieKeys::API_TOKEN), None);
}
