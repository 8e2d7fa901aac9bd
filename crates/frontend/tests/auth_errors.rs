//! Browser tests for sign-out on a rejected session token
//!
//! Run with `wasm-pack test --headless --firefox crates/frontend`.
#![cfg(target_arch = "wasm32")]

use backoffice_frontend::api::{clear_auth_error_callback, guarded, set_auth_error_callback};
use backoffice_http::ClientError;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn counting_callback() -> Rc<Cell<u32>> {
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    set_auth_error_callback(Rc::new(move || counter.set(counter.get() + 1)));
    hits
}

#[wasm_bindgen_test]
async fn test_rejected_token_runs_callback() {
    let hits = counting_callback();

    let result = guarded(async {
        Err::<(), _>(ClientError::AuthenticationFailed("expired".to_string()))
    })
    .await;

    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
    assert_eq!(hits.get(), 1);
    clear_auth_error_callback();
}

#[wasm_bindgen_test]
async fn test_other_failures_keep_session() {
    let hits = counting_callback();

    let rejected = guarded(async {
        Err::<(), _>(ClientError::Rejected {
            status: 404,
            message: "No such user".to_string(),
        })
    })
    .await;
    let ok = guarded(async { Ok::<_, ClientError>(7) }).await;

    assert!(matches!(rejected, Err(ClientError::Rejected { status: 404, .. })));
    assert_eq!(ok.ok(), Some(7));
    assert_eq!(hits.get(), 0);
    clear_auth_error_callback();
}
