//! Load data from an authenticated endpoint when a component mounts or its
//! dependencies change

use crate::api::GuardedClient;
use crate::services::use_services;
use backoffice_http::ClientError;
use std::future::Future;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Ready(T),
    Failed(String),
}

#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch: F) -> UseStateHandle<Fetch<T>>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(GuardedClient, D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let services = use_services();
    let state = use_state(|| Fetch::Loading);
    // Responses to superseded requests are dropped
    let generation = use_mut_ref(|| 0_u64);

    {
        let state = state.clone();
        use_effect_with(deps, move |deps| {
            let current = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            state.set(Fetch::Loading);

            match services.authenticated_client() {
                Ok(client) => {
                    let request = fetch(client, deps.clone());
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = request.await;
                        if *generation.borrow() != current {
                            return;
                        }
                        match result {
                            Ok(value) => state.set(Fetch::Ready(value)),
                            Err(error) => {
                                tracing::warn!(%error, "Request failed");
                                state.set(Fetch::Failed(error.user_message()));
                            }
                        }
                    });
                }
                Err(error) => state.set(Fetch::Failed(error.user_message())),
            }
            || ()
        });
    }

    state
}
