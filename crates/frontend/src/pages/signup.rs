//! Account creation form

use super::login::{complete_sign_in, sign_in_error};
use crate::components::{ButtonSpinner, ErrorBanner, TextField};
use crate::hooks::use_form;
use crate::router::Route;
use crate::services::use_services;
use crate::store::use_store;
use backoffice_core::form::SignupForm;
use backoffice_http::types::SignupRequest;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Signup)]
pub fn signup() -> Html {
    let services = use_services();
    let store = use_store();
    let navigator = use_navigator();
    let form = use_form(SignupForm::default);

    let onsubmit = {
        let form = form.clone();
        let services = services.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Ok(values) = form.begin_submit() else {
                return;
            };

            let form = form.clone();
            let services = services.clone();
            let store = store.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let request = SignupRequest {
                    name: values.name.trim().to_string(),
                    email: values.email.trim().to_string(),
                    password: values.password,
                };
                match services.public_client().signup(&request).await {
                    Ok(response) => {
                        form.finish(Ok(()));
                        complete_sign_in(response, &services, &store, navigator.as_ref());
                    }
                    Err(error) => {
                        tracing::warn!(%error, "Signup failed");
                        form.finish(Err(sign_in_error(&error)));
                    }
                }
            });
        })
    };

    let controller = form.controller();
    let submitting = controller.is_submitting();
    let values = form.values();

    html! {
        <>
            <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100 mb-6">{"Create Account"}</h2>

            if let Some(failure) = controller.failure() {
                <ErrorBanner message={failure.to_string()} />
            }

            <form {onsubmit} novalidate={true}>
                <TextField
                    name="name"
                    label="Name"
                    autocomplete="name"
                    value={values.name.clone()}
                    error={form.error("name")}
                    disabled={submitting}
                    oninput={form.input(|v, s| v.name = s)}
                    onblur={form.blur("name")}
                />
                <TextField
                    name="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value={values.email.clone()}
                    error={form.error("email")}
                    disabled={submitting}
                    oninput={form.input(|v, s| v.email = s)}
                    onblur={form.blur("email")}
                />
                <TextField
                    name="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    value={values.password.clone()}
                    error={form.error("password")}
                    disabled={submitting}
                    oninput={form.input(|v, s| v.password = s)}
                    onblur={form.blur("password")}
                />
                <TextField
                    name="confirm_password"
                    label="Confirm Password"
                    input_type="password"
                    autocomplete="new-password"
                    value={values.confirm_password.clone()}
                    error={form.error("confirm_password")}
                    disabled={submitting}
                    oninput={form.input(|v, s| v.confirm_password = s)}
                    onblur={form.blur("confirm_password")}
                />
                <button
                    type="submit"
                    disabled={!controller.can_submit()}
                    class="w-full px-4 py-2 mt-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed rounded-lg transition-colors flex items-center justify-center gap-2"
                >
                    if submitting {
                        <ButtonSpinner />
                    }
                    {"Create Account"}
                </button>
            </form>

            <p class="mt-6 text-center text-sm text-gray-600 dark:text-gray-400">
                {"Already registered? "}
                <Link<Route> to={Route::Login} classes="text-blue-600 dark:text-blue-400 hover:underline">
                    {"Sign in"}
                </Link<Route>>
            </p>
        </>
    }
}
