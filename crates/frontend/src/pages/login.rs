//! Sign-in form

use crate::components::{ButtonSpinner, ErrorBanner, TextField};
use crate::hooks::use_form;
use crate::router::Route;
use crate::services::use_services;
use crate::store::{SessionAction, use_store};
use backoffice_core::SessionTokens;
use backoffice_core::form::LoginForm;
use backoffice_http::ClientError;
use backoffice_http::types::{AuthResponse, LoginRequest};
use yew::prelude::*;
use yew_router::prelude::*;

/// Store the tokens of a login or signup and enter the dashboard
pub(crate) fn complete_sign_in(
    response: AuthResponse,
    services: &crate::AppServices,
    store: &UseReducerHandle<crate::store::Store>,
    navigator: Option<&Navigator>,
) {
    services.session().sign_in(&SessionTokens {
        auth_token: response.token,
        refresh_token: response.refresh_token,
    });
    tracing::info!(user = %response.user.id, "Signed in");
    store.dispatch(SessionAction::SignedIn(Some(response.user)));
    if let Some(navigator) = navigator {
        navigator.push(&Route::home());
    }
}

/// Wrong credentials come back as 401, which is not an expired session here
pub(crate) fn sign_in_error(error: &ClientError) -> String {
    if error.is_auth_expired() {
        "Invalid email or password.".to_string()
    } else {
        error.user_message()
    }
}

#[function_component(Login)]
pub fn login() -> Html {
    let services = use_services();
    let store = use_store();
    let navigator = use_navigator();
    let form = use_form(LoginForm::default);

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
                let request = LoginRequest {
                    email: values.email.trim().to_string(),
                    password: values.password,
                };
                match services.public_client().login(&request).await {
                    Ok(response) => {
                        form.finish(Ok(()));
                        complete_sign_in(response, &services, &store, navigator.as_ref());
                    }
                    Err(error) => {
                        tracing::warn!(%error, "Login failed");
                        form.finish(Err(sign_in_error(&error)));
                    }
                }
            });
        })
    };

    let controller = form.controller();
    let submitting = controller.is_submitting();

    html! {
        <>
            <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100 mb-6">{"Sign In"}</h2>

            if let Some(failure) = controller.failure() {
                <ErrorBanner message={failure.to_string()} />
            }

            <form {onsubmit} novalidate={true}>
                <TextField
                    name="email"
                    label="Email"
                    input_type="email"
                    autocomplete="username"
                    value={form.values().email.clone()}
                    error={form.error("email")}
                    disabled={submitting}
                    oninput={form.input(|v, s| v.email = s)}
                    onblur={form.blur("email")}
                />
                <TextField
                    name="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value={form.values().password.clone()}
                    error={form.error("password")}
                    disabled={submitting}
                    oninput={form.input(|v, s| v.password = s)}
                    onblur={form.blur("password")}
                />
                <div class="flex justify-end mb-4 text-sm">
                    <Link<Route> to={Route::ForgotPassword} classes="text-blue-600 dark:text-blue-400 hover:underline">
                        {"Forgot password?"}
                    </Link<Route>>
                </div>
                <button
                    type="submit"
                    disabled={!controller.can_submit()}
                    class="w-full px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed rounded-lg transition-colors flex items-center justify-center gap-2"
                >
                    if submitting {
                        <ButtonSpinner />
                    }
                    {"Sign In"}
                </button>
            </form>

            <p class="mt-6 text-center text-sm text-gray-600 dark:text-gray-400">
                {"No account yet? "}
                <Link<Route> to={Route::Signup} classes="text-blue-600 dark:text-blue-400 hover:underline">
                    {"Create one"}
                </Link<Route>>
            </p>
        </>
    }
}
