//! Password reset request

use crate::components::{ButtonSpinner, ErrorBanner, SuccessBanner, TextField};
use crate::hooks::use_form;
use crate::router::Route;
use crate::services::use_services;
use backoffice_core::Submission;
use backoffice_core::form::ForgotPasswordForm;
use backoffice_http::types::ForgotPasswordRequest;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ForgotPassword)]
pub fn forgot_password() -> Html {
    let services = use_services();
    let form = use_form(ForgotPasswordForm::default);
    let confirmation = use_state(|| None::<String>);

    let onsubmit = {
        let form = form.clone();
        let confirmation = confirmation.clone();
        let client = services.public_client().clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Ok(values) = form.begin_submit() else {
                return;
            };

            let form = form.clone();
            let confirmation = confirmation.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let request = ForgotPasswordRequest {
                    email: values.email.trim().to_string(),
                };
                match client.forgot_password(&request).await {
                    Ok(response) => {
                        tracing::info!("Password reset requested");
                        confirmation.set(Some(response.message));
                        form.finish(Ok(()));
                    }
                    Err(error) => {
                        tracing::warn!(%error, "Password reset request failed");
                        form.finish(Err(error.user_message()));
                    }
                }
            });
        })
    };

    let controller = form.controller();
    let submitting = controller.is_submitting();

    html! {
        <>
            <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100 mb-1">{"Reset Your Password"}</h2>
            <p class="text-sm text-gray-600 dark:text-gray-400 mb-6">
                {"Enter the email linked to your account and we'll send you a reset link."}
            </p>

            if *controller.submission() == Submission::Succeeded {
                <SuccessBanner message={
                    (*confirmation).clone().filter(|m| !m.trim().is_empty()).unwrap_or_else(|| {
                        format!("If an account exists for {}, a reset link is on its way.", form.values().email.trim())
                    })
                } />
            }
            if let Some(failure) = controller.failure() {
                <ErrorBanner message={failure.to_string()} />
            }

            <form {onsubmit} novalidate={true}>
                <TextField
                    name="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    value={form.values().email.clone()}
                    error={form.error("email")}
                    disabled={submitting}
                    oninput={form.input(|v, s| v.email = s)}
                    onblur={form.blur("email")}
                />
                <button
                    type="submit"
                    disabled={!controller.can_submit()}
                    class="w-full px-4 py-2 mt-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed rounded-lg transition-colors flex items-center justify-center gap-2"
                >
                    if submitting {
                        <ButtonSpinner />
                    }
                    {"Send Email"}
                </button>
            </form>

            <div class="mt-6 text-center text-sm">
                <Link<Route> to={Route::Login} classes="text-blue-600 dark:text-blue-400 hover:underline">
                    {"Back To Login"}
                </Link<Route>>
            </div>
        </>
    }
}
