//! Appearance and profile settings

use crate::components::{ButtonSpinner, ErrorBanner, LoadingSpinner, SuccessBanner, TextField, ThemeToggle};
use crate::hooks::{Fetch, use_fetch, use_form};
use crate::services::use_services;
use crate::theme::use_theme;
use backoffice_core::form::SettingsForm;
use backoffice_core::{BrowserEngine, CrashReportingConfig};
use backoffice_http::types::Settings as SettingsPayload;
use yew::prelude::*;

fn form_values(settings: SettingsPayload) -> SettingsForm {
    SettingsForm {
        display_name: settings.display_name,
        email: settings.email,
    }
}

/// Label and value rows for the diagnostics section
fn diagnostics(
    engine: BrowserEngine,
    crash_reporting: Option<&CrashReportingConfig>,
) -> Vec<(&'static str, String)> {
    let notifications = if engine.notifications_supported() {
        "Available".to_string()
    } else {
        "Not available in Safari".to_string()
    };
    let reporting = match crash_reporting {
        Some(config) => match config.ingest_host() {
            Some(host) => format!("On ({}, {host})", config.environment),
            None => format!("On ({})", config.environment),
        },
        None => "Off".to_string(),
    };
    vec![
        ("Web notifications", notifications),
        ("Crash reporting", reporting),
    ]
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let services = use_services();
    let theme = use_theme().theme;
    let loaded = use_fetch((), |client, ()| async move { client.get_settings().await });
    let form = use_form(SettingsForm::default);
    let saved = use_state(|| false);
    let rows = diagnostics(services.browser(), services.crash_reporting());

    // Seed the form once the current settings arrive
    {
        let form = form.clone();
        let ready = match &*loaded {
            Fetch::Ready(settings) => Some(settings.clone()),
            _ => None,
        };
        use_effect_with(ready, move |ready| {
            if let Some(settings) = ready.clone() {
                form.reset(form_values(settings));
            }
            || ()
        });
    }

    let onsubmit = {
        let form = form.clone();
        let saved = saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            saved.set(false);
            let Ok(values) = form.begin_submit() else {
                return;
            };
            let client = match services.authenticated_client() {
                Ok(client) => client,
                Err(error) => {
                    form.finish(Err(error.user_message()));
                    return;
                }
            };

            let form = form.clone();
            let saved = saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let payload = SettingsPayload {
                    display_name: values.display_name.trim().to_string(),
                    email: values.email.trim().to_string(),
                };
                match client.update_settings(&payload).await {
                    Ok(updated) => {
                        tracing::info!("Settings saved");
                        form.finish(Ok(()));
                        // A fresh controller keeps the form editable after saving
                        form.reset(form_values(updated));
                        saved.set(true);
                    }
                    Err(error) => {
                        tracing::warn!(%error, "Saving settings failed");
                        form.finish(Err(error.user_message()));
                    }
                }
            });
        })
    };

    let controller = form.controller();
    let submitting = controller.is_submitting();

    html! {
        <div class="max-w-2xl">
            <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100 mb-6">{"Settings"}</h2>

            <section class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 mb-6">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-gray-100 mb-1">{"Appearance"}</h3>
                <p class="text-sm text-gray-600 dark:text-gray-400 mb-4">
                    {format!("The dashboard is using the {} theme.", theme.label().to_lowercase())}
                </p>
                <ThemeToggle />
            </section>

            <section class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-gray-100 mb-4">{"Profile"}</h3>
                {match &*loaded {
                    Fetch::Loading => html! { <LoadingSpinner text={"Loading settings..."} /> },
                    Fetch::Failed(message) => html! { <ErrorBanner message={message.clone()} /> },
                    Fetch::Ready(_) => html! {
                        <form {onsubmit} novalidate={true}>
                            if *saved {
                                <SuccessBanner message="Settings saved" />
                            }
                            if let Some(failure) = controller.failure() {
                                <ErrorBanner message={failure.to_string()} />
                            }
                            <TextField
                                name="display_name"
                                label="Display Name"
                                value={form.values().display_name.clone()}
                                error={form.error("display_name")}
                                disabled={submitting}
                                oninput={form.input(|v, s| v.display_name = s)}
                                onblur={form.blur("display_name")}
                            />
                            <TextField
                                name="email"
                                label="Email"
                                input_type="email"
                                value={form.values().email.clone()}
                                error={form.error("email")}
                                disabled={submitting}
                                oninput={form.input(|v, s| v.email = s)}
                                onblur={form.blur("email")}
                            />
                            <button
                                type="submit"
                                disabled={!controller.can_submit()}
                                class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed rounded-lg transition-colors flex items-center gap-2"
                            >
                                if submitting {
                                    <ButtonSpinner />
                                }
                                {"Save Changes"}
                            </button>
                        </form>
                    },
                }}
            </section>

            <section class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 mt-6">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-gray-100 mb-4">{"Diagnostics"}</h3>
                <dl class="grid grid-cols-2 gap-2 text-sm">
                    {for rows.into_iter().map(|(label, value)| html! {
                        <>
                            <dt class="text-gray-600 dark:text-gray-400">{label}</dt>
                            <dd class="text-gray-900 dark:text-gray-100">{value}</dd>
                        </>
                    })}
                </dl>
            </section>
        </div>
    }
}
