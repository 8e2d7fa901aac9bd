//! Shown instead of the app when startup failed

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

#[function_component(ConfigErrorScreen)]
pub fn config_error_screen(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center p-6">
            <div class="max-w-md w-full bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                <h1 class="text-lg font-semibold text-gray-900 dark:text-gray-100 mb-2">
                    {"The dashboard could not start"}
                </h1>
                <p class="text-sm text-gray-600 dark:text-gray-400 font-mono break-words">{&props.message}</p>
            </div>
        </div>
    }
}
