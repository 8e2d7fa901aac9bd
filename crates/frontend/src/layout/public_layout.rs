//! Centered card layout of the auth pages

use crate::components::{ErrorBanner, ThemeToggle};
use crate::services::use_services;
use crate::store::{SessionAction, use_store};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PublicLayoutProps {
    pub children: Children,
}

#[function_component(PublicLayout)]
pub fn public_layout(props: &PublicLayoutProps) -> Html {
    let services = use_services();
    let store = use_store();

    let dismiss = {
        let store = store.clone();
        Callback::from(move |()| store.dispatch(SessionAction::DismissNotice))
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex flex-col items-center justify-center p-6">
            <div class="absolute top-4 right-4">
                <ThemeToggle />
            </div>
            <h1 class="text-2xl font-bold mb-6 bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                {services.app_name()}
            </h1>
            <div class="w-full max-w-md bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8">
                if let Some(notice) = &store.notice {
                    <ErrorBanner message={notice.clone()} on_dismiss={dismiss} />
                }
                { props.children.clone() }
            </div>
        </div>
    }
}
