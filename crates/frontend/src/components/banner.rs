//! Inline error and success banners

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &BannerProps) -> Html {
    html! {
        <div role="alert" class="mb-4 p-3 flex items-start justify-between gap-3 rounded-lg bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 text-sm text-red-700 dark:text-red-300">
            <span>{props.message.clone()}</span>
            if let Some(on_dismiss) = &props.on_dismiss {
                <button
                    class="text-red-500 hover:text-red-700 dark:hover:text-red-200"
                    onclick={on_dismiss.reform(|_| ())}
                >
                    {"×"}
                </button>
            }
        </div>
    }
}

#[function_component(SuccessBanner)]
pub fn success_banner(props: &BannerProps) -> Html {
    html! {
        <div role="status" class="mb-4 p-3 rounded-lg bg-green-50 dark:bg-green-900/20 border border-green-200 dark:border-green-800 text-sm text-green-700 dark:text-green-300">
            {props.message.clone()}
        </div>
    }
}
