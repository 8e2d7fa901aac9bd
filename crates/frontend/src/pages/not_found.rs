use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex flex-col items-center justify-center gap-4">
            <p class="text-6xl font-bold text-gray-300 dark:text-gray-700">{"404"}</p>
            <p class="text-gray-600 dark:text-gray-400">{"This page does not exist."}</p>
            <Link<Route> to={Route::home()} classes="text-blue-600 dark:text-blue-400 hover:underline">
                {"Go to the dashboard"}
            </Link<Route>>
        </div>
    }
}
