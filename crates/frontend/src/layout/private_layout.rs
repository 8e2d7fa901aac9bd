//! Drawer layout of the signed-in area

use crate::browser;
use crate::components::Icon;
use crate::router::Route;
use crate::services::use_services;
use crate::store::{SessionAction, use_store};
use backoffice_core::{MatchStrategy, MenuEntry, MenuIcon, dashboard_menu};
use yew::prelude::*;
use yew_router::prelude::*;

pub const DRAWER_WIDTH_PX: u32 = 270;

#[derive(Properties, PartialEq)]
pub struct PrivateLayoutProps {
    pub children: Children,
}

#[function_component(PrivateLayout)]
pub fn private_layout(props: &PrivateLayoutProps) -> Html {
    let services = use_services();
    let store = use_store();
    let navigator = use_navigator();
    let location = use_location();
    let menu = use_memo((), |_| dashboard_menu());

    use_effect_with((), |_| {
        browser::scroll_to_top();
        || ()
    });

    let current_path = location
        .as_ref()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    let navigate = Callback::from(move |route: String| {
        let Some(navigator) = &navigator else {
            return;
        };
        match Route::recognize(&route) {
            Some(target) => navigator.push(&target),
            None => tracing::warn!(%route, "Menu route is not routable"),
        }
    });

    let logout = {
        let session = services.session().clone();
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            tracing::info!("Signing out");
            session.sign_out();
            store.dispatch(SessionAction::SignedOut { notice: None });
        })
    };

    html! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-900">
            <aside
                class="fixed inset-y-0 left-0 flex flex-col bg-white dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700"
                style={format!("width: {DRAWER_WIDTH_PX}px")}
            >
                <div class="px-6 py-5">
                    <h1 class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {services.app_name()}
                    </h1>
                    if let Some(profile) = &store.profile {
                        <p class="text-sm text-gray-500 dark:text-gray-400 truncate">{&profile.email}</p>
                    }
                </div>
                <hr class="border-gray-200 dark:border-gray-700" />
                <nav class="flex-1 py-3 space-y-1">
                    { for menu.iter().map(|entry| html! {
                        <MenuButton
                            key={entry.alias.clone()}
                            entry={entry.clone()}
                            active={entry.is_active(&current_path, MatchStrategy::Segments)}
                            onclick={navigate.clone()}
                        />
                    }) }
                </nav>
                <div class="p-3 border-t border-gray-200 dark:border-gray-700">
                    <button
                        onclick={logout}
                        class="w-full px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 rounded-lg transition-colors flex items-center gap-3"
                    >
                        <Icon icon={MenuIcon::Logout} />
                        {"Logout"}
                    </button>
                </div>
            </aside>
            <main class="flex-1 min-w-0 p-8" style={format!("margin-left: {DRAWER_WIDTH_PX}px")}>
                { props.children.clone() }
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MenuButtonProps {
    entry: MenuEntry,
    active: bool,
    onclick: Callback<String>,
}

#[function_component(MenuButton)]
fn menu_button(props: &MenuButtonProps) -> Html {
    let route = props.entry.route.clone();
    let onclick = props.onclick.reform(move |_: MouseEvent| route.clone());

    let state = if props.active {
        "text-blue-600 dark:text-blue-400 bg-blue-50 dark:bg-gray-700 border-r-2 border-blue-600 dark:border-blue-400"
    } else {
        "text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100 hover:bg-gray-50 dark:hover:bg-gray-700"
    };

    html! {
        <button
            {onclick}
            aria-current={props.active.then_some("page")}
            class={classes!("w-full", "px-6", "py-3", "text-sm", "font-medium", "transition-colors", "flex", "items-center", "gap-3", state)}
        >
            <Icon icon={props.entry.icon} />
            {&props.entry.title}
        </button>
    }
}
