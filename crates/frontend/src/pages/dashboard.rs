use crate::components::{ErrorBanner, LoadingSpinner};
use crate::hooks::{Fetch, use_fetch};
use crate::store::use_store;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: AttrValue,
    value: u64,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <p class="text-sm text-gray-500 dark:text-gray-400">{props.label.clone()}</p>
            <p class="mt-2 text-3xl font-semibold text-gray-900 dark:text-gray-100">{props.value}</p>
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let store = use_store();
    let summary = use_fetch((), |client, ()| async move { client.dashboard_summary().await });

    let greeting = store
        .profile
        .as_ref()
        .map_or_else(|| "Welcome back".to_string(), |p| format!("Welcome back, {}", p.name));

    html! {
        <div>
            <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100 mb-6">{greeting}</h2>
            {match &*summary {
                Fetch::Loading => html! { <LoadingSpinner text={"Loading summary..."} /> },
                Fetch::Failed(message) => html! { <ErrorBanner message={message.clone()} /> },
                Fetch::Ready(summary) => html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6">
                        <StatCard label="Total Users" value={summary.total_users} />
                        <StatCard label="Active Users" value={summary.active_users} />
                        <StatCard label="Sub Admins" value={summary.sub_admins} />
                        <StatCard label="Pending Invites" value={summary.pending_invites} />
                    </div>
                },
            }}
        </div>
    }
}
