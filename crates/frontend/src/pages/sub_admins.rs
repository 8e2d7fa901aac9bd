use crate::components::{ErrorBanner, LoadingSpinner};
use crate::hooks::{Fetch, use_fetch};
use yew::prelude::*;

const TH: &str =
    "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

#[function_component(SubAdmins)]
pub fn sub_admins() -> Html {
    let admins = use_fetch((), |client, ()| async move { client.list_sub_admins().await });

    let body = match &*admins {
        Fetch::Loading => html! { <LoadingSpinner text={"Loading sub admins..."} /> },
        Fetch::Failed(message) => html! { <ErrorBanner message={message.clone()} /> },
        Fetch::Ready(list) if list.sub_admins.is_empty() => html! {
            <p class="text-sm text-gray-500 dark:text-gray-400">{"No sub admins yet"}</p>
        },
        Fetch::Ready(list) => html! {
            <div class="bg-white dark:bg-gray-800 shadow overflow-hidden rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900">
                        <tr>
                            <th scope="col" class={TH}>{"Name"}</th>
                            <th scope="col" class={TH}>{"Email"}</th>
                            <th scope="col" class={TH}>{"Permissions"}</th>
                            <th scope="col" class={TH}>{"Added"}</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white dark:bg-gray-800 divide-y divide-gray-200 dark:divide-gray-700">
                        { for list.sub_admins.iter().map(|admin| html! {
                            <tr key={admin.id.clone()}>
                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-gray-100">{&admin.name}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">{&admin.email}</td>
                                <td class="px-6 py-4 text-sm">
                                    <div class="flex flex-wrap gap-1">
                                        { for admin.permissions.iter().map(|permission| html! {
                                            <span class="px-2 py-0.5 text-xs rounded bg-blue-100 text-blue-800 dark:bg-blue-900/30 dark:text-blue-300">
                                                {permission}
                                            </span>
                                        }) }
                                    </div>
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                    {admin.created_at.format("%Y-%m-%d").to_string()}
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        },
    };

    html! {
        <div>
            <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100 mb-6">{"Sub Admins"}</h2>
            {body}
        </div>
    }
}
