//! Paged user list with search

use crate::components::{ErrorBanner, LoadingSpinner};
use crate::hooks::{Fetch, use_fetch};
use backoffice_http::types::UserRecord;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const PAGE_SIZE: usize = 25;

const TH: &str =
    "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

/// Number of pages needed for `total` rows, never less than one
pub const fn page_count(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

#[function_component(Users)]
pub fn users() -> Html {
    let page = use_state(|| 1_usize);
    let search = use_state(String::new);

    let users = use_fetch(
        (*page, (*search).clone()),
        |client, (page, search)| async move {
            client
                .list_users(page, PAGE_SIZE, Some(search.as_str()))
                .await
        },
    );

    let on_search = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
            page.set(1);
        })
    };

    let go_to = {
        let page = page.clone();
        Callback::from(move |target: usize| page.set(target))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-6 gap-4">
                <h2 class="text-2xl font-bold text-gray-900 dark:text-gray-100">{"Users"}</h2>
                <input
                    type="search"
                    placeholder="Search by name or email"
                    value={(*search).clone()}
                    oninput={on_search}
                    class="w-72 px-3 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
            </div>
            {match &*users {
                Fetch::Loading => html! { <LoadingSpinner text={"Loading users..."} /> },
                Fetch::Failed(message) => html! { <ErrorBanner message={message.clone()} /> },
                Fetch::Ready(list) => {
                    let pages = page_count(list.total, list.page_size.max(1));
                    html! {
                        <>
                            <UserTable users={list.users.clone()} />
                            <Pager page={*page} {pages} total={list.total} on_change={go_to.clone()} />
                        </>
                    }
                }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct UserTableProps {
    users: Vec<UserRecord>,
}

#[function_component(UserTable)]
fn user_table(props: &UserTableProps) -> Html {
    html! {
        <div class="bg-white dark:bg-gray-800 shadow overflow-hidden rounded-lg">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900">
                    <tr>
                        <th scope="col" class={TH}>{"Name"}</th>
                        <th scope="col" class={TH}>{"Email"}</th>
                        <th scope="col" class={TH}>{"Status"}</th>
                        <th scope="col" class={TH}>{"Joined"}</th>
                    </tr>
                </thead>
                <tbody class="bg-white dark:bg-gray-800 divide-y divide-gray-200 dark:divide-gray-700">
                    if props.users.is_empty() {
                        <tr>
                            <td colspan="4" class="px-6 py-8 text-center text-sm text-gray-500 dark:text-gray-400">
                                {"No users found"}
                            </td>
                        </tr>
                    }
                    { for props.users.iter().map(|user| html! {
                        <tr key={user.id.clone()}>
                            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-gray-100">{&user.name}</td>
                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">{&user.email}</td>
                            <td class="px-6 py-4 whitespace-nowrap">
                                if user.enabled {
                                    <span class="px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-300">{"Active"}</span>
                                } else {
                                    <span class="px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300">{"Disabled"}</span>
                                }
                            </td>
                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                {user.created_at.format("%Y-%m-%d").to_string()}
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PagerProps {
    page: usize,
    pages: usize,
    total: usize,
    on_change: Callback<usize>,
}

#[function_component(Pager)]
fn pager(props: &PagerProps) -> Html {
    let page = props.page;
    let previous = props.on_change.reform(move |_: MouseEvent| page.saturating_sub(1).max(1));
    let next = props.on_change.reform(move |_: MouseEvent| page + 1);
    let button = "px-3 py-1 text-sm rounded-lg border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 disabled:opacity-50";

    html! {
        <div class="flex items-center justify-between mt-4 text-sm text-gray-600 dark:text-gray-400">
            <span>{format!("{} users", props.total)}</span>
            <div class="flex items-center gap-2">
                <button class={button} disabled={page <= 1} onclick={previous}>{"Previous"}</button>
                <span>{format!("Page {} of {}", page, props.pages)}</span>
                <button class={button} disabled={page >= props.pages} onclick={next}>{"Next"}</button>
            </div>
        </div>
    }
}
