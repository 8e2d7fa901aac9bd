//! Authentication guards for routes

use crate::router::Route;
use crate::store::use_store;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

/// Renders private pages only while a session token is present
#[function_component(RequireSession)]
pub fn require_session(props: &GuardProps) -> Html {
    let store = use_store();

    if store.signed_in {
        return html! { <>{ props.children.clone() }</> };
    }

    tracing::debug!("No session, redirecting to login");
    html! { <Redirect<Route> to={Route::Login} /> }
}

/// Sends signed-in users from the auth pages to the dashboard
#[function_component(RedirectIfSignedIn)]
pub fn redirect_if_signed_in(props: &GuardProps) -> Html {
    let store = use_store();

    if store.signed_in {
        return html! { <Redirect<Route> to={Route::home()} /> };
    }

    html! { <>{ props.children.clone() }</> }
}
