//! URL routing
//!
//! Paths mirror the route tables in `backoffice_core::routes`; the tests keep
//! both in step.

use crate::auth_guard::{RedirectIfSignedIn, RequireSession};
use crate::layout::{PrivateLayout, PublicLayout};
use crate::pages::{
    Dashboard, ForgotPassword, Login, NotFound, Settings, Signup, SubAdmins, Users,
};
use backoffice_core::Page;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/auth/login")]
    Login,
    #[at("/auth/signup")]
    Signup,
    #[at("/auth/forgot-password")]
    ForgotPassword,
    #[at("/u/dashboard")]
    Dashboard,
    #[at("/u/users")]
    Users,
    #[at("/u/sub-admins")]
    SubAdmins,
    #[at("/u/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Login => Self::Login,
            Page::Signup => Self::Signup,
            Page::ForgotPassword => Self::ForgotPassword,
            Page::Dashboard => Self::Dashboard,
            Page::Users => Self::Users,
            Page::SubAdmins => Self::SubAdmins,
            Page::Settings => Self::Settings,
        }
    }
}

impl Route {
    pub const fn page(self) -> Option<Page> {
        match self {
            Self::Login => Some(Page::Login),
            Self::Signup => Some(Page::Signup),
            Self::ForgotPassword => Some(Page::ForgotPassword),
            Self::Dashboard => Some(Page::Dashboard),
            Self::Users => Some(Page::Users),
            Self::SubAdmins => Some(Page::SubAdmins),
            Self::Settings => Some(Page::Settings),
            Self::Root | Self::NotFound => None,
        }
    }

    pub fn home() -> Self {
        Page::Dashboard.into()
    }
}

fn page_view(page: Page) -> Html {
    match page {
        Page::Login => html! { <Login /> },
        Page::Signup => html! { <Signup /> },
        Page::ForgotPassword => html! { <ForgotPassword /> },
        Page::Dashboard => html! { <Dashboard /> },
        Page::Users => html! { <Users /> },
        Page::SubAdmins => html! { <SubAdmins /> },
        Page::Settings => html! { <Settings /> },
    }
}

pub fn switch(route: Route) -> Html {
    let Some(page) = route.page() else {
        return match route {
            Route::Root => html! { <Redirect<Route> to={Route::home()} /> },
            _ => html! { <NotFound /> },
        };
    };

    match page.access() {
        backoffice_core::Access::Public => html! {
            <RedirectIfSignedIn>
                <PublicLayout>{ page_view(page) }</PublicLayout>
            </RedirectIfSignedIn>
        },
        backoffice_core::Access::Private => html! {
            <RequireSession>
                <PrivateLayout>{ page_view(page) }</PrivateLayout>
            </RequireSession>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_core::{PRIVATE_ROUTES, PUBLIC_ROUTES, routes};

    #[test]
    fn test_paths_match_route_tables() {
        for descriptor in PUBLIC_ROUTES.iter().chain(PRIVATE_ROUTES) {
            let route = Route::from(descriptor.page);
            assert_eq!(route.to_path(), descriptor.path);
            assert_eq!(route.page(), Some(descriptor.page));
        }
    }

    #[test]
    fn test_home_is_dashboard() {
        assert_eq!(Route::home().to_path(), routes::HOME_PATH);
    }

    #[test]
    fn test_menu_routes_are_recognized() {
        for entry in backoffice_core::dashboard_menu() {
            let route = Route::recognize(&entry.route).map(Route::page);
            assert!(matches!(route, Some(Some(_))), "{}", entry.route);
        }
    }
}
