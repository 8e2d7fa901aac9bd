//! Static route tables
//!
//! Public and private pages are registered here once. The dashboard menu is
//! derived from [`PRIVATE_ROUTES`] (see [`crate::menu`]), so a menu entry can
//! only exist for a registered private route.

use crate::error::{CoreError, CoreResult};
use crate::menu::{MenuIcon, derive_alias};
use std::collections::HashSet;

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";
pub const DASHBOARD_PATH: &str = "/u/dashboard";
pub const USERS_PATH: &str = "/u/users";
pub const SUB_ADMINS_PATH: &str = "/u/sub-admins";
pub const SETTINGS_PATH: &str = "/u/settings";

/// Where signed-in visitors are sent from the auth pages and from `/`
pub const HOME_PATH: &str = DASHBOARD_PATH;

/// Every page the router can render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Signup,
    ForgotPassword,
    Dashboard,
    Users,
    SubAdmins,
    Settings,
}

impl Page {
    /// Path the page is registered under
    pub const fn path(self) -> &'static str {
        match self {
            Page::Login => LOGIN_PATH,
            Page::Signup => SIGNUP_PATH,
            Page::ForgotPassword => FORGOT_PASSWORD_PATH,
            Page::Dashboard => DASHBOARD_PATH,
            Page::Users => USERS_PATH,
            Page::SubAdmins => SUB_ADMINS_PATH,
            Page::Settings => SETTINGS_PATH,
        }
    }

    pub const fn access(self) -> Access {
        match self {
            Page::Login | Page::Signup | Page::ForgotPassword => Access::Public,
            Page::Dashboard | Page::Users | Page::SubAdmins | Page::Settings => Access::Private,
        }
    }
}

/// Whether a route needs an authenticated session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Private,
}

/// Drawer metadata attached to a private route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuSpec {
    pub title: &'static str,
    pub icon: MenuIcon,
}

/// A path bound to the page rendered for it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub page: Page,
    pub menu: Option<MenuSpec>,
}

impl RouteDescriptor {
    pub const fn new(page: Page) -> Self {
        Self {
            path: page.path(),
            page,
            menu: None,
        }
    }

    /// Also list the route in the dashboard drawer
    pub const fn with_menu(self, title: &'static str, icon: MenuIcon) -> Self {
        Self {
            menu: Some(MenuSpec { title, icon }),
            ..self
        }
    }
}

pub const PUBLIC_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::new(Page::Login),
    RouteDescriptor::new(Page::Signup),
    RouteDescriptor::new(Page::ForgotPassword),
];

pub const PRIVATE_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::new(Page::Dashboard).with_menu("Dashboard", MenuIcon::Dashboard),
    RouteDescriptor::new(Page::Users).with_menu("Users", MenuIcon::Group),
    RouteDescriptor::new(Page::SubAdmins).with_menu("Sub Admins", MenuIcon::AdminPanel),
    RouteDescriptor::new(Page::Settings).with_menu("Settings", MenuIcon::Settings),
];

/// Look a path up in both tables. Matching is exact and case-sensitive.
pub fn resolve(path: &str) -> Option<(Access, &'static RouteDescriptor)> {
    PUBLIC_ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| (Access::Public, route))
        .or_else(|| {
            PRIVATE_ROUTES
                .iter()
                .find(|route| route.path == path)
                .map(|route| (Access::Private, route))
        })
}

/// Check the built-in tables
pub fn validate_tables() -> CoreResult<()> {
    validate(PUBLIC_ROUTES, PRIVATE_ROUTES)
}

/// Check path uniqueness per table, disjointness of the two tables and
/// alias uniqueness among the menu entries
pub fn validate(public: &[RouteDescriptor], private: &[RouteDescriptor]) -> CoreResult<()> {
    let mut problems = Vec::new();

    for (name, table) in [("public", public), ("private", private)] {
        let mut seen = HashSet::new();
        for route in table {
            if !seen.insert(route.path) {
                problems.push(format!("duplicate {name} path '{}'", route.path));
            }
        }
    }

    let public_paths: HashSet<_> = public.iter().map(|r| r.path).collect();
    for route in private {
        if public_paths.contains(route.path) {
            problems.push(format!("path '{}' is both public and private", route.path));
        }
    }

    for route in public {
        if route.menu.is_some() {
            problems.push(format!("public path '{}' has a menu entry", route.path));
        }
    }

    let mut aliases = HashSet::new();
    for spec in private.iter().filter_map(|r| r.menu) {
        let alias = derive_alias(spec.title);
        if !aliases.insert(alias.clone()) {
            problems.push(format!("duplicate menu alias '{alias}'"));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CoreError::invalid_routes(problems.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        assert_eq!(validate_tables(), Ok(()));
    }

    #[test]
    fn test_public_paths() {
        let paths: Vec<_> = PUBLIC_ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec!["/auth/login", "/auth/signup", "/auth/forgot-password"]
        );
    }

    #[test]
    fn test_private_paths() {
        let paths: Vec<_> = PRIVATE_ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec!["/u/dashboard", "/u/users", "/u/sub-admins", "/u/settings"]
        );
    }

    #[test]
    fn test_page_access_matches_table() {
        for route in PUBLIC_ROUTES {
            assert_eq!(route.page.access(), Access::Public);
        }
        for route in PRIVATE_ROUTES {
            assert_eq!(route.page.access(), Access::Private);
        }
    }

    #[test]
    fn test_home_is_a_signed_in_page() {
        let (access, route) = resolve(HOME_PATH).unwrap();
        assert_eq!(access, Access::Private);
        assert_eq!(route.page, Page::Dashboard);
    }

    #[test]
    fn test_resolve_is_exact_and_case_sensitive() {
        let (access, route) = resolve("/u/users").unwrap();
        assert_eq!(access, Access::Private);
        assert_eq!(route.page, Page::Users);

        assert_eq!(resolve("/auth/login").map(|(a, _)| a), Some(Access::Public));
        assert!(resolve("/U/users").is_none());
        assert!(resolve("/u/users/").is_none());
        assert!(resolve("/u/dashboard-extra").is_none());
    }

    #[test]
    fn test_duplicate_paths_are_reported() {
        let public = [
            RouteDescriptor::new(Page::Login),
            RouteDescriptor::new(Page::Login),
        ];
        let err = validate(&public, PRIVATE_ROUTES).unwrap_err();
        assert!(err.to_string().contains("duplicate public path '/auth/login'"));
    }

    #[test]
    fn test_overlapping_tables_are_reported() {
        let private = [RouteDescriptor::new(Page::Login)];
        let err = validate(PUBLIC_ROUTES, &private).unwrap_err();
        assert!(err.to_string().contains("both public and private"));
    }

    #[test]
    fn test_colliding_aliases_are_reported() {
        let private = [
            RouteDescriptor::new(Page::SubAdmins).with_menu("Sub Admins", MenuIcon::AdminPanel),
            RouteDescriptor::new(Page::Users).with_menu("sub_admins", MenuIcon::Group),
        ];
        let err = validate(PUBLIC_ROUTES, &private).unwrap_err();
        assert!(err.to_string().contains("duplicate menu alias 'sub_admins'"));
    }
}
