//! Dashboard drawer entries and active-route matching

use crate::routes::{PRIVATE_ROUTES, RouteDescriptor};

/// Icons the drawer knows how to draw
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuIcon {
    Dashboard,
    Group,
    AdminPanel,
    Settings,
    Logout,
}

/// A navigable drawer item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: String,
    pub icon: MenuIcon,
    pub route: String,
    /// Key for rendering and active-state comparison, unique within a menu
    pub alias: String,
}

impl MenuEntry {
    /// Build an entry, deriving the alias from the title unless one is given
    pub fn new(
        title: impl Into<String>,
        icon: MenuIcon,
        route: impl Into<String>,
        alias: Option<&str>,
    ) -> Self {
        let title = title.into();
        let alias = alias.map_or_else(|| derive_alias(&title), str::to_string);
        Self {
            title,
            icon,
            route: route.into(),
            alias,
        }
    }

    pub fn is_active(&self, current_path: &str, strategy: MatchStrategy) -> bool {
        strategy.is_active(current_path, &self.route)
    }
}

/// Replace the first space with `_`, then lowercase.
///
/// Only the first space is touched: `"A B C"` becomes `"a_b c"`.
pub fn derive_alias(title: &str) -> String {
    title.replacen(' ', "_", 1).to_lowercase()
}

/// Menu entries for every route that carries drawer metadata, in table order
pub fn menu_from_routes(routes: &[RouteDescriptor]) -> Vec<MenuEntry> {
    routes
        .iter()
        .filter_map(|route| {
            route
                .menu
                .map(|spec| MenuEntry::new(spec.title, spec.icon, route.path, None))
        })
        .collect()
}

/// The drawer of the private layout
pub fn dashboard_menu() -> Vec<MenuEntry> {
    menu_from_routes(PRIVATE_ROUTES)
}

/// How the current location is compared with a menu route
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Active when the location contains the route anywhere. A route that is a
    /// prefix of another path (`/u/dashboard` in `/u/dashboard-extra`) matches too.
    Contains,
    /// Active when the route's path segments lead the location's segments
    #[default]
    Segments,
}

impl MatchStrategy {
    pub fn is_active(self, current_path: &str, route: &str) -> bool {
        match self {
            MatchStrategy::Contains => current_path.contains(route),
            MatchStrategy::Segments => {
                let current: Vec<&str> = segments(current_path).collect();
                let route: Vec<&str> = segments(route).collect();
                current.starts_with(&route)
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.trim_end_matches('/').split('/')
}

/// Alias of the first active entry, if any
pub fn active_alias<'a>(
    menu: &'a [MenuEntry],
    current_path: &str,
    strategy: MatchStrategy,
) -> Option<&'a str> {
    menu.iter()
        .find(|entry| entry.is_active(current_path, strategy))
        .map(|entry| entry.alias.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::resolve;

    #[test]
    fn test_alias_replaces_only_first_space() {
        assert_eq!(derive_alias("Sub Admins"), "sub_admins");
        assert_eq!(derive_alias("Users"), "users");
        assert_eq!(derive_alias("A B C"), "a_b c");
        assert_eq!(derive_alias("  Lead"), "_ lead");
    }

    #[test]
    fn test_alias_is_deterministic() {
        assert_eq!(derive_alias("Sub Admins"), derive_alias("Sub Admins"));
    }

    #[test]
    fn test_explicit_alias_wins() {
        let entry = MenuEntry::new("Sub Admins", MenuIcon::AdminPanel, "/u/sub-admins", Some("staff"));
        assert_eq!(entry.alias, "staff");
    }

    #[test]
    fn test_dashboard_menu_has_four_entries() {
        let menu = dashboard_menu();
        let aliases: Vec<_> = menu.iter().map(|e| e.alias.as_str()).collect();
        assert_eq!(aliases, vec!["dashboard", "users", "sub_admins", "settings"]);
    }

    #[test]
    fn test_every_menu_entry_is_a_private_route() {
        for entry in dashboard_menu() {
            let (access, _) = resolve(&entry.route).expect("menu route registered");
            assert_eq!(access, crate::routes::Access::Private);
        }
    }

    #[test]
    fn test_contains_has_prefix_false_positive() {
        assert!(MatchStrategy::Contains.is_active("/u/dashboard-extra", "/u/dashboard"));
        assert!(MatchStrategy::Contains.is_active("/u/dashboard", "/u/dashboard"));
        assert!(!MatchStrategy::Contains.is_active("/u/users", "/u/dashboard"));
    }

    #[test]
    fn test_segments_rejects_prefix_false_positive() {
        let s = MatchStrategy::Segments;
        assert!(!s.is_active("/u/dashboard-extra", "/u/dashboard"));
        assert!(s.is_active("/u/dashboard", "/u/dashboard"));
        assert!(s.is_active("/u/dashboard/", "/u/dashboard"));
        assert!(s.is_active("/u/users/42", "/u/users"));
        assert!(!s.is_active("/u", "/u/users"));
    }

    #[test]
    fn test_loading_users_marks_only_users_active() {
        let menu = dashboard_menu();
        assert_eq!(menu.len(), 4);

        for strategy in [MatchStrategy::Contains, MatchStrategy::Segments] {
            let active: Vec<_> = menu
                .iter()
                .filter(|e| e.is_active("/u/users", strategy))
                .map(|e| e.alias.as_str())
                .collect();
            assert_eq!(active, vec!["users"]);
        }
        assert_eq!(
            active_alias(&menu, "/u/users", MatchStrategy::default()),
            Some("users")
        );
    }

    #[test]
    fn test_no_active_entry_on_public_page() {
        let menu = dashboard_menu();
        assert_eq!(active_alias(&menu, "/auth/login", MatchStrategy::Segments), None);
    }
}
