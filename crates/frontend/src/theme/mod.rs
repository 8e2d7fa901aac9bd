//! Theme management module

mod context;
mod provider;

pub use context::{STORAGE_KEY, Theme, ThemeAction, ThemeContext};
pub use provider::ThemeProvider;

use yew::prelude::*;

/// Hook to access theme context
#[hook]
pub fn use_theme() -> UseReducerHandle<ThemeContext> {
    use_context::<UseReducerHandle<ThemeContext>>()
        .expect("Theme context not found. Make sure to wrap your app with ThemeProvider")
}

/// Hook to get theme toggle callback
#[hook]
pub fn use_theme_toggle() -> Callback<()> {
    let theme_ctx = use_theme();
    Callback::from(move |_| {
        theme_ctx.dispatch(ThemeAction::Toggle);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_theme_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"Dark\"");
    }
}
