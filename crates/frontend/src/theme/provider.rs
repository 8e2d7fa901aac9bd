//! Theme provider component

use super::context::{Theme, ThemeAction, ThemeContext, apply_document_theme, saved_theme};
use crate::browser;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(|| {
        let theme = saved_theme().unwrap_or_default();
        apply_document_theme(theme);
        ThemeContext { theme }
    });

    // Follow the system preference until the user picks a theme
    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            if saved_theme().is_none() && browser::prefers_dark_scheme() {
                theme.dispatch(ThemeAction::Set(Theme::Dark));
            }
            || ()
        });
    }

    html! {
        <ContextProvider<UseReducerHandle<ThemeContext>> context={theme}>
            { props.children.clone() }
        </ContextProvider<UseReducerHandle<ThemeContext>>>
    }
}
