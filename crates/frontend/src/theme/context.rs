//! Theme context definition

use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub const STORAGE_KEY: &str = "backoffice-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ThemeContext {
    pub theme: Theme,
}

pub enum ThemeAction {
    Set(Theme),
    Toggle,
}

impl Reducible for ThemeContext {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let theme = match action {
            ThemeAction::Set(theme) => theme,
            ThemeAction::Toggle => self.theme.toggle(),
        };
        if let Err(error) = LocalStorage::set(STORAGE_KEY, theme) {
            tracing::warn!(%error, "Failed to persist theme");
        }
        apply_document_theme(theme);
        Rc::new(Self { theme })
    }
}

/// Theme saved by an earlier visit
pub fn saved_theme() -> Option<Theme> {
    LocalStorage::get(STORAGE_KEY).ok()
}

/// Toggle the `dark` class on `<html>`
pub fn apply_document_theme(theme: Theme) {
    let Some(html_element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let class_list = html_element.class_list();
    let result = match theme {
        Theme::Dark => class_list.add_1("dark"),
        Theme::Light => class_list.remove_1("dark"),
    };
    if let Err(error) = result {
        tracing::debug!(?error, "Failed to update document theme class");
    }
}
