//! Global session state

use crate::api;
use crate::services::use_services;
use backoffice_http::types::UserProfile;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Store {
    pub signed_in: bool,
    pub profile: Option<UserProfile>,
    /// Shown once on the login page, e.g. after the session expired
    pub notice: Option<String>,
}

pub enum SessionAction {
    SignedIn(Option<UserProfile>),
    SignedOut { notice: Option<String> },
    DismissNotice,
}

impl Reducible for Store {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::SignedIn(profile) => Rc::new(Self {
                signed_in: true,
                profile,
                notice: None,
            }),
            SessionAction::SignedOut { notice } => Rc::new(Self {
                signed_in: false,
                profile: None,
                notice,
            }),
            SessionAction::DismissNotice => Rc::new(Self {
                notice: None,
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    pub children: Children,
}

/// Seeds the store from the session cookie and signs out on rejected tokens
#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let services = use_services();
    let store = {
        let signed_in = services.session().is_authenticated();
        use_reducer(move || Store {
            signed_in,
            ..Store::default()
        })
    };

    {
        let store = store.clone();
        let session = services.session().clone();
        use_effect_with((), move |_| {
            api::set_auth_error_callback(Rc::new(move || {
                session.sign_out();
                store.dispatch(SessionAction::SignedOut {
                    notice: Some("Your session has expired. Please sign in again.".to_string()),
                });
            }));
            api::clear_auth_error_callback
        });
    }

    html! {
        <ContextProvider<UseReducerHandle<Store>> context={store}>
            { props.children.clone() }
        </ContextProvider<UseReducerHandle<Store>>>
    }
}

/// Hook to access the global store
#[hook]
pub fn use_store() -> UseReducerHandle<Store> {
    use_context::<UseReducerHandle<Store>>()
        .expect("Store context not found. Make sure to wrap your app with StoreProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: "Admin".into(),
            email: "admin@example.com".into(),
            role: None,
        }
    }

    #[test]
    fn test_sign_in_clears_notice() {
        let store = Rc::new(Store {
            notice: Some("expired".into()),
            ..Store::default()
        });
        let store = store.reduce(SessionAction::SignedIn(Some(profile())));
        assert!(store.signed_in);
        assert_eq!(store.profile.as_ref().map(|p| p.id.as_str()), Some("u1"));
        assert_eq!(store.notice, None);
    }

    #[test]
    fn test_sign_out_drops_profile() {
        let store = Rc::new(Store {
            signed_in: true,
            profile: Some(profile()),
            notice: None,
        });
        let store = store.reduce(SessionAction::SignedOut {
            notice: Some("bye".into()),
        });
        assert!(!store.signed_in);
        assert!(store.profile.is_none());
        assert_eq!(store.notice.as_deref(), Some("bye"));

        let store = store.reduce(SessionAction::DismissNotice);
        assert_eq!(store.notice, None);
        assert!(!store.signed_in);
    }
}
