//! Application services injected at the root of the component tree

use crate::api::GuardedClient;
use crate::session::BrowserSession;
use backoffice_core::{ApiConfig, AppEnv, BrowserEngine, CrashReportingConfig};
use backoffice_http::{ApiClientBuilder, ClientError, PublicApiClient};
use std::rc::Rc;
use yew::prelude::*;

/// Everything the pages need from the bootstrap: configuration, the cookie
/// session, and API access.
#[derive(Clone)]
pub struct AppServices {
    inner: Rc<Inner>,
}

struct Inner {
    env: AppEnv,
    api: ApiConfig,
    session: BrowserSession,
    browser: BrowserEngine,
    crash_reporting: Option<CrashReportingConfig>,
    public_client: PublicApiClient,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices")
            .field("app_name", &self.inner.env.app_name)
            .field("api_base_url", &self.inner.api.base_url)
            .field("browser", &self.inner.browser)
            .finish_non_exhaustive()
    }
}

impl AppServices {
    pub fn new(
        env: AppEnv,
        api: ApiConfig,
        session: BrowserSession,
        browser: BrowserEngine,
        crash_reporting: Option<CrashReportingConfig>,
    ) -> Result<Self, ClientError> {
        let public_client = ApiClientBuilder::from_config(&api).build_public()?;
        Ok(Self {
            inner: Rc::new(Inner {
                env,
                api,
                session,
                browser,
                crash_reporting,
                public_client,
            }),
        })
    }

    pub fn app_name(&self) -> &str {
        &self.inner.env.app_name
    }

    pub fn session(&self) -> &BrowserSession {
        &self.inner.session
    }

    pub fn browser(&self) -> BrowserEngine {
        self.inner.browser
    }

    pub fn crash_reporting(&self) -> Option<&CrashReportingConfig> {
        self.inner.crash_reporting.as_ref()
    }

    pub fn public_client(&self) -> &PublicApiClient {
        &self.inner.public_client
    }

    /// Client carrying the current `Auth-Token` cookie
    pub fn authenticated_client(&self) -> Result<GuardedClient, ClientError> {
        let token = self.inner.session.auth_token().ok_or_else(|| {
            ClientError::AuthenticationFailed("no session token".to_string())
        })?;
        let client = ApiClientBuilder::from_config(&self.inner.api).build_authenticated(token)?;
        Ok(GuardedClient::new(client))
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProviderProps {
    pub services: AppServices,
    pub children: Children,
}

#[function_component(ServicesProvider)]
pub fn services_provider(props: &ServicesProviderProps) -> Html {
    html! {
        <ContextProvider<AppServices> context={props.services.clone()}>
            { props.children.clone() }
        </ContextProvider<AppServices>>
    }
}

/// Hook to access the injected services
#[hook]
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
        .expect("AppServices not found. Make sure to wrap your app with ServicesProvider")
}
