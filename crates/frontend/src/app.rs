use crate::router::{Route, switch};
use crate::services::{AppServices, ServicesProvider};
use crate::store::StoreProvider;
use crate::theme::ThemeProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub services: AppServices,
}

/// Root component: services, then session store, then theme, then routes
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ServicesProvider services={props.services.clone()}>
            <StoreProvider>
                <ThemeProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </ThemeProvider>
            </StoreProvider>
        </ServicesProvider>
    }
}
