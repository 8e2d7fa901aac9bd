use backoffice_frontend::components::{ConfigErrorProps, ConfigErrorScreen};
use backoffice_frontend::{App, AppProps, bootstrap};

fn main() {
    match bootstrap::bootstrap() {
        Ok(services) => {
            yew::Renderer::<App>::with_props(AppProps { services }).render();
        }
        Err(error) => {
            tracing::error!(%error, "Failed to start the dashboard");
            yew::Renderer::<ConfigErrorScreen>::with_props(ConfigErrorProps {
                message: error.to_string(),
            })
            .render();
        }
    }
}
