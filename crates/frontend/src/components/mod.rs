pub mod banner;
pub mod config_error;
pub mod form_field;
pub mod icons;
pub mod spinner;
pub mod theme_toggle;

pub use banner::{ErrorBanner, SuccessBanner};
pub use config_error::{ConfigErrorProps, ConfigErrorScreen};
pub use form_field::TextField;
pub use icons::Icon;
pub use spinner::{ButtonSpinner, LoadingSpinner};
pub use theme_toggle::ThemeToggle;
