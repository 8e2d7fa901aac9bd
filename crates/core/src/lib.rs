//! Backoffice core types and utilities
//!
//! Everything here is platform independent: route tables and the drawer menu,
//! the cookie session model, environment configuration, browser detection and
//! form validation. The WASM frontend and the HTTP client build on top of it.

pub mod browser;
pub mod config;
pub mod error;
pub mod form;
pub mod menu;
pub mod routes;
pub mod session;

pub use browser::BrowserEngine;
pub use config::{ApiConfig, AppEnv, CrashReportingConfig};
pub use error::{CoreError, CoreResult, ErrorContext};
pub use form::{FieldErrors, FormController, FormSchema, Submission};
pub use menu::{MatchStrategy, MenuEntry, MenuIcon, dashboard_menu};
pub use routes::{Access, Page, PRIVATE_ROUTES, PUBLIC_ROUTES, RouteDescriptor};
pub use session::{CookieJar, CookieKeys, CookieOptions, SessionCookies, SessionStore, SessionTokens};
