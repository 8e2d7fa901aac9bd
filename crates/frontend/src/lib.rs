//! Backoffice admin dashboard
//!
//! Yew single-page application: public auth pages, a drawer layout for the
//! signed-in area, and a cookie session shared with the API client.

pub mod api;
pub mod app;
pub mod auth_guard;
pub mod bootstrap;
pub mod browser;
pub mod components;
pub mod crash_reporting;
pub mod hooks;
pub mod layout;
pub mod logging;
pub mod pages;
pub mod router;
pub mod services;
pub mod session;
pub mod store;
pub mod theme;

pub use app::{App, AppProps};
pub use services::AppServices;
