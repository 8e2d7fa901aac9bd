//! Backoffice HTTP client
//!
//! Typed access to the backoffice API for the dashboard frontend. Requests
//! are configured from [`backoffice_core::ApiConfig`]: base URL, timeout, and
//! the `Authorization: Bearer <token>` header of authenticated calls.

pub mod client;
pub mod types;

pub use client::{ApiClientBuilder, AuthenticatedApiClient, ClientError, PublicApiClient};
