//! API access for components
//!
//! Authenticated calls go through [`GuardedClient`], which reports a rejected
//! session token to the handler registered with [`set_auth_error_callback`]
//! so no page has to check for it.

use backoffice_http::AuthenticatedApiClient;
use backoffice_http::ClientError;
use backoffice_http::types::{
    DashboardSummary, Settings, SubAdminListResponse, UserListResponse,
};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

thread_local! {
    static AUTH_ERROR_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Set the global auth error callback
pub fn set_auth_error_callback(callback: Rc<dyn Fn()>) {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

pub fn clear_auth_error_callback() {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

pub fn trigger_auth_error() {
    // Clone out of the cell so the callback may re-register itself.
    let callback = AUTH_ERROR_CALLBACK.with(|cb| cb.borrow().clone());
    if let Some(callback) = callback {
        callback();
    }
}

/// Await `request` and signal an expired session if the server answered 401
pub async fn guarded<T>(
    request: impl Future<Output = Result<T, ClientError>>,
) -> Result<T, ClientError> {
    let result = request.await;
    if let Err(error) = &result
        && error.is_auth_expired()
    {
        tracing::info!("Session token rejected, signing out");
        trigger_auth_error();
    }
    result
}

/// Authenticated client whose calls all pass through [`guarded`]
#[derive(Clone)]
pub struct GuardedClient {
    inner: AuthenticatedApiClient,
}

impl GuardedClient {
    pub fn new(client: AuthenticatedApiClient) -> Self {
        Self { inner: client }
    }

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ClientError> {
        guarded(self.inner.dashboard_summary()).await
    }

    pub async fn list_users(
        &self,
        page: usize,
        page_size: usize,
        search: Option<&str>,
    ) -> Result<UserListResponse, ClientError> {
        guarded(self.inner.list_users(page, page_size, search)).await
    }

    pub async fn list_sub_admins(&self) -> Result<SubAdminListResponse, ClientError> {
        guarded(self.inner.list_sub_admins()).await
    }

    pub async fn get_settings(&self) -> Result<Settings, ClientError> {
        guarded(self.inner.get_settings()).await
    }

    pub async fn update_settings(&self, settings: &Settings) -> Result<Settings, ClientError> {
        guarded(self.inner.update_settings(settings)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_trigger_without_callback_is_noop() {
        clear_auth_error_callback();
        trigger_auth_error();
    }

    #[test]
    fn test_registered_callback_runs() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        set_auth_error_callback(Rc::new(move || counter.set(counter.get() + 1)));

        trigger_auth_error();
        trigger_auth_error();
        assert_eq!(hits.get(), 2);

        clear_auth_error_callback();
        trigger_auth_error();
        assert_eq!(hits.get(), 2);
    }
}
