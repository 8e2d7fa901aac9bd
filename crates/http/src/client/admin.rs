//! Dashboard data behind the session token

use super::{AuthenticatedApiClient, ClientError};
use crate::types::{DashboardSummary, Settings, SubAdminListResponse, UserListResponse};
use reqwest::Method;

impl AuthenticatedApiClient {
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ClientError> {
        let request = self.request(Method::GET, "/api/dashboard/summary");
        self.execute(request).await
    }

    /// List users with pagination
    pub async fn list_users(
        &self,
        page: usize,
        page_size: usize,
        search: Option<&str>,
    ) -> Result<UserListResponse, ClientError> {
        let mut query_params = vec![
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];

        if let Some(search_term) = search.filter(|s| !s.trim().is_empty()) {
            query_params.push(("search", search_term.to_string()));
        }

        let request = self
            .request(Method::GET, "/api/users")
            .query(&query_params);
        self.execute(request).await
    }

    pub async fn list_sub_admins(&self) -> Result<SubAdminListResponse, ClientError> {
        let request = self.request(Method::GET, "/api/sub-admins");
        self.execute(request).await
    }

    pub async fn get_settings(&self) -> Result<Settings, ClientError> {
        let request = self.request(Method::GET, "/api/settings");
        self.execute(request).await
    }

    pub async fn update_settings(&self, settings: &Settings) -> Result<Settings, ClientError> {
        let request = self.request(Method::PUT, "/api/settings").json(settings);
        self.execute(request).await
    }
}
