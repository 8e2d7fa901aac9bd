//! Authentication API client methods

use super::{ClientError, PublicApiClient};
use crate::types::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, SignupRequest,
};
use reqwest::Method;

impl PublicApiClient {
    /// Exchange credentials for session tokens
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let req = self.request(Method::POST, "/auth/login").json(request);
        self.execute(req).await
    }

    /// Create an account and sign it in
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ClientError> {
        let req = self.request(Method::POST, "/auth/signup").json(request);
        self.execute(req).await
    }

    /// Ask the server to mail a password reset link
    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/forgot-password")
            .json(request);
        self.execute(req).await
    }
}
