//! User Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Credentials;

impl ApiClient {
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.execute(Method::POST, "/user/sign-up", credentials).await
    }

    /// On success the server sets the session cookie; the body is not used.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.execute(Method::POST, "/user/sign-in", credentials).await
    }
}
