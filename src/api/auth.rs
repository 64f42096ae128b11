//! Login Endpoint

use gloo_net::http::Request;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};

const LOGIN: &str = "/autenticacao/login";

impl ApiClient {
    /// Exchange credentials for a session token. A reply without a token is a failure.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let response: LoginResponse = self.send_json(Request::post(&self.url(LOGIN)), request).await?;
        response
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Decode("login response carried no token".to_string()))
    }
}
