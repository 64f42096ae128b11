//! REST Resource Wrappers
//!
//! Frontend bindings to the back-office REST service, organized by resource.
//! Each call is one request: no retry, no caching.

mod auth;
mod client;
mod extract;
mod transaction;

use gloo_net::http::{RequestBuilder, Response};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Base URL plus the bearer token to send, if any
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    /// `path` starts with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Send without a body and decode the JSON reply
    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.authorize(builder).send().await.map_err(network_error)?;
        decode(check(response).await?).await
    }

    /// Send a JSON body and decode the JSON reply
    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request.send().await.map_err(network_error)?;
        decode(check(response).await?).await
    }

    /// Send without a body, ignoring whatever comes back on success
    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = self.authorize(builder).send().await.map_err(network_error)?;
        check(response).await.map(|_| ())
    }
}

fn network_error(error: gloo_net::Error) -> ApiError {
    warn!("api: transport failure: {}", error);
    ApiError::from(error)
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    debug!("api: {} {}", status, response.url());
    if (200..=299).contains(&status) {
        return Ok(response);
    }
    let body = response.text().await.ok().filter(|b| !b.is_empty());
    warn!("api: {} answered {}", response.url(), status);
    Err(ApiError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let raw = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let api = ApiClient::new("http://localhost:8080", None);
        assert_eq!(api.url("/clients/3"), "http://localhost:8080/clients/3");
        let trailing = ApiClient::new("https://bank.example.com", Some("t".into()));
        assert_eq!(trailing.url("/extract/client/1"), "https://bank.example.com/extract/client/1");
    }
}
