//! Client Endpoints

use gloo_net::http::Request;

use super::ApiClient;
use crate::controller::PageQuery;
use crate::error::ApiError;
use crate::models::{Client, ListResponse, Page};

const CLIENTS: &str = "/clients";

fn client_path(id: u32) -> String {
    format!("{}/{}", CLIENTS, id)
}

impl ApiClient {
    pub async fn list_clients(&self, query: &PageQuery) -> Result<Page<Client>, ApiError> {
        let builder = Request::get(&self.url(CLIENTS)).query(query.query_pairs());
        let response: ListResponse<Client> = self.fetch(builder).await?;
        Ok(response.into_page())
    }

    pub async fn create_client(&self, client: &Client) -> Result<Client, ApiError> {
        self.send_json(Request::post(&self.url(CLIENTS)), client).await
    }

    pub async fn update_client(&self, id: u32, client: &Client) -> Result<Client, ApiError> {
        self.send_json(Request::put(&self.url(&client_path(id))), client).await
    }

    pub async fn delete_client(&self, id: u32) -> Result<(), ApiError> {
        self.send_empty(Request::delete(&self.url(&client_path(id)))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_paths() {
        let api = ApiClient::new("http://localhost:8080", None);
        assert_eq!(api.url(CLIENTS), "http://localhost:8080/clients");
        assert_eq!(api.url(&client_path(7)), "http://localhost:8080/clients/7");
    }
}
