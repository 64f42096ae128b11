//! Extract Endpoint

use gloo_net::http::Request;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Extract;

fn extract_path(client_id: u32) -> String {
    format!("/extract/client/{}", client_id)
}

impl ApiClient {
    pub async fn get_extract(&self, client_id: u32) -> Result<Extract, ApiError> {
        self.fetch(Request::get(&self.url(&extract_path(client_id)))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_path() {
        assert_eq!(extract_path(5), "/extract/client/5");
    }
}
