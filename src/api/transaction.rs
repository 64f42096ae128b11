//! Transaction Endpoints

use gloo_net::http::Request;

use super::ApiClient;
use crate::controller::PageQuery;
use crate::error::ApiError;
use crate::models::{ListResponse, NewTransaction, Page, Transaction};

const TRANSACTIONS: &str = "/transactions";

fn transaction_path(id: u32) -> String {
    format!("{}/{}", TRANSACTIONS, id)
}

impl ApiClient {
    pub async fn list_transactions(&self, query: &PageQuery) -> Result<Page<Transaction>, ApiError> {
        let builder = Request::get(&self.url(TRANSACTIONS)).query(query.query_pairs());
        let response: ListResponse<Transaction> = self.fetch(builder).await?;
        Ok(response.into_page())
    }

    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        self.send_json(Request::post(&self.url(TRANSACTIONS)), transaction).await
    }

    pub async fn delete_transaction(&self, id: u32) -> Result<(), ApiError> {
        self.send_empty(Request::delete(&self.url(&transaction_path(id)))).await
    }
}
