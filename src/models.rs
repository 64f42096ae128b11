//! Frontend Models
//!
//! Data structures matching the REST service payloads.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Client data structure (matches backend)
///
/// `id == 0` means "not yet persisted" and is left out of request bodies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, skip_serializing_if = "is_unset")]
    pub id: u32,
    pub name: String,
    pub email: String,
    pub age: u32,
    #[serde(deserialize_with = "string_or_number")]
    pub account_number: String,
}

fn is_unset(id: &u32) -> bool {
    *id == 0
}

/// The service has sent account numbers both as strings and as numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[serde(alias = "Debit", alias = "DEBIT")]
    Debit,
    #[serde(alias = "Credit", alias = "CREDIT")]
    Credit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
        }
    }

    /// Case-insensitive parse of user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "debit" => Some(TransactionType::Debit),
            "credit" => Some(TransactionType::Credit),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u32,
    pub client_id: u32,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    #[serde(default)]
    pub transaction_date: String,
}

/// Body for `POST /transactions`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub client_id: u32,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub transaction_date: String,
}

/// Server-computed history and running total for one client
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Extract {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total: f64,
}

/// One page of a server-paginated collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
        }
    }
}

/// List endpoints answer either with a page or with a bare array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_page(self) -> Page<T> {
        match self {
            ListResponse::Paged(page) => page,
            ListResponse::Plain(content) => Page {
                total_pages: if content.is_empty() { 0 } else { 1 },
                content,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "userName")]
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}
