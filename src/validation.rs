//! Form Validation
//!
//! Each draft reports every broken rule at once, at most one per field. The
//! same result drives the error list and the submit button: a `Missing`
//! violation keeps the button disabled, any violation blocks the submit.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Client, NewTransaction, TransactionType};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 3;
/// Exclusive lower bound for a transaction amount
pub const MIN_AMOUNT: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Field still holds its empty/zero sentinel
    Missing,
    /// Field is filled in but breaks its rule
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: &'static str,
}

impl Violation {
    fn missing(field: &'static str, message: &'static str) -> Self {
        Self { field, kind: ViolationKind::Missing, message }
    }

    fn invalid(field: &'static str, message: &'static str) -> Self {
        Self { field, kind: ViolationKind::Invalid, message }
    }
}

/// True when no required field is left at its sentinel
pub fn is_complete(violations: &[Violation]) -> bool {
    violations.iter().all(|v| v.kind != ViolationKind::Missing)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Record that can be listed and edited in a form
pub trait Record: Clone + PartialEq + Send + Sync + 'static {
    /// Singular noun used in messages
    const NAME: &'static str;

    fn id(&self) -> u32;
}

impl Record for Client {
    const NAME: &'static str = "client";

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for crate::models::Transaction {
    const NAME: &'static str = "transaction";

    fn id(&self) -> u32 {
        self.id
    }
}

/// Editable copy of a record's fields
pub trait Draft: Clone + Default + PartialEq + Send + Sync + 'static {
    type Record: Record;

    fn from_record(record: &Self::Record) -> Self;
    fn validate(&self) -> Vec<Violation>;
}

// ========================
// Client
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub account_number: String,
}

impl ClientDraft {
    /// Request body; `id` is 0 for a create
    pub fn to_client(&self, id: u32) -> Client {
        Client {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            age: self.age,
            account_number: self.account_number.trim().to_string(),
        }
    }
}

impl Draft for ClientDraft {
    type Record = Client;

    fn from_record(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            age: client.age,
            account_number: client.account_number.clone(),
        }
    }

    fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        let name = self.name.trim();
        const NAME_MSG: &str = "Name must be at least 2 characters";
        if name.is_empty() {
            violations.push(Violation::missing("name", NAME_MSG));
        } else if name.chars().count() < MIN_NAME_LEN {
            violations.push(Violation::invalid("name", NAME_MSG));
        }

        let email = self.email.trim();
        const EMAIL_MSG: &str = "Email must be a valid address";
        if email.is_empty() {
            violations.push(Violation::missing("email", EMAIL_MSG));
        } else if !is_valid_email(email) {
            violations.push(Violation::invalid("email", EMAIL_MSG));
        }

        if self.age < 1 {
            violations.push(Violation::missing("age", "Age must be at least 1"));
        }

        if self.account_number.trim().is_empty() {
            violations.push(Violation::missing("account_number", "Account number is required"));
        }

        violations
    }
}

// ========================
// Transaction
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub client_id: u32,
    /// Free text as typed; lowercased before use
    pub kind: String,
    /// Decimal text as typed
    pub amount: String,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self {
            client_id: 0,
            kind: TransactionType::Debit.as_str().to_string(),
            amount: String::new(),
        }
    }
}

impl TransactionDraft {
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Request body stamped with `transaction_date`; `None` if type or amount do not parse
    pub fn to_new_transaction(&self, transaction_date: String) -> Option<NewTransaction> {
        Some(NewTransaction {
            client_id: self.client_id,
            kind: TransactionType::parse(&self.kind)?,
            amount: self.parsed_amount()?,
            transaction_date,
        })
    }
}

impl Draft for TransactionDraft {
    type Record = crate::models::Transaction;

    fn from_record(tx: &Self::Record) -> Self {
        Self {
            client_id: tx.client_id,
            kind: tx.kind.as_str().to_string(),
            amount: tx.amount.to_string(),
        }
    }

    fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.client_id < 1 {
            violations.push(Violation::missing("client_id", "Client id must be at least 1"));
        }

        const TYPE_MSG: &str = "Type must be debit or credit";
        if self.kind.trim().is_empty() {
            violations.push(Violation::missing("type", TYPE_MSG));
        } else if TransactionType::parse(&self.kind).is_none() {
            violations.push(Violation::invalid("type", TYPE_MSG));
        }

        const AMOUNT_MSG: &str = "Amount must be greater than 0.01";
        match self.parsed_amount() {
            _ if self.amount.trim().is_empty() => {
                violations.push(Violation::missing("amount", AMOUNT_MSG));
            }
            Some(amount) if amount == 0.0 => {
                violations.push(Violation::missing("amount", AMOUNT_MSG));
            }
            Some(amount) if amount > MIN_AMOUNT => {}
            _ => violations.push(Violation::invalid("amount", AMOUNT_MSG)),
        }

        violations
    }
}

// ========================
// Login
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginDraft {
    pub username: String,
    pub password: String,
}

impl LoginDraft {
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.username.trim().is_empty() {
            violations.push(Violation::missing("username", "Username is required"));
        }
        const PASSWORD_MSG: &str = "Password must be at least 3 characters long";
        if self.password.is_empty() {
            violations.push(Violation::missing("password", PASSWORD_MSG));
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            violations.push(Violation::invalid("password", PASSWORD_MSG));
        }
        violations
    }
}
