//! UI Components
//!
//! Reusable Leptos components.

mod client_list;
mod delete_button;
mod extract_list;
mod feedback;
mod header;
mod login_form;
mod pager;
mod route_gate;
mod transaction_list;

pub use client_list::ClientList;
pub use delete_button::DeleteButton;
pub use extract_list::ExtractList;
pub use feedback::{ErrorBanner, FormErrors, NoticeBanner};
pub use header::Header;
pub use login_form::LoginForm;
pub use pager::{Pager, SortControls};
pub use route_gate::RouteGate;
pub use transaction_list::TransactionList;
