//! Extract Query
//!
//! Single client-id lookup. Any failure, including an empty history, shows
//! the "no transactions" state instead of keeping an old table on screen.

use log::{debug, warn};

use super::{FetchSequence, FetchTicket};
use crate::error::ApiError;
use crate::models::Extract;

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractView {
    Idle,
    Loading,
    Loaded(Extract),
    NoTransactions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractQuery {
    client_id: u32,
    view: ExtractView,
    sequence: FetchSequence,
}

impl Default for ExtractQuery {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ExtractQuery {
    /// `client_id` comes from the URL when present
    pub fn new(client_id: Option<u32>) -> Self {
        Self {
            client_id: client_id.unwrap_or(0),
            view: ExtractView::Idle,
            sequence: FetchSequence::default(),
        }
    }

    pub fn client_id(&self) -> u32 {
        self.client_id
    }

    pub fn view(&self) -> &ExtractView {
        &self.view
    }

    pub fn set_client_id(&mut self, client_id: u32) {
        self.client_id = client_id;
    }

    pub fn can_submit(&self) -> bool {
        self.client_id != 0
    }

    pub fn begin_query(&mut self) -> Option<FetchTicket> {
        if !self.can_submit() {
            return None;
        }
        self.view = ExtractView::Loading;
        let ticket = self.sequence.issue();
        debug!("extract: fetch {:?} for client {}", ticket, self.client_id);
        Some(ticket)
    }

    /// Returns false when the response was stale and dropped
    pub fn finish_query(&mut self, ticket: FetchTicket, result: Result<Extract, ApiError>) -> bool {
        if !self.sequence.is_current(ticket) {
            debug!("extract: dropping stale response {:?}", ticket);
            return false;
        }
        self.view = match result {
            Ok(extract) if extract.transactions.is_empty() => ExtractView::NoTransactions,
            Ok(extract) => ExtractView::Loaded(extract),
            Err(e) => {
                if !e.is_not_found() {
                    warn!("extract: fetch for client {} failed: {}", self.client_id, e);
                }
                ExtractView::NoTransactions
            }
        };
        true
    }

    /// Reset the input and hide results; an in-flight response is ignored
    pub fn clear(&mut self) {
        self.client_id = 0;
        self.view = ExtractView::Idle;
        self.sequence.issue();
    }
}
