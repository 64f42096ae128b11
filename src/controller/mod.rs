//! Screen Controllers
//!
//! Plain state machines behind each screen. Components keep one inside an
//! `RwSignal`, call a `begin_*` method, run the returned request, and hand
//! the outcome back to the matching `finish_*` method.

mod extract;
mod list_form;

pub use extract::{ExtractQuery, ExtractView};
pub use list_form::{
    Action, FetchOutcome, ListFormController, PageQuery, Phase, Sort, SortField, SortOrder, SubmitBlocked,
    Submission,
};

/// Identifies one issued fetch; only the latest ticket may apply its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Per-controller source of fetch tickets
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub(crate) fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub(crate) fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}
