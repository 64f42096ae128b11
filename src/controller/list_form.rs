//! List-Form Controller
//!
//! Owns one screen's collection, form draft, paging and sort, and the
//! fetch / validate / submit / refresh cycle. Mutations are never patched into
//! the local list; every successful write re-fetches the current page.

use std::fmt;

use log::{debug, warn};

use super::{FetchSequence, FetchTicket};
use crate::error::ApiError;
use crate::models::Page;
use crate::validation::{is_complete, Draft, Record, Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Email,
    Age,
}

impl SortField {
    pub const ALL: [SortField; 4] = [SortField::Id, SortField::Name, SortField::Email, SortField::Age];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::Age => "age",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::Id,
            order: SortOrder::Asc,
        }
    }
}

/// Zero-based page request, optionally sorted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    pub sort: Option<Sort>,
}

impl PageQuery {
    pub fn new(size: u32) -> Self {
        Self { page: 0, size, sort: None }
    }

    pub fn sorted(size: u32, sort: Sort) -> Self {
        Self { page: 0, size, sort: Some(sort) }
    }

    /// Query string parameters in request order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(sort) = self.sort {
            pairs.push(("sortField", sort.field.as_str().to_string()));
            pairs.push(("sortOrder", sort.order.as_str().to_string()));
        }
        pairs
    }
}

/// Write request a screen can have in flight. Deletions run beside the
/// phase; only creates and updates occupy `Phase::Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update(u32),
    Delete(u32),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create => f.write_str("creating"),
            Action::Update(_) => f.write_str("updating"),
            Action::Delete(_) => f.write_str("deleting"),
        }
    }
}

/// Screen state. `editing` is the id whose values fill the draft, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Loading { editing: Option<u32> },
    Editing { id: u32 },
    Submitting { action: Action, editing: Option<u32> },
    Failed { message: String, editing: Option<u32> },
}

impl Phase {
    pub fn editing(&self) -> Option<u32> {
        match self {
            Phase::Idle => None,
            Phase::Editing { id } => Some(*id),
            Phase::Loading { editing }
            | Phase::Submitting { editing, .. }
            | Phase::Failed { editing, .. } => *editing,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Phase::Submitting { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    fn settled(editing: Option<u32>) -> Self {
        match editing {
            Some(id) => Phase::Editing { id },
            None => Phase::Idle,
        }
    }
}

/// A validated draft ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<D> {
    pub action: Action,
    pub draft: D,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    /// A create or update is in flight
    Busy,
    Invalid(Vec<Violation>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer fetch was issued; the result was dropped
    Stale,
    Failed,
    /// The page fell off the end of the collection; fetch the last page instead
    Refetch(FetchTicket),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListFormController<D: Draft> {
    items: Vec<D::Record>,
    total_pages: u32,
    query: PageQuery,
    draft: D,
    violations: Vec<Violation>,
    phase: Phase,
    /// Row whose delete request is in flight
    deleting: Option<u32>,
    /// Failure that arrived while the phase was busy showing something else
    background_error: Option<String>,
    sequence: FetchSequence,
}

impl<D: Draft> ListFormController<D> {
    pub fn new(query: PageQuery) -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
            query,
            draft: D::default(),
            violations: Vec::new(),
            phase: Phase::Idle,
            deleting: None,
            background_error: None,
            sequence: FetchSequence::default(),
        }
    }

    pub fn items(&self) -> &[D::Record] {
        &self.items
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn query(&self) -> PageQuery {
        self.query
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Everything the error banner should show, newest last
    pub fn error(&self) -> Option<String> {
        match (self.phase.error(), self.background_error.as_deref()) {
            (Some(phase), Some(background)) => Some(format!("{}\n{}", phase, background)),
            (Some(message), None) | (None, Some(message)) => Some(message.to_string()),
            (None, None) => None,
        }
    }

    // ========================
    // Fetching
    // ========================

    /// Start loading the current page. Refused while a create/update is in flight.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.phase.is_submitting() {
            return None;
        }
        self.background_error = None;
        Some(self.start_loading(self.phase.editing()))
    }

    fn start_loading(&mut self, editing: Option<u32>) -> FetchTicket {
        self.phase = Phase::Loading { editing };
        let ticket = self.sequence.issue();
        debug!("{} list: fetch {:?} page {}", D::Record::NAME, ticket, self.query.page);
        ticket
    }

    /// Re-fetch after a write. A create/update still in flight keeps its phase.
    fn refresh(&mut self, editing: Option<u32>) -> FetchTicket {
        if self.phase.is_submitting() {
            let ticket = self.sequence.issue();
            debug!("{} list: background fetch {:?}", D::Record::NAME, ticket);
            return ticket;
        }
        self.start_loading(editing)
    }

    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Page<D::Record>, ApiError>,
    ) -> FetchOutcome {
        if !self.sequence.is_current(ticket) {
            debug!("{} list: dropping stale response {:?}", D::Record::NAME, ticket);
            return FetchOutcome::Stale;
        }

        match result {
            Ok(page) => {
                let past_end = page.content.is_empty()
                    && page.total_pages > 0
                    && self.query.page >= page.total_pages;
                self.total_pages = page.total_pages;
                if past_end && self.phase.is_loading() {
                    self.query.page = page.total_pages - 1;
                    return FetchOutcome::Refetch(self.start_loading(self.phase.editing()));
                }
                self.items = page.content;
                if self.phase.is_loading() {
                    self.phase = Phase::settled(self.phase.editing());
                }
                FetchOutcome::Applied
            }
            Err(e) => {
                warn!("{} list: fetch failed: {}", D::Record::NAME, e);
                self.report(format!("Error fetching {}s: {}", D::Record::NAME, e));
                FetchOutcome::Failed
            }
        }
    }

    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket> {
        if self.phase.is_submitting() || page == self.query.page {
            return None;
        }
        if self.total_pages > 0 && page >= self.total_pages {
            return None;
        }
        self.query.page = page;
        self.begin_fetch()
    }

    pub fn set_sort_field(&mut self, field: SortField) -> Option<FetchTicket> {
        let current = self.query.sort?;
        if current.field == field {
            return None;
        }
        self.resort(Sort { field, ..current })
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> Option<FetchTicket> {
        let current = self.query.sort?;
        if current.order == order {
            return None;
        }
        self.resort(Sort { order, ..current })
    }

    fn resort(&mut self, sort: Sort) -> Option<FetchTicket> {
        if self.phase.is_submitting() {
            return None;
        }
        self.query.sort = Some(sort);
        self.query.page = 0;
        self.begin_fetch()
    }

    // ========================
    // Form
    // ========================

    /// Fill the draft from a listed row. The row being deleted can't be edited.
    pub fn begin_edit(&mut self, id: u32) -> bool {
        if self.phase.is_submitting() || self.deleting == Some(id) {
            return false;
        }
        let Some(record) = self.items.iter().find(|r| r.id() == id) else {
            return false;
        };
        self.draft = D::from_record(record);
        self.violations.clear();
        self.phase = match self.phase {
            Phase::Loading { .. } => Phase::Loading { editing: Some(id) },
            _ => Phase::Editing { id },
        };
        true
    }

    pub fn is_editing(&self, id: u32) -> bool {
        self.phase.editing() == Some(id)
    }

    pub fn edit_draft(&mut self, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
    }

    /// Reset the draft and leave edit mode. Refused while a create/update is in flight.
    pub fn clear_form(&mut self) -> bool {
        if self.phase.is_submitting() {
            return false;
        }
        self.draft = D::default();
        self.violations.clear();
        self.background_error = None;
        self.phase = match self.phase {
            Phase::Loading { .. } => Phase::Loading { editing: None },
            _ => Phase::Idle,
        };
        true
    }

    /// Submit button state: no create/update in flight and no required field left blank
    pub fn can_submit(&self) -> bool {
        !self.phase.is_submitting() && is_complete(&self.draft.validate())
    }

    pub fn begin_submit(&mut self) -> Result<Submission<D>, SubmitBlocked> {
        if self.phase.is_submitting() {
            return Err(SubmitBlocked::Busy);
        }
        let violations = self.draft.validate();
        if !violations.is_empty() {
            self.violations = violations.clone();
            return Err(SubmitBlocked::Invalid(violations));
        }
        self.violations.clear();
        self.background_error = None;

        let editing = self.phase.editing();
        let action = match editing {
            Some(id) => Action::Update(id),
            None => Action::Create,
        };
        self.phase = Phase::Submitting { action, editing };
        Ok(Submission {
            action,
            draft: self.draft.clone(),
        })
    }

    /// Completes a create/update. Success clears the form and returns the refresh ticket.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Option<FetchTicket> {
        let Phase::Submitting { action, editing } = self.phase.clone() else {
            return None;
        };
        match result {
            Ok(()) => {
                self.draft = D::default();
                self.violations.clear();
                Some(self.start_loading(None))
            }
            Err(e) => {
                self.fail(action, editing, &e);
                None
            }
        }
    }

    // ========================
    // Deletion
    // ========================

    /// One deletion at a time; every delete control waits for it
    pub fn can_delete(&self) -> bool {
        self.deleting.is_none()
    }

    pub fn is_deleting(&self, id: u32) -> bool {
        self.deleting == Some(id)
    }

    pub fn begin_delete(&mut self, id: u32) -> bool {
        if !self.can_delete() || !self.items.iter().any(|r| r.id() == id) {
            return false;
        }
        self.deleting = Some(id);
        self.background_error = None;
        true
    }

    /// Completes a delete. Success re-fetches the current page.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> Option<FetchTicket> {
        let id = self.deleting.take()?;
        match result {
            Ok(()) => {
                let editing = self.phase.editing();
                if editing == Some(id) && !self.phase.is_submitting() {
                    self.draft = D::default();
                    self.violations.clear();
                    return Some(self.start_loading(None));
                }
                Some(self.refresh(editing))
            }
            Err(e) => {
                warn!("{} list: {} failed: {}", D::Record::NAME, Action::Delete(id), e);
                self.report(format!("Error {} {}: {}", Action::Delete(id), D::Record::NAME, e));
                None
            }
        }
    }

    fn fail(&mut self, action: Action, editing: Option<u32>, error: &ApiError) {
        warn!("{} list: {} failed: {}", D::Record::NAME, action, error);
        self.phase = Phase::Failed {
            message: format!("Error {} {}: {}", action, D::Record::NAME, error),
            editing,
        };
    }

    /// Show a failure without clobbering a write in flight or an error already on screen
    fn report(&mut self, message: String) {
        if matches!(self.phase, Phase::Submitting { .. } | Phase::Failed { .. }) {
            self.background_error = Some(message);
            return;
        }
        let editing = self.phase.editing();
        self.phase = Phase::Failed { message, editing };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Client;
    use crate::validation::ClientDraft;

    type Clients = ListFormController<ClientDraft>;

    fn client(id: u32, name: &str) -> Client {
        Client {
            id,
            name: name.to_string(),
            email: format!("{}@bank.com", name.to_lowercase()),
            age: 30,
            account_number: format!("ACC-{}", id),
        }
    }

    fn page(ids: &[u32], total_pages: u32) -> Page<Client> {
        Page {
            content: ids.iter().map(|id| client(*id, &format!("Client{}", id))).collect(),
            total_pages,
        }
    }

    fn loaded(ids: &[u32]) -> Clients {
        let mut ctrl = Clients::new(PageQuery::sorted(5, Sort::default()));
        let ticket = ctrl.begin_fetch().unwrap();
        assert_eq!(ctrl.finish_fetch(ticket, Ok(page(ids, 3))), FetchOutcome::Applied);
        ctrl
    }

    fn fill_valid(ctrl: &mut Clients) {
        ctrl.edit_draft(|d| {
            d.name = "Dora".into();
            d.email = "dora@bank.com".into();
            d.age = 44;
            d.account_number = "9001".into();
        });
    }

    fn server_error() -> ApiError {
        ApiError::Status { status: 500, body: None }
    }

    #[test]
    fn test_mount_fetch_replaces_collection() {
        let mut ctrl = Clients::new(PageQuery::sorted(5, Sort::default()));
        let ticket = ctrl.begin_fetch().unwrap();
        assert_eq!(ctrl.phase(), &Phase::Loading { editing: None });

        ctrl.finish_fetch(ticket, Ok(page(&[1, 2, 3], 4)));
        assert_eq!(ctrl.items().len(), 3);
        assert_eq!(ctrl.total_pages(), 4);
        assert_eq!(ctrl.phase(), &Phase::Idle);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut ctrl = loaded(&[1, 2]);
        let first = ctrl.set_page(1).unwrap();
        let second = ctrl.set_page(2).unwrap();

        assert_eq!(ctrl.finish_fetch(second, Ok(page(&[11, 12], 3))), FetchOutcome::Applied);
        assert_eq!(ctrl.finish_fetch(first, Ok(page(&[6, 7], 3))), FetchOutcome::Stale);

        let ids: Vec<u32> = ctrl.items().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![11, 12]);
        assert_eq!(ctrl.query().page, 2);
    }

    #[test]
    fn test_refetch_same_page_is_idempotent() {
        let mut ctrl = loaded(&[1, 2, 3]);
        let before = ctrl.items().to_vec();
        let ticket = ctrl.begin_fetch().unwrap();
        ctrl.finish_fetch(ticket, Ok(page(&[1, 2, 3], 3)));
        assert_eq!(ctrl.items(), before.as_slice());
    }

    #[test]
    fn test_fetch_failure_keeps_previous_items() {
        let mut ctrl = loaded(&[1, 2]);
        let ticket = ctrl.begin_fetch().unwrap();
        assert_eq!(ctrl.finish_fetch(ticket, Err(server_error())), FetchOutcome::Failed);
        assert_eq!(ctrl.items().len(), 2);
        assert!(ctrl.phase().error().unwrap().starts_with("Error fetching clients"));
    }

    #[test]
    fn test_page_past_end_falls_back_to_last_page() {
        let mut ctrl = loaded(&[1]);
        ctrl.set_page(2).unwrap();
        let ticket = ctrl.begin_fetch().unwrap();
        let outcome = ctrl.finish_fetch(ticket, Ok(page(&[], 2)));
        let FetchOutcome::Refetch(next) = outcome else {
            panic!("expected refetch, got {:?}", outcome);
        };
        assert_eq!(ctrl.query().page, 1);
        assert_eq!(ctrl.finish_fetch(next, Ok(page(&[6], 2))), FetchOutcome::Applied);
    }

    #[test]
    fn test_sort_change_resets_page_and_fetches() {
        let mut ctrl = loaded(&[1]);
        ctrl.set_page(1).unwrap();
        assert!(ctrl.set_sort_field(SortField::Id).is_none());
        assert!(ctrl.set_sort_field(SortField::Name).is_some());
        assert!(ctrl.set_sort_order(SortOrder::Desc).is_some());

        let query = ctrl.query();
        assert_eq!(query.page, 0);
        assert_eq!(
            query.query_pairs(),
            vec![
                ("page", "0".to_string()),
                ("size", "5".to_string()),
                ("sortField", "name".to_string()),
                ("sortOrder", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_unsorted_query_pairs() {
        assert_eq!(
            PageQuery::new(5).query_pairs(),
            vec![("page", "0".to_string()), ("size", "5".to_string())]
        );
    }

    #[test]
    fn test_invalid_submit_is_blocked_with_all_messages() {
        let mut ctrl = loaded(&[1]);
        ctrl.edit_draft(|d| {
            d.name = "A".into();
            d.email = "bad".into();
        });
        let Err(SubmitBlocked::Invalid(violations)) = ctrl.begin_submit() else {
            panic!("submit should be blocked");
        };
        assert_eq!(violations.len(), 4);
        assert_eq!(ctrl.violations().len(), 4);
        assert_eq!(ctrl.phase(), &Phase::Idle);
    }

    #[test]
    fn test_create_submit_clears_form_and_refreshes() {
        let mut ctrl = loaded(&[1]);
        assert!(!ctrl.can_submit());
        fill_valid(&mut ctrl);
        assert!(ctrl.can_submit());

        let submission = ctrl.begin_submit().unwrap();
        assert_eq!(submission.action, Action::Create);
        assert_eq!(submission.draft.to_client(0).name, "Dora");
        assert!(!ctrl.can_submit());

        let ticket = ctrl.finish_submit(Ok(())).unwrap();
        assert_eq!(ctrl.draft(), &ClientDraft::default());

        let mut refreshed = page(&[1], 1);
        refreshed.content.push(client(2, "Dora"));
        ctrl.finish_fetch(ticket, Ok(refreshed));
        assert!(ctrl.items().iter().any(|c| c.name == "Dora"));
        assert_eq!(ctrl.phase(), &Phase::Idle);
    }

    #[test]
    fn test_edit_then_update() {
        let mut ctrl = loaded(&[1, 2]);
        assert!(ctrl.begin_edit(2));
        assert_eq!(ctrl.phase(), &Phase::Editing { id: 2 });
        assert_eq!(ctrl.draft().name, "Client2");

        ctrl.edit_draft(|d| d.name = "Renamed".into());
        let submission = ctrl.begin_submit().unwrap();
        assert_eq!(submission.action, Action::Update(2));
        assert!(ctrl.finish_submit(Ok(())).is_some());
        assert_eq!(ctrl.phase().editing(), None);
    }

    #[test]
    fn test_failed_submit_keeps_draft_and_edit_target() {
        let mut ctrl = loaded(&[1, 2]);
        ctrl.begin_edit(1);
        ctrl.edit_draft(|d| d.age = 77);
        ctrl.begin_submit().unwrap();

        assert!(ctrl.finish_submit(Err(server_error())).is_none());
        assert_eq!(ctrl.draft().age, 77);
        assert_eq!(ctrl.phase().editing(), Some(1));
        assert!(ctrl.phase().error().unwrap().starts_with("Error updating client"));

        let retry = ctrl.begin_submit().unwrap();
        assert_eq!(retry.action, Action::Update(1));
    }

    #[test]
    fn test_clear_form_leaves_edit_mode() {
        let mut ctrl = loaded(&[1]);
        ctrl.begin_edit(1);
        assert!(ctrl.clear_form());
        assert_eq!(ctrl.phase(), &Phase::Idle);
        assert_eq!(ctrl.draft(), &ClientDraft::default());
    }

    #[test]
    fn test_edit_unknown_row_is_ignored() {
        let mut ctrl = loaded(&[1]);
        assert!(!ctrl.begin_edit(99));
        assert_eq!(ctrl.phase(), &Phase::Idle);
    }

    #[test]
    fn test_second_delete_rejected_while_first_in_flight() {
        let mut ctrl = loaded(&[3, 7]);
        assert!(ctrl.begin_delete(3));
        assert!(ctrl.is_deleting(3));
        assert!(!ctrl.is_deleting(7));
        assert!(!ctrl.can_delete());
        assert!(!ctrl.begin_delete(7));

        assert!(ctrl.finish_delete(Ok(())).is_some());
        assert!(ctrl.can_delete());
        assert!(ctrl.begin_delete(7));
    }

    #[test]
    fn test_delete_refetches_instead_of_filtering() {
        let mut ctrl = loaded(&[3, 7]);
        ctrl.begin_delete(3);
        let ticket = ctrl.finish_delete(Ok(())).unwrap();
        assert_eq!(ctrl.items().len(), 2);
        assert!(ctrl.phase().is_loading());

        ctrl.finish_fetch(ticket, Ok(page(&[7, 8], 2)));
        let ids: Vec<u32> = ctrl.items().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[test]
    fn test_deleting_the_edited_row_clears_the_form() {
        let mut ctrl = loaded(&[3, 7]);
        ctrl.begin_edit(3);
        ctrl.begin_delete(3);
        ctrl.finish_delete(Ok(())).unwrap();
        assert_eq!(ctrl.phase(), &Phase::Loading { editing: None });
        assert_eq!(ctrl.draft(), &ClientDraft::default());
    }

    #[test]
    fn test_failed_delete_surfaces_error() {
        let mut ctrl = loaded(&[3]);
        ctrl.begin_delete(3);
        assert!(ctrl.finish_delete(Err(ApiError::Network("offline".into()))).is_none());
        assert_eq!(ctrl.items().len(), 1);
        assert!(ctrl.phase().error().unwrap().contains("offline"));
        assert!(ctrl.can_delete());
    }

    #[test]
    fn test_navigation_refused_while_saving() {
        let mut ctrl = loaded(&[1]);
        fill_valid(&mut ctrl);
        ctrl.begin_submit().unwrap();

        assert!(ctrl.set_page(1).is_none());
        assert!(ctrl.set_sort_order(SortOrder::Desc).is_none());
        assert!(ctrl.begin_fetch().is_none());
        assert!(!ctrl.begin_edit(1));
        assert!(!ctrl.clear_form());
        assert!(matches!(ctrl.begin_submit(), Err(SubmitBlocked::Busy)));
    }

    #[test]
    fn test_other_rows_stay_interactive_during_delete() {
        let mut ctrl = loaded(&[3, 7]);
        assert!(ctrl.begin_delete(3));

        assert!(!ctrl.begin_edit(3));
        assert!(ctrl.begin_edit(7));
        assert_eq!(ctrl.draft().name, "Client7");
        assert!(!ctrl.can_delete());

        let page_ticket = ctrl.set_page(1).unwrap();
        assert!(ctrl.set_sort_field(SortField::Age).is_some());
        assert_eq!(ctrl.query().page, 0);
        assert!(ctrl.is_deleting(3));

        let refresh = ctrl.finish_delete(Ok(())).unwrap();
        assert_eq!(ctrl.finish_fetch(page_ticket, Ok(page(&[9], 3))), FetchOutcome::Stale);
        assert_eq!(ctrl.finish_fetch(refresh, Ok(page(&[7], 3))), FetchOutcome::Applied);
        assert_eq!(ctrl.phase(), &Phase::Editing { id: 7 });
        assert!(ctrl.can_delete());
    }

    #[test]
    fn test_delete_allowed_while_saving() {
        let mut ctrl = loaded(&[3, 7]);
        fill_valid(&mut ctrl);
        ctrl.begin_submit().unwrap();
        assert!(ctrl.can_delete());
        assert!(ctrl.begin_delete(7));

        let background = ctrl.finish_delete(Ok(())).unwrap();
        assert!(ctrl.phase().is_submitting());

        let refresh = ctrl.finish_submit(Ok(())).unwrap();
        assert_eq!(ctrl.finish_fetch(background, Ok(page(&[3], 1))), FetchOutcome::Stale);
        assert_eq!(ctrl.finish_fetch(refresh, Ok(page(&[3, 8], 1))), FetchOutcome::Applied);
        assert_eq!(ctrl.phase(), &Phase::Idle);
    }

    #[test]
    fn test_fetch_failure_during_save_is_shown() {
        let mut ctrl = Clients::new(PageQuery::sorted(5, Sort::default()));
        let ticket = ctrl.begin_fetch().unwrap();
        fill_valid(&mut ctrl);
        ctrl.begin_submit().unwrap();

        assert_eq!(ctrl.finish_fetch(ticket, Err(server_error())), FetchOutcome::Failed);
        assert!(ctrl.phase().is_submitting());
        assert!(ctrl.error().unwrap().starts_with("Error fetching clients"));

        ctrl.finish_submit(Err(ApiError::Network("offline".into())));
        let shown = ctrl.error().unwrap();
        assert!(shown.starts_with("Error creating client"));
        assert!(shown.contains("Error fetching clients"));

        ctrl.begin_fetch().unwrap();
        assert_eq!(ctrl.error(), None);
    }

    #[test]
    fn test_delete_failure_during_save_is_shown() {
        let mut ctrl = loaded(&[3]);
        fill_valid(&mut ctrl);
        ctrl.begin_submit().unwrap();
        ctrl.begin_delete(3);

        assert!(ctrl.finish_delete(Err(server_error())).is_none());
        assert!(ctrl.phase().is_submitting());
        assert!(ctrl.error().unwrap().starts_with("Error deleting client"));
    }

    #[test]
    fn test_transaction_create_resets_draft_and_refreshes() {
        use crate::models::{Transaction, TransactionType};
        use crate::validation::TransactionDraft;

        let tx = |id: u32| Transaction {
            id,
            client_id: 1,
            kind: TransactionType::Debit,
            amount: 10.0,
            transaction_date: "2024-05-01T12:00:00.000Z".into(),
        };
        let mut ctrl = ListFormController::<TransactionDraft>::new(PageQuery::new(5));
        let ticket = ctrl.begin_fetch().unwrap();
        ctrl.finish_fetch(ticket, Ok(Page { content: vec![tx(1)], total_pages: 1 }));

        ctrl.edit_draft(|d| {
            d.client_id = 1;
            d.kind = "Credit".into();
            d.amount = "25.50".into();
        });
        assert!(ctrl.can_submit());
        let submission = ctrl.begin_submit().unwrap();
        assert_eq!(submission.action, Action::Create);
        let body = submission.draft.to_new_transaction("2024-05-02T08:00:00.000Z".into()).unwrap();
        assert_eq!(body.kind, TransactionType::Credit);

        let refresh = ctrl.finish_submit(Ok(())).unwrap();
        assert_eq!(ctrl.draft(), &TransactionDraft::default());
        assert_eq!(ctrl.phase(), &Phase::Loading { editing: None });

        let outcome = ctrl.finish_fetch(refresh, Ok(Page { content: vec![tx(1), tx(2)], total_pages: 1 }));
        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(ctrl.items().len(), 2);
        assert_eq!(ctrl.phase(), &Phase::Idle);
    }

    #[test]
    fn test_page_beyond_server_total_is_refused() {
        let mut ctrl = loaded(&[1]);
        assert!(ctrl.set_page(3).is_none());
        assert!(ctrl.set_page(2).is_some());
    }
}
