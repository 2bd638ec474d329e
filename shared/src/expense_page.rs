//! State behind the planned-expenses page: the canonical rows, the table view,
//! the status toggle flow and the fetch guard that keeps budget switches from
//! racing each other.

use log::{debug, info};

use crate::error::{ApiError, ToggleError};
use crate::fetch_guard::{FetchGuard, FetchTicket};
use crate::planned_expense::PlannedExpenseRow;
use crate::session::{SessionContext, SessionStore};
use crate::status_toggle::{StatusToggleFlow, ToggleNotice, ToggleTarget};
use crate::table::{total_pages, SortKey, TableView};

#[derive(Debug, Clone, Default)]
pub struct ExpensePage {
    rows: Vec<PlannedExpenseRow>,
    view: TableView,
    flow: StatusToggleFlow,
    guard: FetchGuard,
    loading: bool,
}

impl ExpensePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[PlannedExpenseRow] {
        &self.rows
    }

    pub fn view(&self) -> TableView {
        self.view
    }

    pub fn flow(&self) -> &StatusToggleFlow {
        &self.flow
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.rows.len())
    }

    /// Rows of the current page with their `lp` numbers.
    pub fn visible(&self) -> Vec<(usize, PlannedExpenseRow)> {
        self.view.visible(&self.rows)
    }

    /// Start a row fetch for `budget_id`. Switching to another budget sends the
    /// table back to its first page.
    pub fn begin_fetch(&mut self, budget_id: i64) -> FetchTicket {
        if self.guard.selected() != Some(budget_id) {
            self.view.page = 1;
        }
        self.loading = true;
        self.guard.issue(budget_id)
    }

    /// Apply a settled row fetch.
    ///
    /// Returns `None` for a stale response (discarded unseen), otherwise the
    /// outcome. Success replaces the rows wholesale; failure keeps the rows
    /// already on screen.
    pub fn finish_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<PlannedExpenseRow>, ApiError>,
    ) -> Option<Result<(), ApiError>> {
        let result = self.guard.admit(ticket, result)?;
        self.loading = false;
        match result {
            Ok(rows) => {
                info!("Loaded {} planned expense(s) for budget {}", rows.len(), ticket.budget_id);
                self.rows = rows;
                self.view.clamp_to(self.rows.len());
                Some(Ok(()))
            }
            Err(err) => Some(Err(err)),
        }
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.view.toggle_sort(key);
    }

    pub fn set_page(&mut self, page: usize) {
        self.view.set_page(page, self.rows.len());
    }

    /// Open the confirmation for the row with `id`.
    pub fn request_toggle(&mut self, id: i64) -> Result<(), ToggleError> {
        match self.rows.iter().find(|row| row.id == id) {
            Some(row) => self.flow.select(row),
            None => {
                debug!("Ignoring toggle request for unknown expense {}", id);
                Err(ToggleError::NothingToConfirm)
            }
        }
    }

    pub fn confirm_toggle(&mut self) -> Result<ToggleTarget, ToggleError> {
        self.flow.confirm()
    }

    pub fn cancel_toggle(&mut self) -> bool {
        self.flow.cancel()
    }

    pub fn settle_toggle<S: SessionStore>(
        &mut self,
        result: Result<(), ApiError>,
        session: &SessionContext<S>,
    ) -> Result<ToggleNotice, ToggleError> {
        self.flow.settle(result, &mut self.rows, session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planned_expense::{normalize_planned_expenses, ExpenseStatus};
    use crate::session::MemorySessionStore;
    use crate::status_toggle::TogglePhase;
    use serde_json::json;

    fn rows(count: i64) -> Vec<PlannedExpenseRow> {
        let records: Vec<serde_json::Value> = (1..=count).map(|id| json!({"id": id, "amount": id})).collect();
        normalize_planned_expenses(&serde_json::Value::Array(records))
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut page = ExpensePage::new();
        let slow = page.begin_fetch(1);
        let fast = page.begin_fetch(2);

        assert_eq!(page.finish_fetch(&fast, Ok(rows(3))), Some(Ok(())));
        assert_eq!(page.finish_fetch(&slow, Ok(rows(10))), None);
        assert_eq!(page.rows().len(), 3);
        assert!(!page.is_loading());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_rows() {
        let mut page = ExpensePage::new();
        let ticket = page.begin_fetch(1);
        page.finish_fetch(&ticket, Ok(rows(2)));

        let ticket = page.begin_fetch(1);
        let outcome = page.finish_fetch(&ticket, Err(ApiError::Network("offline".into())));
        assert_eq!(outcome, Some(Err(ApiError::Network("offline".into()))));
        assert_eq!(page.rows().len(), 2);
    }

    #[test]
    fn test_budget_switch_resets_page_and_refetch_clamps() {
        let mut page = ExpensePage::new();
        let ticket = page.begin_fetch(1);
        page.finish_fetch(&ticket, Ok(rows(17)));
        page.set_page(3);
        assert_eq!(page.view().page, 3);
        assert_eq!(page.visible().len(), 1);

        let ticket = page.begin_fetch(1);
        page.finish_fetch(&ticket, Ok(rows(9)));
        assert_eq!(page.view().page, 2);

        page.begin_fetch(2);
        assert_eq!(page.view().page, 1);
    }

    #[test]
    fn test_toggle_round_trip_through_page() {
        let session = SessionContext::new(MemorySessionStore::new());
        let mut page = ExpensePage::new();
        let ticket = page.begin_fetch(1);
        page.finish_fetch(&ticket, Ok(rows(2)));

        assert_eq!(page.request_toggle(99), Err(ToggleError::NothingToConfirm));
        page.request_toggle(2).unwrap();
        let target = page.confirm_toggle().unwrap();
        assert_eq!(target.id, 2);
        assert!(!page.cancel_toggle());

        let notice = page.settle_toggle(Ok(()), &session).unwrap();
        assert!(matches!(notice, ToggleNotice::Success(_)));
        assert_eq!(page.rows()[1].status, ExpenseStatus::Paused);
        assert_eq!(page.flow().phase(), &TogglePhase::Idle);
    }

    #[test]
    fn test_refetch_during_commit_keeps_confirmed_status() {
        let session = SessionContext::new(MemorySessionStore::new());
        let mut page = ExpensePage::new();
        let ticket = page.begin_fetch(1);
        page.finish_fetch(&ticket, Ok(rows(3)));

        page.request_toggle(3).unwrap();
        page.confirm_toggle().unwrap();

        // The backend already applied the pause when the refresh answers
        let ticket = page.begin_fetch(1);
        let refreshed = normalize_planned_expenses(&json!([{"id": 3, "status": 2}]));
        page.finish_fetch(&ticket, Ok(refreshed));

        page.settle_toggle(Ok(()), &session).unwrap();
        assert_eq!(page.rows()[0].status, ExpenseStatus::Paused);
    }

    #[test]
    fn test_sort_toggle_goes_back_to_first_page() {
        let mut page = ExpensePage::new();
        let ticket = page.begin_fetch(1);
        page.finish_fetch(&ticket, Ok(rows(17)));
        page.set_page(2);
        page.toggle_sort(SortKey::Amount);
        page.toggle_sort(SortKey::Amount);
        assert_eq!(page.view().page, 1);
        assert_eq!(page.visible()[0].1.id, 17);
        assert_eq!(page.total_pages(), 3);
    }
}
