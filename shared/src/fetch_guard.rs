//! Request-generation guard for budget-keyed fetches.
//!
//! Switching budgets issues new fetches while older ones may still be in
//! flight. Every fetch carries a [`FetchTicket`]; only the newest ticket for
//! the currently selected budget may write its result.

use log::debug;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub budget_id: i64,
    generation: u64,
}

/// One guard per independently fetched resource (rows, notifications, ...).
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    selected: Option<i64>,
    generation: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// Tag a new fetch for `budget_id`, which becomes the current selection.
    /// Any ticket issued earlier is invalidated.
    pub fn issue(&mut self, budget_id: i64) -> FetchTicket {
        self.selected = Some(budget_id);
        self.generation = self.generation.wrapping_add(1);
        FetchTicket {
            budget_id,
            generation: self.generation,
        }
    }

    /// Drop the selection; every outstanding ticket becomes stale.
    pub fn reset(&mut self) {
        self.selected = None;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn accepts(&self, ticket: &FetchTicket) -> bool {
        self.selected == Some(ticket.budget_id) && self.generation == ticket.generation
    }

    /// Pass `value` through when the ticket is still current, discard it otherwise.
    pub fn admit<T>(&self, ticket: &FetchTicket, value: T) -> Option<T> {
        if self.accepts(ticket) {
            Some(value)
        } else {
            debug!(
                "Discarding stale response for budget {} (current selection: {:?})",
                ticket.budget_id, self.selected
            );
            None
        }
    }
}

/// A budget-keyed list (notifications, team members) with its own guard and
/// loading flag.
#[derive(Debug, Clone)]
pub struct GuardedList<T> {
    items: Vec<T>,
    guard: FetchGuard,
    loading: bool,
}

impl<T> Default for GuardedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            guard: FetchGuard::default(),
            loading: false,
        }
    }
}

impl<T> GuardedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin(&mut self, budget_id: i64) -> FetchTicket {
        self.loading = true;
        self.guard.issue(budget_id)
    }

    /// Apply a settled fetch. `None` for a stale one; failure keeps the items.
    pub fn finish(&mut self, ticket: &FetchTicket, result: Result<Vec<T>, ApiError>) -> Option<Result<(), ApiError>> {
        let result = self.guard.admit(ticket, result)?;
        self.loading = false;
        Some(result.map(|items| self.items = items))
    }

    /// No budget selected: drop the items and anything still in flight.
    pub fn clear(&mut self) {
        self.guard.reset();
        self.items.clear();
        self.loading = false;
    }
}
