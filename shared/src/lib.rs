//! Typed core of the budget planner frontend.
//!
//! Backend payloads enter through the normalizers in [`planned_expense`],
//! [`notification`] and [`budget`]; everything downstream works on canonical,
//! fully-typed rows.

pub mod budget;
pub mod error;
pub mod expense_page;
pub mod fetch_guard;
pub mod format;
pub mod notification;
pub mod planned_expense;
pub mod raw;
pub mod session;
pub mod status_toggle;
pub mod table;

use serde::{Deserialize, Serialize};

pub use budget::{normalize_budgets, normalize_team_members, resolve_selected_budget, BudgetOption, TeamMemberRow, TeamRole};
pub use error::{ApiError, ToggleError};
pub use expense_page::ExpensePage;
pub use fetch_guard::{FetchGuard, FetchTicket, GuardedList};
pub use notification::{format_notification, normalize_notifications, NotificationRow};
pub use planned_expense::{normalize_planned_expenses, ExpenseKind, ExpenseStatus, PlannedExpenseRow};
pub use session::{MemorySessionStore, SessionContext, SessionStore};
pub use status_toggle::{StatusToggleFlow, ToggleNotice, TogglePhase, ToggleTarget};
pub use table::{SortDirection, SortKey, TableView, PAGE_SIZE};

/// Body of the "search transactions" request for one budget's planned and
/// recurring expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTransactionsRequest {
    pub budget_id: i64,
    /// Only planned/recurring entries, not booked transactions
    pub planned_only: bool,
}

impl SearchTransactionsRequest {
    pub fn planned_for(budget_id: i64) -> Self {
        Self {
            budget_id,
            planned_only: true,
        }
    }
}

/// Body of the "toggle expense status" request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleExpenseStatusRequest {
    pub expense_id: i64,
}

/// Client-side log record forwarded to the backend log collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientLogRecord {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}
