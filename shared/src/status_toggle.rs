//! Confirm-then-commit flow for pausing and resuming a planned expense.
//!
//! `Idle -> Confirming -> Committing -> (Idle | Confirming with error)`, with a
//! terminal `SessionExpired` phase when the backend rejects the session.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ToggleError};
use crate::planned_expense::{set_status_by_id, ExpenseStatus, PlannedExpenseRow};
use crate::session::{SessionContext, SessionStore};

const TOGGLE_FAILED_MESSAGE: &str = "Nie udało się zmienić statusu wydatku.";

/// The row captured when the user opened the confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleTarget {
    pub id: i64,
    pub description: String,
    pub current_status: ExpenseStatus,
}

impl ToggleTarget {
    pub fn from_row(row: &PlannedExpenseRow) -> Self {
        Self {
            id: row.id,
            description: row.description.clone(),
            current_status: row.status,
        }
    }

    pub fn next_status(&self) -> ExpenseStatus {
        self.current_status.toggled()
    }

    /// Question shown in the confirmation dialog.
    pub fn prompt(&self) -> String {
        match self.current_status {
            ExpenseStatus::Active => format!("Czy na pewno chcesz wstrzymać wydatek „{}”?", self.description),
            ExpenseStatus::Paused => format!("Czy na pewno chcesz wznowić wydatek „{}”?", self.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TogglePhase {
    #[default]
    Idle,
    Confirming {
        target: ToggleTarget,
        error: Option<String>,
    },
    Committing {
        target: ToggleTarget,
    },
    SessionExpired,
}

/// What the UI should tell the user after a commit settles.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleNotice {
    Success(String),
    Error(String),
    /// Token cleared; the caller leaves the page for the login screen.
    SessionExpired,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusToggleFlow {
    phase: TogglePhase,
}

impl StatusToggleFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &TogglePhase {
        &self.phase
    }

    pub fn target(&self) -> Option<&ToggleTarget> {
        match &self.phase {
            TogglePhase::Confirming { target, .. } | TogglePhase::Committing { target } => Some(target),
            TogglePhase::Idle | TogglePhase::SessionExpired => None,
        }
    }

    /// The confirmation dialog is shown while confirming or committing.
    pub fn is_open(&self) -> bool {
        self.target().is_some()
    }

    pub fn is_committing(&self) -> bool {
        matches!(self.phase, TogglePhase::Committing { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            TogglePhase::Confirming { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// `Idle -> Confirming`: capture the row and its current status.
    pub fn select(&mut self, row: &PlannedExpenseRow) -> Result<(), ToggleError> {
        match self.phase {
            TogglePhase::Idle => {
                debug!("Status toggle requested for expense {}", row.id);
                self.phase = TogglePhase::Confirming {
                    target: ToggleTarget::from_row(row),
                    error: None,
                };
                Ok(())
            }
            TogglePhase::Confirming { .. } | TogglePhase::Committing { .. } => {
                Err(ToggleError::SelectionInProgress)
            }
            TogglePhase::SessionExpired => Err(ToggleError::SessionExpired),
        }
    }

    /// `Confirming -> Committing`. Returns the target whose status must be
    /// flipped by the backend. Re-submission while committing is rejected.
    pub fn confirm(&mut self) -> Result<ToggleTarget, ToggleError> {
        match std::mem::take(&mut self.phase) {
            TogglePhase::Confirming { target, .. } => {
                debug!("Committing status toggle for expense {}", target.id);
                self.phase = TogglePhase::Committing { target: target.clone() };
                Ok(target)
            }
            phase => {
                let err = match phase {
                    TogglePhase::Committing { .. } => ToggleError::CommitInFlight,
                    TogglePhase::SessionExpired => ToggleError::SessionExpired,
                    _ => ToggleError::NothingToConfirm,
                };
                self.phase = phase;
                Err(err)
            }
        }
    }

    /// Abandon the selection. Only honoured while confirming; returns whether
    /// the flow went back to idle.
    pub fn cancel(&mut self) -> bool {
        match self.phase {
            TogglePhase::Confirming { .. } => {
                self.phase = TogglePhase::Idle;
                true
            }
            TogglePhase::Committing { .. } => {
                debug!("Ignoring cancel while a status change is in flight");
                false
            }
            TogglePhase::Idle | TogglePhase::SessionExpired => false,
        }
    }

    /// Apply the backend's answer to the in-flight commit.
    ///
    /// Success sets the matching row in `rows` to the confirmed status; failure keeps the rows and
    /// reopens the confirmation with the error; `Unauthorized` clears the
    /// session token and ends the flow.
    pub fn settle<S: SessionStore>(
        &mut self,
        result: Result<(), ApiError>,
        rows: &mut [PlannedExpenseRow],
        session: &SessionContext<S>,
    ) -> Result<ToggleNotice, ToggleError> {
        let target = match std::mem::take(&mut self.phase) {
            TogglePhase::Committing { target } => target,
            phase => {
                self.phase = phase;
                return Err(ToggleError::NotCommitting);
            }
        };

        match result {
            Ok(()) => {
                // The backend applied the flip of the status seen at select
                // time; a refetch during the commit may already carry it.
                let status = target.next_status();
                if !set_status_by_id(rows, target.id, status) {
                    debug!("Expense {} no longer loaded after status change", target.id);
                }
                self.phase = TogglePhase::Idle;
                Ok(ToggleNotice::Success(format!(
                    "Status wydatku „{}” zmieniono na: {}.",
                    target.description,
                    status.label().to_lowercase()
                )))
            }
            Err(ApiError::Unauthorized) => {
                warn!("Session rejected while toggling expense {}", target.id);
                session.clear_token();
                self.phase = TogglePhase::SessionExpired;
                Ok(ToggleNotice::SessionExpired)
            }
            Err(err) => {
                warn!("Status toggle for expense {} failed: {}", target.id, err);
                let message = err.user_message(TOGGLE_FAILED_MESSAGE);
                self.phase = TogglePhase::Confirming {
                    target,
                    error: Some(message.clone()),
                };
                Ok(ToggleNotice::Error(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planned_expense::normalize_planned_expenses;
    use crate::session::MemorySessionStore;
    use serde_json::json;

    fn rows() -> Vec<PlannedExpenseRow> {
        normalize_planned_expenses(&json!([
            {"id": 1, "title": "Czynsz", "status": 1},
            {"id": 2, "title": "Siłownia", "status": 2}
        ]))
    }

    fn session() -> SessionContext<MemorySessionStore> {
        let session = SessionContext::new(MemorySessionStore::new());
        session.set_token("token");
        session
    }

    #[test]
    fn test_successful_toggle_pauses_row() {
        let mut rows = rows();
        let session = session();
        let mut flow = StatusToggleFlow::new();

        flow.select(&rows[0]).unwrap();
        assert!(flow.is_open());
        let target = flow.confirm().unwrap();
        assert_eq!(target.id, 1);
        assert!(flow.is_committing());

        let notice = flow.settle(Ok(()), &mut rows, &session).unwrap();
        assert!(matches!(notice, ToggleNotice::Success(_)));
        assert_eq!(rows[0].status, ExpenseStatus::Paused);
        assert_eq!(rows[1].status, ExpenseStatus::Paused);
        assert_eq!(flow.phase(), &TogglePhase::Idle);
    }

    #[test]
    fn test_forbidden_keeps_row_and_stays_confirming() {
        let mut rows = rows();
        let session = session();
        let mut flow = StatusToggleFlow::new();

        flow.select(&rows[0]).unwrap();
        flow.confirm().unwrap();
        let failure = ApiError::Status { status: 403, detail: None };
        let notice = flow.settle(Err(failure), &mut rows, &session).unwrap();

        assert_eq!(notice, ToggleNotice::Error(TOGGLE_FAILED_MESSAGE.to_string()));
        assert_eq!(rows[0].status, ExpenseStatus::Active);
        assert_eq!(flow.error(), Some(TOGGLE_FAILED_MESSAGE));
        assert_eq!(flow.target().map(|target| target.id), Some(1));
        assert!(session.is_authenticated());

        // The user may retry from the reopened confirmation.
        flow.confirm().unwrap();
        flow.settle(Ok(()), &mut rows, &session).unwrap();
        assert_eq!(rows[0].status, ExpenseStatus::Paused);
    }

    #[test]
    fn test_network_error_uses_fallback_message() {
        let mut rows = rows();
        let session = session();
        let mut flow = StatusToggleFlow::new();
        flow.select(&rows[1]).unwrap();
        flow.confirm().unwrap();

        let notice = flow
            .settle(Err(ApiError::Network("offline".into())), &mut rows, &session)
            .unwrap();
        assert_eq!(notice, ToggleNotice::Error(TOGGLE_FAILED_MESSAGE.to_string()));
        assert_eq!(rows[1].status, ExpenseStatus::Paused);
    }

    #[test]
    fn test_unauthorized_clears_token_and_ends_flow() {
        let mut rows = rows();
        let session = session();
        let mut flow = StatusToggleFlow::new();
        flow.select(&rows[0]).unwrap();
        flow.confirm().unwrap();

        let notice = flow.settle(Err(ApiError::Unauthorized), &mut rows, &session).unwrap();
        assert_eq!(notice, ToggleNotice::SessionExpired);
        assert_eq!(flow.phase(), &TogglePhase::SessionExpired);
        assert!(!session.is_authenticated());
        assert_eq!(rows[0].status, ExpenseStatus::Active);
        assert_eq!(flow.select(&rows[0]), Err(ToggleError::SessionExpired));
        assert!(!flow.is_open());
    }

    #[test]
    fn test_cancel_rules() {
        let rows = rows();
        let mut flow = StatusToggleFlow::new();
        assert!(!flow.cancel());

        flow.select(&rows[0]).unwrap();
        assert_eq!(flow.select(&rows[1]), Err(ToggleError::SelectionInProgress));
        assert!(flow.cancel());
        assert_eq!(flow.phase(), &TogglePhase::Idle);

        flow.select(&rows[1]).unwrap();
        flow.confirm().unwrap();
        assert!(!flow.cancel());
        assert!(flow.is_committing());
        assert_eq!(flow.confirm(), Err(ToggleError::CommitInFlight));
    }

    #[test]
    fn test_settle_without_commit_is_rejected() {
        let mut rows = rows();
        let session = session();
        let mut flow = StatusToggleFlow::new();
        assert_eq!(flow.confirm(), Err(ToggleError::NothingToConfirm));
        assert_eq!(flow.settle(Ok(()), &mut rows, &session), Err(ToggleError::NotCommitting));

        flow.select(&rows[0]).unwrap();
        assert_eq!(flow.settle(Ok(()), &mut rows, &session), Err(ToggleError::NotCommitting));
        assert!(flow.is_open());
    }

    #[test]
    fn test_prompt_wording() {
        let rows = rows();
        assert_eq!(
            ToggleTarget::from_row(&rows[1]).prompt(),
            "Czy na pewno chcesz wznowić wydatek „Siłownia”?"
        );
        assert_eq!(ToggleTarget::from_row(&rows[0]).next_status(), ExpenseStatus::Paused);
    }
}
