//! Canonical planned/recurring expense rows and the normalizer that builds them
//! from "search transactions" payloads.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::format_currency;
use crate::raw::{
    coerce_id, coerce_number, coerce_string, display_string, extract_rows, is_numeric_code,
    resolve_field,
};

/// Raw `type` code of a recurring expense.
pub const RECURRING_TYPE_CODE: i64 = 1;
/// Raw `status` code of a paused expense.
pub const PAUSED_STATUS_CODE: i64 = 2;

const ID_ALIASES: &[&str] = &["id"];
const TYPE_ALIASES: &[&str] = &["type"];
const STATUS_ALIASES: &[&str] = &["status"];
const CATEGORY_ALIASES: &[&str] = &["categoryName"];
const DESCRIPTION_ALIASES: &[&str] = &["title"];
const AMOUNT_ALIASES: &[&str] = &["amount"];
const DATE_ALIASES: &[&str] = &["date"];
const FREQUENCY_ALIASES: &[&str] = &["frequencyLabel", "frequency"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    Planned,
    Recurring,
}

impl ExpenseKind {
    /// Only the numeric code 1 means recurring; anything else is planned.
    pub fn from_code(value: Option<&Value>) -> Self {
        if is_numeric_code(value, RECURRING_TYPE_CODE) {
            ExpenseKind::Recurring
        } else {
            ExpenseKind::Planned
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseKind::Planned => "Planowany",
            ExpenseKind::Recurring => "Cykliczny",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Active,
    Paused,
}

impl ExpenseStatus {
    /// Only the numeric code 2 means paused; anything else is active.
    pub fn from_code(value: Option<&Value>) -> Self {
        if is_numeric_code(value, PAUSED_STATUS_CODE) {
            ExpenseStatus::Paused
        } else {
            ExpenseStatus::Active
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ExpenseStatus::Active => ExpenseStatus::Paused,
            ExpenseStatus::Paused => ExpenseStatus::Active,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseStatus::Active => "Aktywny",
            ExpenseStatus::Paused => "Wstrzymany",
        }
    }

    /// Label of the action that moves an expense out of this status.
    pub fn toggle_action_label(&self) -> &'static str {
        match self {
            ExpenseStatus::Active => "Wstrzymaj",
            ExpenseStatus::Paused => "Wznów",
        }
    }
}

/// Canonical view of one planned or recurring expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExpenseRow {
    /// Always > 0.
    pub id: i64,
    pub kind: ExpenseKind,
    pub category_name: String,
    pub description: String,
    /// Non-negative magnitude; the sign is a display concern.
    pub amount: f64,
    pub created_at: String,
    pub execution_date: String,
    pub frequency_label: Option<String>,
    pub status: ExpenseStatus,
}

impl PlannedExpenseRow {
    /// Build a canonical row from one raw record, or `None` when its id is not
    /// a positive integer.
    pub fn from_raw(record: &Value) -> Option<Self> {
        let id = coerce_id(resolve_field(record, ID_ALIASES))?;
        let kind = ExpenseKind::from_code(resolve_field(record, TYPE_ALIASES));
        let date = coerce_string(resolve_field(record, DATE_ALIASES));

        let frequency_label = match kind {
            ExpenseKind::Recurring => {
                Some(coerce_string(resolve_field(record, FREQUENCY_ALIASES)))
                    .filter(|label| !label.trim().is_empty())
            }
            ExpenseKind::Planned => None,
        };

        Some(Self {
            id,
            kind,
            category_name: display_string(resolve_field(record, CATEGORY_ALIASES)),
            description: display_string(resolve_field(record, DESCRIPTION_ALIASES)),
            amount: coerce_number(resolve_field(record, AMOUNT_ALIASES)).abs(),
            created_at: date.clone(),
            execution_date: date,
            frequency_label,
            status: ExpenseStatus::from_code(resolve_field(record, STATUS_ALIASES)),
        })
    }

    /// Amount as shown in the table; planned expenses are outflows.
    pub fn display_amount(&self) -> String {
        format_currency(-self.amount)
    }

    pub fn display_frequency(&self) -> &str {
        self.frequency_label.as_deref().unwrap_or("-")
    }
}

/// Normalize a "search transactions" payload into canonical rows.
///
/// Pure and total: anything that is not a row array (directly or under
/// `data`) yields no rows, and records with a non-positive id are dropped.
pub fn normalize_planned_expenses(payload: &Value) -> Vec<PlannedExpenseRow> {
    let records = extract_rows(payload);
    let rows: Vec<PlannedExpenseRow> = records.iter().filter_map(PlannedExpenseRow::from_raw).collect();
    if rows.len() != records.len() {
        debug!(
            "Dropped {} planned expense record(s) without a positive id",
            records.len() - rows.len()
        );
    }
    rows
}

/// Set the status of the row with `id`. Returns whether the row was found.
///
/// Idempotent: applying a status the row already has leaves it unchanged.
pub fn set_status_by_id(rows: &mut [PlannedExpenseRow], id: i64, status: ExpenseStatus) -> bool {
    match rows.iter_mut().find(|row| row.id == id) {
        Some(row) => {
            row.status = status;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scenario_recurring_paused_row() {
        let payload = json!([{"id": 5, "type": 1, "status": 2, "amount": "12.50", "date": "2025-01-10"}]);
        let rows = normalize_planned_expenses(&payload);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, 5);
        assert_eq!(row.kind, ExpenseKind::Recurring);
        assert_eq!(row.status, ExpenseStatus::Paused);
        assert_eq!(row.amount, 12.5);
        assert_eq!(row.created_at, "2025-01-10");
        assert_eq!(row.execution_date, "2025-01-10");
        assert_eq!(row.category_name, "-");
        assert_eq!(row.description, "-");
        assert_eq!(row.frequency_label, None);
    }

    #[test]
    fn test_non_positive_ids_are_filtered() {
        assert!(normalize_planned_expenses(&json!([{"id": 0, "type": 0}])).is_empty());

        let payload = json!([{"id": -1}, {"id": 3}, {"title": "no id"}, {"id": "abc"}, {"id": "4"}]);
        let ids: Vec<i64> = normalize_planned_expenses(&payload).iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_non_array_input_yields_nothing() {
        for payload in [json!(null), json!({}), json!("rows"), json!(42), json!({"data": null})] {
            assert!(normalize_planned_expenses(&payload).is_empty());
        }
    }

    #[test]
    fn test_rows_under_data_field() {
        let payload = json!({"data": [{"id": 1, "categoryName": "Dom", "title": "Czynsz", "amount": -1800}]});
        let rows = normalize_planned_expenses(&payload);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category_name, "Dom");
        assert_eq!(rows[0].description, "Czynsz");
        assert_eq!(rows[0].amount, 1800.0);
    }

    #[test]
    fn test_kind_and_status_codes() {
        let cases = [
            (json!({"id": 1, "type": 1}), ExpenseKind::Recurring),
            (json!({"id": 1, "type": 0}), ExpenseKind::Planned),
            (json!({"id": 1, "type": "1"}), ExpenseKind::Planned),
            (json!({"id": 1, "type": 2}), ExpenseKind::Planned),
            (json!({"id": 1}), ExpenseKind::Planned),
        ];
        for (record, expected) in cases {
            assert_eq!(PlannedExpenseRow::from_raw(&record).unwrap().kind, expected);
        }

        let cases = [
            (json!({"id": 1, "status": 2}), ExpenseStatus::Paused),
            (json!({"id": 1, "status": 1}), ExpenseStatus::Active),
            (json!({"id": 1, "status": "2"}), ExpenseStatus::Active),
            (json!({"id": 1}), ExpenseStatus::Active),
        ];
        for (record, expected) in cases {
            assert_eq!(PlannedExpenseRow::from_raw(&record).unwrap().status, expected);
        }
    }

    #[test]
    fn test_malformed_fields_degrade_to_defaults() {
        let record = json!({"id": 9, "amount": "dużo", "date": 20250110, "categoryName": 7, "title": ""});
        let row = PlannedExpenseRow::from_raw(&record).unwrap();
        assert_eq!(row.amount, 0.0);
        assert_eq!(row.created_at, "");
        assert_eq!(row.category_name, "-");
        assert_eq!(row.description, "-");
    }

    #[test]
    fn test_frequency_only_for_recurring_rows() {
        let recurring = json!({"id": 1, "type": 1, "frequency": "Co miesiąc"});
        let planned = json!({"id": 2, "type": 0, "frequency": "Co miesiąc"});
        assert_eq!(
            PlannedExpenseRow::from_raw(&recurring).unwrap().frequency_label.as_deref(),
            Some("Co miesiąc")
        );
        let planned = PlannedExpenseRow::from_raw(&planned).unwrap();
        assert_eq!(planned.frequency_label, None);
        assert_eq!(planned.display_frequency(), "-");
    }

    #[test]
    fn test_display_amount_applies_sign() {
        let row = PlannedExpenseRow::from_raw(&json!({"id": 1, "amount": 12.5})).unwrap();
        assert_eq!(row.display_amount(), "-12,50 zł");
    }

    #[test]
    fn test_set_status_by_id() {
        let mut rows = normalize_planned_expenses(&json!([{"id": 1}, {"id": 2, "status": 2}]));
        assert!(set_status_by_id(&mut rows, 2, ExpenseStatus::Active));
        assert!(set_status_by_id(&mut rows, 1, ExpenseStatus::Paused));
        assert!(set_status_by_id(&mut rows, 1, ExpenseStatus::Paused));
        assert!(!set_status_by_id(&mut rows, 3, ExpenseStatus::Paused));
        assert_eq!(rows[0].status, ExpenseStatus::Paused);
        assert_eq!(rows[1].status, ExpenseStatus::Active);
    }

    #[test]
    fn test_serializes_with_camel_case_names() {
        let row = PlannedExpenseRow::from_raw(&json!({"id": 5, "type": 1, "status": 2})).unwrap();
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["kind"], "recurring");
        assert_eq!(value["status"], "paused");
        assert!(value.get("executionDate").is_some());
        assert!(value.get("frequencyLabel").is_some());
    }
}
