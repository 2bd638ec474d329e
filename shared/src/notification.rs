//! Upcoming-payment reminders.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::{format_amount, format_date};
use crate::planned_expense::{ExpenseKind, RECURRING_TYPE_CODE};
use crate::raw::{coerce_number, coerce_string, display_string, extract_rows, resolve_field};

const ID_ALIASES: &[&str] = &["id"];
const KIND_ALIASES: &[&str] = &["kind", "type", "expenseType"];
const CATEGORY_ALIASES: &[&str] = &["categoryName", "category", "categoryLabel"];
const DESCRIPTION_ALIASES: &[&str] = &["description", "desc", "title"];
const AMOUNT_ALIASES: &[&str] = &["amount"];
const DATE_ALIASES: &[&str] = &["date", "executionDate", "nextExecutionDate", "startDate"];

const RECURRING_KIND_NAMES: &[&str] = &["recurring", "cykliczny", "cykliczna", "cyclic"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRow {
    /// Raw id, or `category|description|date` when the backend sent none.
    pub id: String,
    pub kind: ExpenseKind,
    pub category_name: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
}

fn notification_kind(value: Option<&Value>) -> ExpenseKind {
    match value {
        Some(Value::String(name)) => {
            let name = name.trim().to_lowercase();
            if RECURRING_KIND_NAMES.contains(&name.as_str()) {
                ExpenseKind::Recurring
            } else {
                ExpenseKind::Planned
            }
        }
        other => {
            if crate::raw::is_numeric_code(other, RECURRING_TYPE_CODE) {
                ExpenseKind::Recurring
            } else {
                ExpenseKind::Planned
            }
        }
    }
}

fn raw_id(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    }
}

impl NotificationRow {
    /// `None` when the record carries neither an id nor a date.
    pub fn from_raw(record: &Value) -> Option<Self> {
        let category_name = display_string(resolve_field(record, CATEGORY_ALIASES));
        let description = display_string(resolve_field(record, DESCRIPTION_ALIASES));
        let date = coerce_string(resolve_field(record, DATE_ALIASES)).trim().to_string();

        let id = match raw_id(resolve_field(record, ID_ALIASES)) {
            Some(id) => id,
            None if date.is_empty() => return None,
            None => format!("{}|{}|{}", category_name, description, date),
        };

        Some(Self {
            id,
            kind: notification_kind(resolve_field(record, KIND_ALIASES)),
            category_name,
            description,
            amount: coerce_number(resolve_field(record, AMOUNT_ALIASES)).abs(),
            date,
        })
    }

    pub fn message(&self) -> String {
        format_notification(self)
    }
}

/// Normalize a notifications payload (array, or array under `data`).
pub fn normalize_notifications(payload: &Value) -> Vec<NotificationRow> {
    let records = extract_rows(payload);
    let rows: Vec<NotificationRow> = records.iter().filter_map(NotificationRow::from_raw).collect();
    if rows.len() != records.len() {
        debug!(
            "Dropped {} notification record(s) without id and date",
            records.len() - rows.len()
        );
    }
    rows
}

/// Human-readable upcoming-payment message.
pub fn format_notification(row: &NotificationRow) -> String {
    let prefix = match row.kind {
        ExpenseKind::Recurring => "Masz zbliżającą się płatność cykliczną:",
        ExpenseKind::Planned => "Masz zbliżającą się płatność:",
    };
    format!(
        "{} {} - {}: {} zł ({})",
        prefix,
        row.category_name,
        row.description,
        format_amount(row.amount),
        format_date(&row.date)
    )
}
