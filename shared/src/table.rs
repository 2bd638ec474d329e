//! Client-side sorting and pagination of the planned-expense table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::format::collate;
use crate::planned_expense::PlannedExpenseRow;
use crate::raw::timestamp_or_epoch;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// The `lp` column. Row numbers are positional, so sorting by them keeps
    /// the current order.
    RowNumber,
    Kind,
    CategoryName,
    Description,
    Amount,
    CreatedAt,
    ExecutionDate,
    FrequencyLabel,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::RowNumber,
        SortKey::Kind,
        SortKey::CategoryName,
        SortKey::Description,
        SortKey::Amount,
        SortKey::CreatedAt,
        SortKey::ExecutionDate,
        SortKey::FrequencyLabel,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            SortKey::RowNumber => "Lp.",
            SortKey::Kind => "Rodzaj",
            SortKey::CategoryName => "Kategoria",
            SortKey::Description => "Opis",
            SortKey::Amount => "Kwota",
            SortKey::CreatedAt => "Data utworzenia",
            SortKey::ExecutionDate => "Data wykonania",
            SortKey::FrequencyLabel => "Częstotliwość",
        }
    }

    pub fn is_sortable(&self) -> bool {
        !matches!(self, SortKey::RowNumber)
    }

    /// Ascending comparison of two rows on this key.
    pub fn compare(&self, left: &PlannedExpenseRow, right: &PlannedExpenseRow) -> Ordering {
        match self {
            SortKey::RowNumber => Ordering::Equal,
            SortKey::Kind => collate(left.kind.label(), right.kind.label()),
            SortKey::CategoryName => collate(&left.category_name, &right.category_name),
            SortKey::Description => collate(&left.description, &right.description),
            SortKey::Amount => left.amount.abs().total_cmp(&right.amount.abs()),
            SortKey::CreatedAt => {
                timestamp_or_epoch(&left.created_at).cmp(&timestamp_or_epoch(&right.created_at))
            }
            SortKey::ExecutionDate => timestamp_or_epoch(&left.execution_date)
                .cmp(&timestamp_or_epoch(&right.execution_date)),
            SortKey::FrequencyLabel => collate(
                left.frequency_label.as_deref().unwrap_or(""),
                right.frequency_label.as_deref().unwrap_or(""),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Stable sort into a new sequence. Equal keys keep their original relative
/// order in both directions.
pub fn sort_rows(
    rows: &[PlannedExpenseRow],
    key: SortKey,
    direction: SortDirection,
) -> Vec<PlannedExpenseRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|left, right| match direction {
        SortDirection::Ascending => key.compare(left, right),
        SortDirection::Descending => key.compare(right, left),
    });
    sorted
}

/// `ceil(row_count / PAGE_SIZE)`, never less than 1.
pub fn total_pages(row_count: usize) -> usize {
    row_count.div_ceil(PAGE_SIZE).max(1)
}

/// Rows of the 1-based `page`. Out-of-range pages come back empty; clamping is
/// the caller's job (see [`clamp_page`]).
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

/// Bring a requested page into `1..=total_pages(row_count)`.
pub fn clamp_page(page: usize, row_count: usize) -> usize {
    page.clamp(1, total_pages(row_count))
}

/// Sort and page selection of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub key: SortKey,
    pub direction: SortDirection,
    /// 1-based.
    pub page: usize,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            key: SortKey::RowNumber,
            direction: SortDirection::Ascending,
            page: 1,
        }
    }
}

impl TableView {
    /// A new key starts ascending; the same key flips direction. Either way
    /// the view goes back to the first page.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize, row_count: usize) {
        self.page = clamp_page(page, row_count);
    }

    /// Keep the current page valid after the row set changed size.
    pub fn clamp_to(&mut self, row_count: usize) {
        self.page = clamp_page(self.page, row_count);
    }

    /// Sorted rows of the current page, paired with their 1-based position in
    /// the sorted set (the `lp` column).
    pub fn visible(&self, rows: &[PlannedExpenseRow]) -> Vec<(usize, PlannedExpenseRow)> {
        let sorted = sort_rows(rows, self.key, self.direction);
        let offset = self.page.saturating_sub(1) * PAGE_SIZE;
        page_slice(&sorted, self.page)
            .iter()
            .enumerate()
            .map(|(index, row)| (offset + index + 1, row.clone()))
            .collect()
    }

    pub fn indicator_for(&self, key: SortKey) -> Option<&'static str> {
        (self.key == key && key.is_sortable()).then(|| self.direction.indicator())
    }
}
