pub mod expense_table;
pub mod pagination;
pub mod planned_expenses_section;
pub mod status_toggle_modal;

pub use expense_table::ExpenseTable;
pub use pagination::Pagination;
pub use planned_expenses_section::PlannedExpensesSection;
pub use status_toggle_modal::StatusToggleModal;
