pub mod use_budgets;
pub mod use_notices;
pub mod use_notifications;
pub mod use_planned_expenses;
pub mod use_team_members;
