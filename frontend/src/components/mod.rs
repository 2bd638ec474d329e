pub mod budget_selector;
pub mod header;
pub mod notice_banner;
pub mod notifications_panel;
pub mod planned_expenses;
pub mod team_panel;

pub use header::Header;
pub use notice_banner::NoticeBanner;
pub use notifications_panel::NotificationsPanel;
pub use planned_expenses::PlannedExpensesSection;
pub use team_panel::TeamPanel;
