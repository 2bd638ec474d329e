//! Budgets the user can switch between, and the members of a budget team.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::collate;
use crate::raw::{coerce_id, coerce_string, display_string, extract_rows, resolve_field};

const BUDGET_ID_ALIASES: &[&str] = &["id", "budgetId"];
const BUDGET_NAME_ALIASES: &[&str] = &["name", "budgetName", "title"];

const MEMBER_ID_ALIASES: &[&str] = &["id", "userId", "memberId"];
const MEMBER_NAME_ALIASES: &[&str] = &["username", "userName", "name", "login"];
const MEMBER_EMAIL_ALIASES: &[&str] = &["email", "mail"];
const MEMBER_ROLE_ALIASES: &[&str] = &["role", "memberRole"];
const MEMBER_OWNER_FLAG_ALIASES: &[&str] = &["owner", "isOwner"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetOption {
    pub id: i64,
    pub name: String,
}

pub fn normalize_budgets(payload: &Value) -> Vec<BudgetOption> {
    extract_rows(payload)
        .iter()
        .filter_map(|record| {
            let id = coerce_id(resolve_field(record, BUDGET_ID_ALIASES))?;
            let name = coerce_string(resolve_field(record, BUDGET_NAME_ALIASES));
            let name = if name.trim().is_empty() {
                format!("Budżet #{}", id)
            } else {
                name
            };
            Some(BudgetOption { id, name })
        })
        .collect()
}

/// Keep the stored selection while it still names one of `budgets`, otherwise
/// fall back to the first budget.
pub fn resolve_selected_budget(stored: Option<i64>, budgets: &[BudgetOption]) -> Option<i64> {
    stored
        .filter(|id| budgets.iter().any(|budget| budget.id == *id))
        .or_else(|| budgets.first().map(|budget| budget.id))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Owner,
    Member,
}

impl TeamRole {
    fn from_record(record: &Value) -> Self {
        let flagged = matches!(
            resolve_field(record, MEMBER_OWNER_FLAG_ALIASES),
            Some(Value::Bool(true))
        );
        let role = coerce_string(resolve_field(record, MEMBER_ROLE_ALIASES)).trim().to_lowercase();
        if flagged || role == "owner" || role == "właściciel" {
            TeamRole::Owner
        } else {
            TeamRole::Member
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeamRole::Owner => "Właściciel",
            TeamRole::Member => "Członek",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: TeamRole,
}

/// Members of a budget team, owners first, then by username.
pub fn normalize_team_members(payload: &Value) -> Vec<TeamMemberRow> {
    let mut members: Vec<TeamMemberRow> = extract_rows(payload)
        .iter()
        .filter_map(|record| {
            Some(TeamMemberRow {
                id: coerce_id(resolve_field(record, MEMBER_ID_ALIASES))?,
                username: display_string(resolve_field(record, MEMBER_NAME_ALIASES)),
                email: display_string(resolve_field(record, MEMBER_EMAIL_ALIASES)),
                role: TeamRole::from_record(record),
            })
        })
        .collect();
    members.sort_by(|left, right| match (left.role, right.role) {
        (TeamRole::Owner, TeamRole::Member) => Ordering::Less,
        (TeamRole::Member, TeamRole::Owner) => Ordering::Greater,
        _ => collate(&left.username, &right.username),
    });
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_budgets() {
        let payload = json!({"data": [
            {"budgetId": 3, "budgetName": "Domowy"},
            {"id": 0, "name": "Ignored"},
            {"id": "8", "title": ""}
        ]});
        assert_eq!(
            normalize_budgets(&payload),
            vec![
                BudgetOption { id: 3, name: "Domowy".to_string() },
                BudgetOption { id: 8, name: "Budżet #8".to_string() },
            ]
        );
        assert!(normalize_budgets(&json!("nope")).is_empty());
    }

    #[test]
    fn test_resolve_selected_budget() {
        let budgets = normalize_budgets(&json!([{"id": 3, "name": "A"}, {"id": 5, "name": "B"}]));
        assert_eq!(resolve_selected_budget(Some(5), &budgets), Some(5));
        assert_eq!(resolve_selected_budget(Some(9), &budgets), Some(3));
        assert_eq!(resolve_selected_budget(None, &budgets), Some(3));
        assert_eq!(resolve_selected_budget(Some(5), &[]), None);
    }

    #[test]
    fn test_team_members_owner_first() {
        let payload = json!([
            {"userId": 2, "login": "zosia", "mail": "z@example.com"},
            {"id": 1, "username": "Adam", "role": "MEMBER"},
            {"memberId": 7, "userName": "marek", "isOwner": true},
            {"username": "no id"}
        ]);
        let members = normalize_team_members(&payload);
        let names: Vec<&str> = members.iter().map(|member| member.username.as_str()).collect();
        assert_eq!(names, vec!["marek", "Adam", "zosia"]);
        assert_eq!(members[0].role, TeamRole::Owner);
        assert_eq!(members[1].email, "-");
        assert_eq!(members[2].email, "z@example.com");
    }

    #[test]
    fn test_role_strings() {
        let owner = normalize_team_members(&json!([{"id": 1, "memberRole": "Owner"}]));
        assert_eq!(owner[0].role, TeamRole::Owner);
        assert_eq!(owner[0].role.label(), "Właściciel");
    }
}
