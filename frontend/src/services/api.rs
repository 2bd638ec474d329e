use gloo::net::http::{Request, RequestBuilder};
use serde_json::Value;
use shared::{
    normalize_budgets, normalize_notifications, normalize_planned_expenses, normalize_team_members,
    ApiError, BudgetOption, NotificationRow, PlannedExpenseRow, SearchTransactionsRequest,
    TeamMemberRow, ToggleExpenseStatusRequest,
};

use super::logging::Logger;
use super::session::BrowserSession;
use crate::config::AppConfig;

/// API client for communicating with the budget backend.
///
/// Every request carries the bearer token of the injected session. Responses
/// are parsed at this boundary: callers only ever see canonical rows.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: BrowserSession,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: BrowserSession) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            session,
        }
    }

    pub fn session(&self) -> &BrowserSession {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.bearer() {
            Some(bearer) => builder.header("Authorization", &bearer),
            None => builder,
        }
    }

    /// Send and read the body as loosely-typed JSON.
    ///
    /// Non-2xx answers become [`ApiError`]s. A success body that is empty or
    /// not JSON degrades to `null`, which every normalizer maps to no rows.
    async fn send(&self, request: Request) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                Logger::warn_with_component("api", &format!("Response from {} is not JSON: {}", response.url(), e));
                Ok(Value::Null)
            }
        }
    }

    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let request = self
            .authorized(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(request).await
    }

    /// Budgets the current user can see
    pub async fn list_budgets(&self) -> Result<Vec<BudgetOption>, ApiError> {
        let payload = self.get("/api/budgets").await?;
        Ok(normalize_budgets(&payload))
    }

    /// Planned and recurring expenses of a budget ("search transactions")
    pub async fn search_planned_expenses(&self, budget_id: i64) -> Result<Vec<PlannedExpenseRow>, ApiError> {
        let request = self
            .authorized(Request::post(&self.url("/api/transactions/search")))
            .json(&SearchTransactionsRequest::planned_for(budget_id))
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?;
        let payload = self.send(request).await?;
        Ok(normalize_planned_expenses(&payload))
    }

    /// Upcoming-payment reminders of a budget
    pub async fn get_notifications(&self, budget_id: i64) -> Result<Vec<NotificationRow>, ApiError> {
        let payload = self.get(&format!("/api/budgets/{}/notifications", budget_id)).await?;
        Ok(normalize_notifications(&payload))
    }

    /// Members of a budget team
    pub async fn get_team_members(&self, budget_id: i64) -> Result<Vec<TeamMemberRow>, ApiError> {
        let payload = self.get(&format!("/api/budgets/{}/members", budget_id)).await?;
        Ok(normalize_team_members(&payload))
    }

    /// Flip a planned expense between active and paused. The response body is
    /// not consumed beyond its error detail.
    pub async fn toggle_expense_status(&self, expense_id: i64) -> Result<(), ApiError> {
        let request = self
            .authorized(Request::patch(&self.url(&format!("/api/planned-expenses/{}/status", expense_id))))
            .json(&ToggleExpenseStatusRequest { expense_id })
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?;
        self.send(request).await.map(|_| ())
    }
}
