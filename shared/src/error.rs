use thiserror::Error;

/// Failure of a request against the budget backend.
///
/// Payload-shape problems are never represented here: the normalizers degrade
/// malformed data to empty rows or default field values instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// HTTP 401. The session is no longer valid.
    #[error("Session expired")]
    Unauthorized,

    /// Any other non-2xx response, with the optional error detail from the body.
    #[error("Server error {status}: {}", .detail.as_deref().unwrap_or("no details"))]
    Status { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Build an error from a non-success status code and the raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        ApiError::Status {
            status,
            detail: error_detail(body),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Text shown to the user in a transient notice.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { detail: Some(detail), .. } => detail.clone(),
            ApiError::Unauthorized => "Sesja wygasła. Zaloguj się ponownie.".to_string(),
            _ => fallback.to_string(),
        }
    }
}

const DETAIL_ALIASES: &[&str] = &["detail", "message", "error"];

/// Pull the optional error detail field out of a failure body.
///
/// Only a JSON object carrying one of the detail fields yields text; plain
/// text and HTML error pages are never shown to the user.
fn error_detail(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body.trim()).ok()?;
    crate::raw::resolve_field(&value, DETAIL_ALIASES)
        .and_then(|detail| detail.as_str())
        .map(str::trim)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}

/// Illegal transition requested from the status toggle flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("Another expense is already selected for a status change")]
    SelectionInProgress,

    #[error("Nothing is waiting for confirmation")]
    NothingToConfirm,

    #[error("A status change is already in flight")]
    CommitInFlight,

    #[error("No status change is in flight")]
    NotCommitting,

    #[error("The session has expired")]
    SessionExpired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_maps_to_unauthorized() {
        assert_eq!(ApiError::from_status(401, "{\"detail\":\"x\"}"), ApiError::Unauthorized);
        assert!(ApiError::from_status(401, "").is_unauthorized());
    }

    #[test]
    fn test_detail_is_taken_from_json_body() {
        let err = ApiError::from_status(403, r#"{"message": "Brak uprawnień"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 403,
                detail: Some("Brak uprawnień".to_string())
            }
        );
        assert_eq!(err.user_message("fallback"), "Brak uprawnień");
    }

    #[test]
    fn test_plain_text_and_empty_bodies() {
        let err = ApiError::from_status(500, "Internal failure");
        assert_eq!(err, ApiError::Status { status: 500, detail: None });
        assert_eq!(err.user_message("fallback"), "fallback");

        let err = ApiError::from_status(502, "<html><body><h1>502 Bad Gateway</h1></body></html>");
        assert_eq!(err.user_message("Nie udało się zmienić statusu wydatku."), "Nie udało się zmienić statusu wydatku.");

        let err = ApiError::from_status(502, "   ");
        assert_eq!(err, ApiError::Status { status: 502, detail: None });
        assert_eq!(err.user_message("fallback"), "fallback");

        let err = ApiError::from_status(400, r#"{"code": 7}"#);
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status { status: 404, detail: None };
        assert_eq!(err.to_string(), "Server error 404: no details");
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
    }
}
