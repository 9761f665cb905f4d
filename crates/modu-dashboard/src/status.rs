//! Status-page state for the backend health check
//!
//! Success and failure are the only distinctions made. Any error collapses into
//! [`HealthStatus::Unreachable`] without inspection.

use serde_json::Value;

/// Text shown while the check is in flight
pub const CHECKING_MESSAGE: &str = "Checking backend...";

/// Text shown when the backend cannot be reached
pub const UNREACHABLE_MESSAGE: &str =
    "API unreachable. Start Django on http://localhost:8000 and confirm MYSQL_ env values.";

/// Render state of the status page
#[derive(Debug, Clone, PartialEq)]
pub enum HealthStatus {
    Loading,
    /// Backend answered; holds the body serialized as compact JSON
    Online(String),
    Unreachable,
}

impl HealthStatus {
    /// Map the outcome of a health check
    pub fn from_result<E>(result: &Result<Value, E>) -> Self {
        match result {
            Ok(body) => Self::Online(body.to_string()),
            Err(_) => Self::Unreachable,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn message(&self) -> String {
        match self {
            Self::Loading => CHECKING_MESSAGE.to_string(),
            Self::Online(body) => format!("API online: {body}"),
            Self::Unreachable => UNREACHABLE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_online_message_includes_body() {
        let status = HealthStatus::from_result::<()>(&Ok(json!({"status": "ok"})));
        assert_eq!(status, HealthStatus::Online(r#"{"status":"ok"}"#.to_string()));
        let message = status.message();
        assert!(message.contains("API online"));
        assert!(message.contains(r#"{"status":"ok"}"#));
        assert!(!status.is_loading());
    }

    #[test]
    fn test_any_error_is_unreachable() {
        let status = HealthStatus::from_result(&Err("connection refused"));
        assert_eq!(status, HealthStatus::Unreachable);
        assert_eq!(status.message(), UNREACHABLE_MESSAGE);
        assert!(!status.is_loading());
    }

    #[test]
    fn test_loading() {
        assert!(HealthStatus::Loading.is_loading());
        assert_eq!(HealthStatus::Loading.message(), CHECKING_MESSAGE);
    }

    #[test]
    fn test_online_body_keeps_key_order() {
        let raw = r#"{"status":"ok","database":"up","service":"bark-api"}"#;
        let body: Value = serde_json::from_str(raw).unwrap();
        let status = HealthStatus::from_result::<()>(&Ok(body));
        assert_eq!(status.message(), format!("API online: {raw}"));
    }
}
