//! Wire types shared between the server endpoints and the web UI.
//!
//! Both types are `Serialize + Deserialize + PartialEq` so they can cross the
//! server/client boundary and sit directly in Dioxus component props. On
//! server builds [`Item`] also derives `sqlx::FromRow` (columns matched by
//! name) so `SELECT * FROM items` maps straight into it.

use serde::{Deserialize, Serialize};

/// A single row of the `items` table.
///
/// Rows are created and maintained entirely outside this application; we only
/// ever read the full current set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Outcome of a manual connection test.
///
/// Successful tests carry the liveness query result in `data`; failed tests
/// carry the server-side error detail in `error`. Whichever side is absent is
/// skipped during serialization, so the two wire shapes are exactly
/// `{success, message, data}` and `{success, message, error}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTestResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl ConnectionTestResult {
    /// A successful test with the liveness query result attached.
    pub fn success(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// A failed test. Empty messages fall back to "Unknown error" so the
    /// banner always has something to show.
    pub fn failure(message: impl Into<String>, error: serde_json::Value) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            "Unknown error".to_string()
        } else {
            message
        };
        Self {
            success: false,
            message,
            data: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_serializes_with_exactly_the_three_keys() {
        let item = Item {
            id: 7,
            name: "Widget".into(),
            description: "A widget".into(),
        };
        let value = serde_json::to_value(&item).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["id"], json!(7));
        assert_eq!(object["name"], json!("Widget"));
        assert_eq!(object["description"], json!("A widget"));
    }

    #[test]
    fn success_result_has_data_but_no_error_key() {
        let result = ConnectionTestResult::success("Connection successful", json!([{"test": 1}]));
        let value = serde_json::to_value(&result).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["success"], json!(true));
        assert_eq!(object["message"], json!("Connection successful"));
        assert_eq!(object["data"], json!([{"test": 1}]));
        assert!(!object.contains_key("error"));
    }

    #[test]
    fn failure_result_has_error_but_no_data_key() {
        let result = ConnectionTestResult::failure("boom", json!("detail"));
        let value = serde_json::to_value(&result).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["success"], json!(false));
        assert_eq!(object["message"], json!("boom"));
        assert_eq!(object["error"], json!("detail"));
        assert!(!object.contains_key("data"));
    }

    #[test]
    fn empty_failure_message_falls_back_to_unknown_error() {
        let result = ConnectionTestResult::failure("", json!(null));
        assert_eq!(result.message, "Unknown error");
    }

    #[test]
    fn failure_body_round_trips_through_json() {
        let result = ConnectionTestResult::failure("no route to host", json!("Io(..)"));
        let text = serde_json::to_string(&result).unwrap();
        let parsed: ConnectionTestResult = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, result);
    }
}
