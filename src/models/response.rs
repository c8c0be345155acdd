//! Shared API response envelope.
//!
//! Every endpoint answers with the same shape: `{success, data?, message}`.
//! `data` is omitted entirely (not null) when a response carries none, which
//! keeps error bodies down to `{success, message}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_field_is_absent_when_none() {
        let response: ApiResponse<i32> = ApiResponse {
            success: false,
            data: None,
            message: "Route not found".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_ok_wraps_payload() {
        let response = ApiResponse::ok(vec![1, 2, 3], "Tasks retrieved successfully");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["message"], "Tasks retrieved successfully");
    }
}
