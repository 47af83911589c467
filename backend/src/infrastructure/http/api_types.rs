use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope wrapping every worker response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        ApiResponse {
            success: true,
            ..Default::default()
        }
    }

    pub fn with_data(data: Value) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            ..Default::default()
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Error text for a failed response, whichever field carries it
    pub fn error_text(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "unknown error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted() {
        let body = serde_json::to_value(ApiResponse::ok()).unwrap();
        assert_eq!(body, json!({ "success": true }));

        let body = serde_json::to_value(ApiResponse::failure("Key not found")).unwrap();
        assert_eq!(body, json!({ "success": false, "error": "Key not found" }));
    }

    #[test]
    fn test_decodes_minimal_envelope() {
        let response: ApiResponse = serde_json::from_str(r#"{"success":true,"data":[1,2]}"#).unwrap();
        assert_eq!(response.data, Some(json!([1, 2])));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_error_text_falls_back_to_message() {
        let response = ApiResponse {
            success: false,
            message: Some("Database offline".to_string()),
            ..Default::default()
        };
        assert_eq!(response.error_text(), "Database offline");
    }
}
