use serde::{Deserialize, Serialize};

/// Uniform response body: every route answers `{isSuccess, data, message}`
/// whether it succeeded or not.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_success: bool,
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            is_success: true,
            data: Some(data),
            message: String::new(),
        }
    }

    pub fn with_message(data: T, message: &str) -> Self {
        ApiResponse {
            is_success: true,
            data: Some(data),
            message: message.to_string(),
        }
    }

    pub fn message(message: &str) -> Self {
        ApiResponse {
            is_success: true,
            data: None,
            message: message.to_string(),
        }
    }

    pub fn fail(message: String) -> Self {
        ApiResponse {
            is_success: false,
            data: None,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_keys() {
        let value = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(value["isSuccess"], true);
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(value["message"], "");
    }

    #[test]
    fn test_failure_envelope_has_no_data() {
        let value =
            serde_json::to_value(ApiResponse::<()>::fail("algo salió mal".into())).unwrap();
        assert_eq!(value["isSuccess"], false);
        assert!(value["data"].is_null());
        assert_eq!(value["message"], "algo salió mal");
    }
}
