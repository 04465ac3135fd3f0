//! The uniform response envelope: `{ success, data?, error? }`.
//!
//! Every endpoint answers with one of these two shapes, success and failure
//! alike, so clients branch on `success` rather than on the status code.

use serde::{Deserialize, Serialize};

/// Successful envelope: `{ "success": true, "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope: `{ "success": false, "error": "..." }`. `data` is
/// omitted entirely, matching the success shape's absence of `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": [1, 2, 3] }));
    }

    #[test]
    fn error_envelope_shape() {
        let json = serde_json::to_value(ErrorResponse::new("Post not found")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "Post not found" })
        );
    }
}
