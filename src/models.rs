// Request and response envelopes for the HTTP facade

use serde::{Deserialize, Serialize};

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResponse {
    pub result: String,
    pub status: String,
}

impl PromptResponse {
    /// Wrap a result text in the success envelope
    pub fn success(result: String) -> Self {
        Self {
            result,
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub engine_ready: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

// Error envelope for 503/500 responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_request_deserialization() {
        let request: PromptRequest = serde_json::from_str(r#"{"prompt":"hello"}"#).unwrap();
        assert_eq!(request.prompt, "hello");
    }

    #[test]
    fn test_prompt_response_success_envelope() {
        let response = PromptResponse::success("55".to_string());
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(value["result"], "55");
        assert_eq!(value["status"], "success");
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            engine_ready: false,
        };
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["engine_ready"], false);
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse {
            detail: "Engine not initialized".to_string(),
        };
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(value["detail"], "Engine not initialized");
    }
}
