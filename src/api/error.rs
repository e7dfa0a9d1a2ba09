//! Error handling for the api module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to decode a JSON payload from the server.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// An error occurred while processing the request.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// A message suitable for showing to the user. Backend failure bodies
    /// carry a JSON `message` field; fall back to a generic line otherwise.
    pub fn user_message(&self) -> String {
        if let ApiError::Http { message, .. } = self {
            if let Ok(body) = serde_json::from_str::<serde_json::Value>(message) {
                if let Some(msg) = body.get("message").and_then(|m| m.as_str()) {
                    return msg.to_string();
                }
            }
        }
        "The request could not be completed. Please try again.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Backend-supplied messages should be surfaced verbatim.
    fn test_user_message_prefers_backend_message() {
        let err = ApiError::Http {
            status: 400,
            message: r#"{"message":"Insufficient balance"}"#.to_string(),
        };
        assert_eq!(err.user_message(), "Insufficient balance");
    }

    #[test]
    // Anything else falls back to the generic line.
    fn test_user_message_falls_back_on_opaque_bodies() {
        let err = ApiError::Http {
            status: 502,
            message: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "The request could not be completed. Please try again."
        );

        let err = ApiError::Http {
            status: 500,
            message: r#"{"error":"no message field"}"#.to_string(),
        };
        assert_eq!(
            err.user_message(),
            "The request could not be completed. Please try again."
        );
    }
}
