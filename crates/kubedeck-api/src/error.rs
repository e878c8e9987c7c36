use thiserror::Error;

/// Error returned by every API call.
///
/// Two kinds: the server answered with a non-success status, or no response
/// was received at all. Callers distinguish them by variant instead of
/// probing optional fields.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server responded, but not with success. Built from the response
    /// status line only; the body is never read.
    #[error("API request failed: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The request never produced a response (connection refused, DNS
    /// failure, decode failure on a stream that died mid-body).
    #[error("network error: {message}")]
    Transport { message: String },
}

impl ApiError {
    /// HTTP status code, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        Self::Transport {
            message: if message.is_empty() {
                "unknown error".to_string()
            } else {
                message
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "API request failed: 404 Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_transport_error_display() {
        let err = ApiError::Transport {
            message: "connection refused (ECONNREFUSED)".to_string(),
        };
        assert!(err.to_string().contains("ECONNREFUSED"));
        assert_eq!(err.status(), None);
    }
}
