//! Error Types
//!
//! A single error type shared by the gateway, the pagination engine and the
//! repositories built on top of them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, or a body that could not be read
    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status returned by the cloud controller
    #[error(
        "Server error, status code: {status}, error code: {}, message: {}",
        or_dash(.code),
        or_dash(.description)
    )]
    Http {
        status: u16,
        code: Option<i64>,
        error_code: Option<String>,
        description: Option<String>,
    },

    #[error("Invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Lookup completed without a match
    #[error("{kind} {name} not found")]
    ModelNotFound { kind: String, name: String },
}

fn or_dash<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

impl ApiError {
    pub fn model_not_found(kind: &str, name: &str) -> Self {
        Self::ModelNotFound {
            kind: kind.to_string(),
            name: name.to_string(),
        }
    }

    /// True only for the repository-level not-found kind.
    ///
    /// A 404 coming back from the server is an [`ApiError::Http`] and is not
    /// reported here.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ModelNotFound { .. })
    }

    /// HTTP status carried by the error, if it came from a server reply
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found_message() {
        let err = ApiError::model_not_found("application security group", "my-group");
        assert_eq!(err.to_string(), "application security group my-group not found");
        assert!(err.is_not_found());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_http_error_message() {
        let err = ApiError::Http {
            status: 404,
            code: Some(300002),
            error_code: Some("CF-SecurityGroupNotFound".to_string()),
            description: Some("The security group could not be found".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Server error, status code: 404, error code: 300002, message: The security group could not be found"
        );
        assert!(!err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_http_error_without_body() {
        let err = ApiError::Http {
            status: 502,
            code: None,
            error_code: None,
            description: None,
        };
        assert_eq!(
            err.to_string(),
            "Server error, status code: 502, error code: -, message: -"
        );
    }
}
