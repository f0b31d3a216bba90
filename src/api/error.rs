/// Error types for the user API
use thiserror::Error;

/// Errors surfaced by the user API operations.
///
/// The display form of every variant is the message a caller shows verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (DNS, connection refused, broken body stream)
    #[error("{0}")]
    Fetch(#[from] reqwest::Error),

    /// A response arrived but its status is not 2xx
    #[error("{message}")]
    HttpStatus {
        status: u16,
        message: String,
    },

    /// The body is not JSON of the expected shape
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Status failure raised by the list operations.
    pub fn list_failed(status: u16) -> Self {
        ApiError::HttpStatus {
            status,
            message: format!("HTTP error! status: {}", status),
        }
    }

    /// Status failure raised by the create operation.
    pub fn create_failed(status: u16) -> Self {
        ApiError::HttpStatus {
            status,
            message: format!("Failed to create user: {}", status),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            ApiError::Fetch(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_and_create_messages_differ() {
        assert_eq!(ApiError::list_failed(404).to_string(), "HTTP error! status: 404");
        assert_eq!(ApiError::create_failed(500).to_string(), "Failed to create user: 500");
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(ApiError::list_failed(503).status(), Some(503));
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ApiError::from(decode).status(), None);
    }
}
