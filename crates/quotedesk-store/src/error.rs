use quotedesk_types::{RequestId, RequestStatus};
use std::fmt;

/// Result type for quotedesk-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the storage layer
#[derive(Debug)]
pub enum Error {
    /// SQLite backend failed
    Database(rusqlite::Error),

    /// Collection could not be encoded
    Serialize(serde_json::Error),

    /// CSV export failed
    Csv(csv::Error),

    /// Backend refused a value larger than its quota
    QuotaExceeded {
        key: String,
        len: usize,
        limit: usize,
    },

    /// No request with this id in the collection
    NotFound(RequestId),

    /// No community post with this id
    PostNotFound(RequestId),

    /// Status change that would move backwards
    InvalidTransition {
        id: RequestId,
        from: RequestStatus,
        to: RequestStatus,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => write!(f, "Database error: {}", err),
            Error::Serialize(err) => write!(f, "Serialization error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::QuotaExceeded { key, len, limit } => write!(
                f,
                "Storage quota exceeded writing '{}': {} bytes (limit {})",
                key, len, limit
            ),
            Error::NotFound(id) => write!(f, "No quote request with id {}", id),
            Error::PostNotFound(id) => write!(f, "No community post with id {}", id),
            Error::InvalidTransition { id, from, to } => write!(
                f,
                "Quote request {} cannot move from {} to {}",
                id, from, to
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Serialize(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::QuotaExceeded { .. }
            | Error::NotFound(_)
            | Error::PostNotFound(_)
            | Error::InvalidTransition { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_error_message() {
        let err = Error::InvalidTransition {
            id: RequestId::new(5),
            from: RequestStatus::Completed,
            to: RequestStatus::Pending,
        };
        assert_eq!(
            err.to_string(),
            "Quote request 5 cannot move from completed to pending"
        );
    }

    #[test]
    fn test_quota_error_has_no_source() {
        use std::error::Error as _;
        let err = Error::QuotaExceeded {
            key: "quoteRequests".to_string(),
            len: 10,
            limit: 5,
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("quoteRequests"));
    }
}
