use std::fmt;

/// Result type for quotedesk-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Status string was neither `pending` nor `completed`
    UnknownStatus(String),

    /// Role string was neither `client` nor `contractor`
    UnknownRole(String),

    /// A `key=value` form field could not be split
    MalformedField(String),

    /// Post category outside the community page's list
    UnknownCategory(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownStatus(s) => {
                write!(f, "Unknown status '{}' (expected pending or completed)", s)
            }
            Error::UnknownRole(s) => {
                write!(f, "Unknown role '{}' (expected client or contractor)", s)
            }
            Error::MalformedField(s) => {
                write!(f, "Malformed form field '{}' (expected key=value)", s)
            }
            Error::UnknownCategory(s) => write!(
                f,
                "Unknown category '{}' (expected project, discussion, question or update)",
                s
            ),
        }
    }
}

impl std::error::Error for Error {}
