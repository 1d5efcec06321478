use quotedesk_core::CommunityError;
use quotedesk_types::Role;
use std::fmt;

/// Result type for quotedesk-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Storage layer error
    Store(quotedesk_store::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Logging could not be initialized
    Logging(String),

    /// Login rejected for this role
    InvalidCredentials(Role),

    /// Community feed action refused
    Community(CommunityError),
}

impl Error {
    /// Message suitable for showing to the person at the form.
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidCredentials(Role::Contractor) => {
                "Invalid contractor credentials. Please try again.".to_string()
            }
            Error::InvalidCredentials(Role::Client) => {
                "Invalid client credentials. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Storage error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Logging(msg) => write!(f, "Logging error: {}", msg),
            Error::InvalidCredentials(role) => write!(f, "Invalid {} credentials", role),
            Error::Community(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Community(err) => Some(err),
            Error::Config(_) | Error::Logging(_) | Error::InvalidCredentials(_) => None,
        }
    }
}

impl From<quotedesk_store::Error> for Error {
    fn from(err: quotedesk_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<CommunityError> for Error {
    fn from(err: CommunityError) -> Self {
        Error::Community(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
