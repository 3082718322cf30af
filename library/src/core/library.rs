use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    EmptyQuery {
        message: String,
    },
    // Transport failures and non-2xx responses from the catalog. Timeouts land here too.
    Network {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // Covers both a 404 from the detail endpoint and a search that matched nothing.
    NotFound {
        message: String,
    },
    // Non-fatal: the in-memory favorites stay authoritative for the session.
    StoragePersist {
        message: String,
        reason_code: Option<String>,
    },
    // Non-fatal: a corrupt or unreadable slot is treated as an empty set.
    StorageLoad {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn empty_query(message: &str) -> LibraryError {
        LibraryError::EmptyQuery { message: message.to_string() }
    }

    pub fn network(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Network { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn storage_persist(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::StoragePersist { message: message.to_string(), reason_code }
    }

    pub fn storage_load(message: &str) -> LibraryError {
        LibraryError::StorageLoad { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    // Maps a non-success HTTP status from the catalog into the error taxonomy.
    pub fn from_status(status: u16, message: &str) -> LibraryError {
        if status == 404 {
            LibraryError::not_found(message)
        } else if status == 429 || status >= 500 {
            LibraryError::network(message, Some(status.to_string()), true)
        } else {
            LibraryError::network(message, Some(status.to_string()), false)
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::EmptyQuery { .. } => { false }
            LibraryError::Network { retryable, .. } => { *retryable }
            LibraryError::NotFound { .. } => { false }
            LibraryError::StoragePersist { .. } => { false }
            LibraryError::StorageLoad { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
        }
    }

    // Whether the error can be surfaced as a warning while the session keeps going.
    pub fn is_soft(&self) -> bool {
        matches!(self, LibraryError::StoragePersist { .. } | LibraryError::StorageLoad { .. })
    }

    // The human-readable part, without reason codes, as shown to users.
    pub fn message(&self) -> &str {
        match self {
            LibraryError::EmptyQuery { message } => { message }
            LibraryError::Network { message, .. } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::StoragePersist { message, .. } => { message }
            LibraryError::StorageLoad { message } => { message }
            LibraryError::Validation { message, .. } => { message }
            LibraryError::Serialization { message } => { message }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::storage_persist(
            format!("storage io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::EmptyQuery { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Network { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::StoragePersist { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::StorageLoad { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library core.
pub type LibraryResult<T> = Result<T, LibraryError>;
