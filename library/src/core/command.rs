use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    Network {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::EmptyQuery { message } => {
                CommandError::Validation { message, reason_code: None }
            }
            LibraryError::Network { message, reason_code, retryable } => {
                CommandError::Network { message, reason_code, retryable }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::StoragePersist { message, reason_code } => {
                CommandError::Storage { message, reason_code }
            }
            LibraryError::StorageLoad { message } => {
                CommandError::Storage { message, reason_code: None }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::Network { message: "test".to_string(), reason_code: None, retryable: false };
        let _ = CommandError::Storage { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Other { message: "test".to_string(), reason_code: None };
    }

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::empty_query("q")), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_found("id")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::storage_load("bad")), CommandError::Storage { .. }));
        assert!(matches!(CommandError::from(LibraryError::network("down", None, true)), CommandError::Network { retryable: true, .. }));
    }
}
