use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    NotBorrowable {
        message: String,
    },
    AlreadyBorrowed {
        message: String,
    },
    NotCurrentlyBorrowed {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::NotFound { message } => { message.as_str() }
            CommandError::NotBorrowable { message } => { message.as_str() }
            CommandError::AlreadyBorrowed { message } => { message.as_str() }
            CommandError::NotCurrentlyBorrowed { message } => { message.as_str() }
            CommandError::DuplicateKey { message } => { message.as_str() }
            CommandError::Runtime { message, .. } => { message.as_str() }
            CommandError::Serialization { message } => { message.as_str() }
            CommandError::Validation { message, .. } => { message.as_str() }
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::NotBorrowable { message } => {
                CommandError::NotBorrowable { message }
            }
            LibraryError::AlreadyBorrowed { message } => {
                CommandError::AlreadyBorrowed { message }
            }
            LibraryError::NotCurrentlyBorrowed { message } => {
                CommandError::NotCurrentlyBorrowed { message }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::not_found("a")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_borrowable("a")), CommandError::NotBorrowable { .. }));
        assert!(matches!(CommandError::from(LibraryError::already_borrowed("a")), CommandError::AlreadyBorrowed { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_currently_borrowed("a")), CommandError::NotCurrentlyBorrowed { .. }));
        assert!(matches!(CommandError::from(LibraryError::unavailable("a", None, true)), CommandError::Runtime { retryable: true, .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("a", None)), CommandError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_should_keep_message() {
        let err = CommandError::from(LibraryError::already_borrowed("The book 'x' is already borrowed."));
        assert_eq!("The book 'x' is already borrowed.", err.message());
    }
}
