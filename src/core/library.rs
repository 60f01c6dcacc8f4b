use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
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
    // This is a retry-able error, which indicates that the item was modified by another
    // caller between the read and the write of a borrow or return.
    // The caller can reload the item and apply the transition again.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn not_borrowable(message: &str) -> LibraryError {
        LibraryError::NotBorrowable { message: message.to_string() }
    }

    pub fn already_borrowed(message: &str) -> LibraryError {
        LibraryError::AlreadyBorrowed { message: message.to_string() }
    }

    pub fn not_currently_borrowed(message: &str) -> LibraryError {
        LibraryError::NotCurrentlyBorrowed { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::NotFound { message } => { message.as_str() }
            LibraryError::NotBorrowable { message } => { message.as_str() }
            LibraryError::AlreadyBorrowed { message } => { message.as_str() }
            LibraryError::NotCurrentlyBorrowed { message } => { message.as_str() }
            LibraryError::DuplicateKey { message } => { message.as_str() }
            LibraryError::CurrentlyUnavailable { message, .. } => { message.as_str() }
            LibraryError::Validation { message, .. } => { message.as_str() }
            LibraryError::Serialization { message } => { message.as_str() }
            LibraryError::Runtime { message, .. } => { message.as_str() }
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::NotFound { .. } => { false }
            LibraryError::NotBorrowable { .. } => { false }
            LibraryError::AlreadyBorrowed { .. } => { false }
            LibraryError::NotCurrentlyBorrowed { .. } => { false }
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), None)
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
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            _ => {
                write!(f, "{}", self.message())
            }
        }
    }
}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

// It defines abstraction for paginated result
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The page number or token
    pub page: Option<String>,
    // page size
    pub page_size: usize,
    // Next page if available
    pub next_page: Option<String>,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: Option<&str>, page_size: usize,
                      next_page: Option<String>, records: Vec<T>) -> Self {
        PaginatedResult {
            page: page.map(str::to_string),
            page_size,
            next_page,
            records,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemKind {
    Book,
    Journal,
    EBook,
}

impl ItemKind {
    pub fn is_borrowable(&self) -> bool {
        matches!(self, ItemKind::Book | ItemKind::Journal)
    }

    // lower-case noun used in user facing messages
    pub fn noun(&self) -> &'static str {
        match self {
            ItemKind::Book => "book",
            ItemKind::Journal => "journal",
            ItemKind::EBook => "e-book",
        }
    }
}

impl FromStr for ItemKind {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Book" => Ok(ItemKind::Book),
            "Journal" => Ok(ItemKind::Journal),
            "EBook" => Ok(ItemKind::EBook),
            _ => Err(LibraryError::validation(
                format!("unknown item kind {}", s).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemKind::Book => write!(f, "Book"),
            ItemKind::Journal => write!(f, "Journal"),
            ItemKind::EBook => write!(f, "EBook"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BorrowStatus {
    Available,
    Borrowed,
}

impl FromStr for BorrowStatus {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(BorrowStatus::Available),
            "Borrowed" => Ok(BorrowStatus::Borrowed),
            _ => Err(LibraryError::validation(
                format!("unknown borrow status {}", s).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for BorrowStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BorrowStatus::Available => write!(f, "Available"),
            BorrowStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}
