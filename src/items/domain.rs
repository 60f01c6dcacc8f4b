use crate::core::domain::Identifiable;
use crate::core::library::{BorrowStatus, ItemKind, LibraryError, LibraryResult};

pub mod model;

pub trait LibraryItem: Identifiable {
    fn kind(&self) -> ItemKind;
    fn title(&self) -> &str;
    // None for items that cannot be borrowed
    fn borrow_status(&self) -> Option<BorrowStatus>;

    fn is_borrowable(&self) -> bool {
        self.kind().is_borrowable()
    }

    fn is_available(&self) -> bool {
        self.borrow_status() == Some(BorrowStatus::Available)
    }

    // titles compare without regard to case
    fn matches_title(&self, title: &str) -> bool {
        self.title().to_lowercase() == title.to_lowercase()
    }

    fn check_borrowable(&self) -> LibraryResult<()> {
        if !self.is_borrowable() {
            return Err(LibraryError::not_borrowable(
                format!("The {} '{}' is not available for borrowing.", self.kind().noun(), self.title()).as_str()));
        }
        match self.borrow_status() {
            Some(BorrowStatus::Available) => Ok(()),
            _ => Err(LibraryError::already_borrowed(
                format!("The {} '{}' is already borrowed.", self.kind().noun(), self.title()).as_str())),
        }
    }

    fn check_returnable(&self) -> LibraryResult<()> {
        if !self.is_borrowable() {
            return Err(LibraryError::not_borrowable(
                format!("The {} '{}' cannot be borrowed or returned.", self.kind().noun(), self.title()).as_str()));
        }
        match self.borrow_status() {
            Some(BorrowStatus::Borrowed) => Ok(()),
            _ => Err(LibraryError::not_currently_borrowed(
                format!("The {} '{}' was not borrowed.", self.kind().noun(), self.title()).as_str())),
        }
    }
}
