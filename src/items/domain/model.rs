use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{BorrowStatus, ItemKind, LibraryError, LibraryResult};
use crate::items::domain::LibraryItem;
use crate::utils::date::serializer;

// BorrowState tracks who holds a borrowable item. It is replaced as a whole on every
// transition so the borrower and the timestamp never disagree.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum BorrowState {
    Available,
    Borrowed {
        borrower_name: String,
        #[serde(with = "serializer")]
        borrowed_at: NaiveDateTime,
    },
}

impl BorrowState {
    pub fn status(&self) -> BorrowStatus {
        match self {
            BorrowState::Available => BorrowStatus::Available,
            BorrowState::Borrowed { .. } => BorrowStatus::Borrowed,
        }
    }
}

// ItemVariant holds the fields that differ between books, journals and e-books.
// Only books and journals carry a borrow state.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ItemVariant {
    Book {
        page_count: i32,
        borrow_state: BorrowState,
    },
    Journal {
        issue: String,
        borrow_state: BorrowState,
    },
    EBook {
        file_format: String,
    },
}

impl ItemVariant {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemVariant::Book { .. } => ItemKind::Book,
            ItemVariant::Journal { .. } => ItemKind::Journal,
            ItemVariant::EBook { .. } => ItemKind::EBook,
        }
    }

    pub fn borrow_state(&self) -> Option<&BorrowState> {
        match self {
            ItemVariant::Book { borrow_state, .. } => Some(borrow_state),
            ItemVariant::Journal { borrow_state, .. } => Some(borrow_state),
            ItemVariant::EBook { .. } => None,
        }
    }

    fn borrow_state_mut(&mut self) -> Option<&mut BorrowState> {
        match self {
            ItemVariant::Book { borrow_state, .. } => Some(borrow_state),
            ItemVariant::Journal { borrow_state, .. } => Some(borrow_state),
            ItemVariant::EBook { .. } => None,
        }
    }
}

// ItemEntity abstracts a catalog record; the catalog keeps them in insertion order.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ItemEntity {
    pub item_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub variant: ItemVariant,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl ItemEntity {
    pub fn new(title: &str, author: &str, year: i32, variant: ItemVariant) -> Self {
        Self {
            item_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            year,
            variant,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn book(title: &str, author: &str, year: i32, page_count: i32) -> Self {
        Self::new(title, author, year, ItemVariant::Book { page_count, borrow_state: BorrowState::Available })
    }

    pub fn journal(title: &str, author: &str, year: i32, issue: &str) -> Self {
        Self::new(title, author, year, ItemVariant::Journal { issue: issue.to_string(), borrow_state: BorrowState::Available })
    }

    pub fn ebook(title: &str, author: &str, year: i32, file_format: &str) -> Self {
        Self::new(title, author, year, ItemVariant::EBook { file_format: file_format.to_string() })
    }

    pub fn borrow_state(&self) -> Option<&BorrowState> {
        self.variant.borrow_state()
    }

    // Available -> Borrowed
    pub fn borrow(&mut self, borrower_name: &str, borrowed_at: NaiveDateTime) -> LibraryResult<BorrowState> {
        self.check_borrowable()?;
        let borrower_name = borrower_name.trim();
        if borrower_name.is_empty() {
            return Err(LibraryError::validation(
                format!("a borrower name is required to borrow '{}'", self.title).as_str(), Some("400".to_string())));
        }
        self.replace_state(BorrowState::Borrowed { borrower_name: borrower_name.to_string(), borrowed_at })
    }

    // Borrowed -> Available
    pub fn returned(&mut self) -> LibraryResult<BorrowState> {
        self.check_returnable()?;
        self.replace_state(BorrowState::Available)
    }

    fn replace_state(&mut self, next: BorrowState) -> LibraryResult<BorrowState> {
        let title = self.title.to_string();
        let state = self.variant.borrow_state_mut().ok_or_else(|| LibraryError::not_borrowable(
            format!("'{}' has no borrow state", title).as_str()))?;
        *state = next;
        Ok(state.clone())
    }
}

impl Identifiable for ItemEntity {
    fn id(&self) -> String {
        self.item_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl LibraryItem for ItemEntity {
    fn kind(&self) -> ItemKind {
        self.variant.kind()
    }

    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn borrow_status(&self) -> Option<BorrowStatus> {
        self.variant.borrow_state().map(BorrowState::status)
    }
}
