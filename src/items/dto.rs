use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{BorrowStatus, ItemKind};
use crate::items::domain::LibraryItem;
use crate::items::domain::model::{BorrowState, ItemEntity, ItemVariant};

// ItemDto is the item summary handed out by the Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub item_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub variant: ItemVariant,
}

impl ItemDto {
    pub fn borrow_state(&self) -> Option<&BorrowState> {
        self.variant.borrow_state()
    }
}

impl From<&ItemEntity> for ItemDto {
    fn from(other: &ItemEntity) -> Self {
        Self {
            item_id: other.item_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            variant: other.variant.clone(),
        }
    }
}

impl Identifiable for ItemDto {
    fn id(&self) -> String {
        self.item_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl LibraryItem for ItemDto {
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

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::ItemKind;
    use crate::items::domain::LibraryItem;
    use crate::items::domain::model::ItemEntity;
    use crate::items::dto::ItemDto;

    #[tokio::test]
    async fn test_should_build_dto_from_entity() {
        let entity = ItemEntity::journal("Tech Journal", "Alice Johnson", 2023, "Vol. 5");
        let dto = ItemDto::from(&entity);
        assert_eq!(entity.item_id, dto.id());
        assert_eq!("Tech Journal", dto.title.as_str());
        assert_eq!(2023, dto.year);
        assert_eq!(ItemKind::Journal, dto.kind());
        assert!(dto.is_available());
    }
}
