use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::items::domain::model::ItemEntity;
use crate::items::repository::ItemRepository;
use crate::items::repository::memory_item_repository::MemoryItemRepository;

// items the catalog starts with on every run
pub fn seed_items() -> Vec<ItemEntity> {
    vec![
        ItemEntity::book("C# Programming", "John Doe", 2020, 300),
        ItemEntity::book("Mastering Algorithms", "Jane Smith", 2018, 450),
        ItemEntity::journal("Tech Journal", "Alice Johnson", 2023, "Vol. 5"),
        ItemEntity::ebook("Digital Transformation", "Michael Lee", 2022, "PDF"),
    ]
}

pub(crate) async fn create_item_repository(seed: Vec<ItemEntity>) -> LibraryResult<Box<dyn ItemRepository>> {
    let repo = MemoryItemRepository::new();
    for item in &seed {
        let _ = repo.create(item).await?;
    }
    Ok(Box::new(repo))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::library::ItemKind;
    use crate::core::repository::Repository;
    use crate::items::domain::LibraryItem;
    use crate::items::factory::{create_item_repository, seed_items};

    #[tokio::test]
    async fn test_should_seed_items() {
        let kinds: Vec<ItemKind> = seed_items().iter().map(|item| item.kind()).collect();
        assert_eq!(vec![ItemKind::Book, ItemKind::Book, ItemKind::Journal, ItemKind::EBook], kinds);
        assert!(seed_items().iter().all(|item| item.version == 0));
    }

    #[tokio::test]
    async fn test_should_create_seeded_repository() {
        let repo = create_item_repository(seed_items()).await.expect("should create repository");
        let res = repo.query(&HashMap::new(), None, 100).await.expect("should query");
        let titles: Vec<&str> = res.records.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(vec!["C# Programming", "Mastering Algorithms", "Tech Journal", "Digital Transformation"], titles);
    }
}
