use std::cmp;
use std::collections::HashMap;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use crate::core::library::{BorrowStatus, ItemKind, LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::items::domain::LibraryItem;
use crate::items::domain::model::ItemEntity;
use crate::items::repository::ItemRepository;

// MemoryItemRepository keeps items in insertion order for the life of the process.
#[derive(Debug)]
pub struct MemoryItemRepository {
    items: RwLock<Vec<ItemEntity>>,
}

impl MemoryItemRepository {
    pub(crate) fn new() -> Self {
        Self {
            items: RwLock::new(vec![]),
        }
    }
}

#[async_trait]
impl Repository<ItemEntity> for MemoryItemRepository {
    async fn create(&self, entity: &ItemEntity) -> LibraryResult<usize> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.item_id == entity.item_id) {
            return Err(LibraryError::duplicate_key(
                format!("item with id {} already exists", entity.item_id).as_str()));
        }
        items.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &ItemEntity) -> LibraryResult<usize> {
        let mut items = self.items.write().await;
        let existing = items.iter_mut().find(|existing| existing.item_id == entity.item_id)
            .ok_or_else(|| LibraryError::not_found(
                format!("item with id {} not found", entity.item_id).as_str()))?;
        if existing.version != entity.version {
            return Err(LibraryError::unavailable(
                format!("item {} was modified, expected version {} but found {}",
                        entity.item_id, entity.version, existing.version).as_str(),
                Some("409".to_string()), true));
        }
        let mut updated = entity.clone();
        updated.version = entity.version + 1;
        updated.updated_at = Utc::now().naive_utc();
        *existing = updated;
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<ItemEntity> {
        let items = self.items.read().await;
        items.iter().find(|item| item.item_id == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("item with id {} not found", id).as_str()))
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<ItemEntity>> {
        let offset = match page {
            Some(token) => token.parse::<usize>().map_err(|_| LibraryError::validation(
                format!("invalid page token {}", token).as_str(), Some("400".to_string())))?,
            None => 0,
        };
        let page_size = cmp::max(page_size, 1);
        let items = self.items.read().await;
        let mut matched = vec![];
        for item in items.iter() {
            if matches_predicate(item, predicate)? {
                matched.push(item);
            }
        }
        let records: Vec<ItemEntity> = matched.iter().skip(offset).take(page_size).map(|item| (*item).clone()).collect();
        let next_page = if offset + records.len() < matched.len() {
            Some((offset + records.len()).to_string())
        } else {
            None
        };
        Ok(PaginatedResult::new(page, page_size, next_page, records))
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn find_by_title(&self, title: &str) -> LibraryResult<ItemEntity> {
        let items = self.items.read().await;
        items.iter().find(|item| item.matches_title(title)).cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("No item titled '{}' exists in the catalog.", title).as_str()))
    }
}

fn matches_predicate(item: &ItemEntity, predicate: &HashMap<String, String>) -> LibraryResult<bool> {
    for (k, v) in predicate {
        let matched = match k.as_str() {
            "title" => item.matches_title(v),
            "kind" => item.kind() == v.parse::<ItemKind>()?,
            "borrow_status" => item.borrow_status() == Some(v.parse::<BorrowStatus>()?),
            _ => {
                return Err(LibraryError::validation(
                    format!("unsupported item filter {}", k).as_str(), Some("400".to_string())));
            }
        };
        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use chrono::Utc;
    use crate::core::library::{BorrowStatus, LibraryError};
    use crate::core::repository::Repository;
    use crate::items::domain::model::ItemEntity;
    use crate::items::repository::ItemRepository;
    use crate::items::repository::memory_item_repository::MemoryItemRepository;

    async fn seeded() -> MemoryItemRepository {
        let repo = MemoryItemRepository::new();
        for item in [
            ItemEntity::book("Rust in Action", "Tim McNamara", 2021, 456),
            ItemEntity::book("rust in action", "Someone Else", 2022, 10),
            ItemEntity::journal("Systems Quarterly", "Ann Lee", 2023, "Vol. 2"),
            ItemEntity::ebook("Async Rust", "Maxwell Flitton", 2024, "EPUB"),
        ] {
            let _ = repo.create(&item).await.expect("should create item");
        }
        repo
    }

    #[tokio::test]
    async fn test_should_create_and_get_item() {
        let repo = MemoryItemRepository::new();
        let item = ItemEntity::book("title", "author", 2000, 100);
        let _ = repo.create(&item).await.expect("should create item");
        let loaded = repo.get(item.item_id.as_str()).await.expect("should get item");
        assert_eq!(item, loaded);
        assert!(matches!(repo.create(&item).await, Err(LibraryError::DuplicateKey { .. })));
        assert!(matches!(repo.get("missing").await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_find_first_title_match() {
        let repo = seeded().await;
        let found = repo.find_by_title("RUST IN ACTION").await.expect("should find item");
        assert_eq!("Tim McNamara", found.author.as_str());
        assert!(matches!(repo.find_by_title("Missing").await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_update_with_matching_version() {
        let repo = seeded().await;
        let mut item = repo.find_by_title("Systems Quarterly").await.expect("should find item");
        let stale = item.clone();
        let _ = item.borrow("Alice", Utc::now().naive_utc()).expect("should borrow");
        let _ = repo.update(&item).await.expect("should update item");

        let loaded = repo.get(item.item_id.as_str()).await.expect("should get item");
        assert_eq!(1, loaded.version);
        assert_eq!(item.borrow_state(), loaded.borrow_state());

        let res = repo.update(&stale).await;
        assert!(matches!(res, Err(LibraryError::CurrentlyUnavailable { retryable: true, .. })));
    }

    #[tokio::test]
    async fn test_should_query_by_predicate() {
        let repo = seeded().await;
        let all = repo.query(&HashMap::new(), None, 100).await.expect("should query");
        assert_eq!(4, all.records.len());
        assert_eq!(None, all.next_page);

        let available = repo.query(&HashMap::from([
            ("borrow_status".to_string(), BorrowStatus::Available.to_string())]), None, 100).await.expect("should query");
        assert_eq!(3, available.records.len());

        let books = repo.query(&HashMap::from([("kind".to_string(), "Book".to_string())]), None, 100).await.expect("should query");
        assert_eq!(2, books.records.len());

        assert!(repo.query(&HashMap::from([("isbn".to_string(), "1".to_string())]), None, 100).await.is_err());
    }

    #[tokio::test]
    async fn test_should_reject_unknown_predicate_values() {
        let repo = seeded().await;
        let res = repo.query(&HashMap::from([("kind".to_string(), "Magazine".to_string())]), None, 100).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        let res = repo.query(&HashMap::from([("borrow_status".to_string(), "Lost".to_string())]), None, 100).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));

        let ebooks = repo.query(&HashMap::from([("kind".to_string(), "EBook".to_string())]), None, 100).await.expect("should query");
        assert_eq!(1, ebooks.records.len());
        let borrowed = repo.query(&HashMap::from([
            ("borrow_status".to_string(), "Borrowed".to_string())]), None, 100).await.expect("should query");
        assert!(borrowed.records.is_empty());
    }

    #[tokio::test]
    async fn test_should_paginate_query() {
        let repo = seeded().await;
        let first = repo.query(&HashMap::new(), None, 3).await.expect("should query");
        assert_eq!(3, first.records.len());
        assert_eq!(Some("3".to_string()), first.next_page);
        let second = repo.query(&HashMap::new(), first.next_page.as_deref(), 3).await.expect("should query");
        assert_eq!(1, second.records.len());
        assert_eq!("Async Rust", second.records[0].title.as_str());
        assert_eq!(None, second.next_page);
        assert!(repo.query(&HashMap::new(), Some("abc"), 3).await.is_err());
    }
}
