pub mod memory_item_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::items::domain::model::ItemEntity;

#[async_trait]
pub trait ItemRepository : Repository<ItemEntity> {
    // first item in catalog order whose title matches without regard to case
    async fn find_by_title(&self, title: &str) -> LibraryResult<ItemEntity>;
}
