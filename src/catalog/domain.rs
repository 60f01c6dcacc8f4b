pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::items::dto::ItemDto;

#[async_trait]
pub trait CatalogService: Sync + Send {
    // every item in catalog order
    async fn list_all(&self) -> LibraryResult<Vec<ItemDto>>;
    // borrowable items that nobody holds right now, in catalog order
    async fn list_available(&self) -> LibraryResult<Vec<ItemDto>>;
    async fn find_by_title(&self, title: &str) -> LibraryResult<ItemDto>;
    async fn borrow(&self, title: &str, borrower_name: &str) -> LibraryResult<ItemDto>;
    async fn return_item(&self, title: &str) -> LibraryResult<ItemDto>;
}
