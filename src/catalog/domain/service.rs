use std::cmp;
use std::collections::HashMap;
use async_trait::async_trait;
use chrono::Utc;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BorrowStatus, LibraryResult};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;
use crate::items::domain::model::{BorrowState, ItemEntity};
use crate::items::dto::ItemDto;
use crate::items::repository::ItemRepository;

const QUERY_PAGE_SIZE: usize = 100;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    max_update_attempts: usize,
    item_repository: Box<dyn ItemRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, item_repository: Box<dyn ItemRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            max_update_attempts: cmp::max(config.max_update_attempts, 1),
            item_repository,
            events_publisher,
        }
    }

    async fn query_all(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<ItemDto>> {
        let mut records = vec![];
        let mut page: Option<String> = None;
        loop {
            let res = self.item_repository.query(predicate, page.as_deref(), QUERY_PAGE_SIZE).await?;
            records.extend(res.records.iter().map(ItemDto::from));
            match res.next_page {
                Some(next) => page = Some(next),
                None => return Ok(records),
            }
        }
    }

    // Loads the first item matching the title, applies the state change and writes it back.
    // A concurrent write of the same item makes the update fail with a retryable error, in
    // which case the item is loaded again and the change re-applied to the fresh state.
    async fn transition<F>(&self, title: &str, apply: F) -> LibraryResult<ItemEntity>
        where F: Fn(&mut ItemEntity) -> LibraryResult<BorrowState> + Send + Sync {
        let mut attempt = 1;
        loop {
            let mut item = self.item_repository.find_by_title(title).await?;
            let _ = apply(&mut item)?;
            match self.item_repository.update(&item).await {
                Ok(_) => {
                    item.version += 1;
                    return Ok(item);
                }
                Err(err) if err.retryable() && attempt < self.max_update_attempts => {
                    tracing::warn!(title, attempt, "retrying conflicting update: {}", err);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    // The state change is already stored when this runs, so a failed publish is only logged.
    async fn publish(&self, name: &str, item: &ItemDto, mut metadata: HashMap<String, String>) {
        metadata.insert("branch_id".to_string(), self.branch_id.to_string());
        let published = match DomainEvent::new(name, "items", item.item_id.as_str(), &metadata, item) {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(err.into()),
        };
        if let Err(err) = published {
            tracing::warn!(name, item_id = item.item_id.as_str(), "failed to publish event: {}", err);
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_all(&self) -> LibraryResult<Vec<ItemDto>> {
        self.query_all(&HashMap::new()).await
    }

    async fn list_available(&self) -> LibraryResult<Vec<ItemDto>> {
        self.query_all(&HashMap::from([
            ("borrow_status".to_string(), BorrowStatus::Available.to_string())])).await
    }

    async fn find_by_title(&self, title: &str) -> LibraryResult<ItemDto> {
        tracing::debug!(title, "looking up item");
        self.item_repository.find_by_title(title).await.map(|item| ItemDto::from(&item))
    }

    async fn borrow(&self, title: &str, borrower_name: &str) -> LibraryResult<ItemDto> {
        let borrowed_at = Utc::now().naive_utc();
        let item = self.transition(title, |item| item.borrow(borrower_name, borrowed_at)).await
            .map_err(|err| {
                tracing::warn!(title, borrower_name, "borrow rejected: {}", err);
                err
            })?;
        let dto = ItemDto::from(&item);
        tracing::info!(item_id = dto.item_id.as_str(), title = dto.title.as_str(), borrower_name, "item borrowed");
        self.publish("item_borrowed", &dto, HashMap::from([
            ("borrower_name".to_string(), borrower_name.trim().to_string())])).await;
        Ok(dto)
    }

    async fn return_item(&self, title: &str) -> LibraryResult<ItemDto> {
        let item = self.transition(title, |item| item.returned()).await
            .map_err(|err| {
                tracing::warn!(title, "return rejected: {}", err);
                err
            })?;
        let dto = ItemDto::from(&item);
        tracing::info!(item_id = dto.item_id.as_str(), title = dto.title.as_str(), "item returned");
        self.publish("item_returned", &dto, HashMap::new()).await;
        Ok(dto)
    }
}
