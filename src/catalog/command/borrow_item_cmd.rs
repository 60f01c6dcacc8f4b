use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub struct BorrowItemCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl BorrowItemCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowItemCommandRequest {
    pub title: String,
    pub borrower_name: String,
}

impl BorrowItemCommandRequest {
    pub fn new(title: &str, borrower_name: &str) -> Self {
        Self {
            title: title.to_string(),
            borrower_name: borrower_name.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct BorrowItemCommandResponse {
    pub item: ItemDto,
}

impl BorrowItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<BorrowItemCommandRequest, BorrowItemCommandResponse> for BorrowItemCommand {
    async fn execute(&self, req: BorrowItemCommandRequest) -> Result<BorrowItemCommandResponse, CommandError> {
        self.catalog_service.borrow(req.title.as_str(), req.borrower_name.as_str())
            .await.map_err(CommandError::from).map(BorrowItemCommandResponse::new)
    }
}
