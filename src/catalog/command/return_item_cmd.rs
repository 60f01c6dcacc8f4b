use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub struct ReturnItemCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ReturnItemCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnItemCommandRequest {
    pub title: String,
}

impl ReturnItemCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnItemCommandResponse {
    pub item: ItemDto,
}

impl ReturnItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<ReturnItemCommandRequest, ReturnItemCommandResponse> for ReturnItemCommand {
    async fn execute(&self, req: ReturnItemCommandRequest) -> Result<ReturnItemCommandResponse, CommandError> {
        self.catalog_service.return_item(req.title.as_str())
            .await.map_err(CommandError::from).map(ReturnItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest};
    use crate::catalog::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::items::domain::LibraryItem;

    #[tokio::test]
    async fn test_should_run_return_item() {
        let svc = create_catalog_service(&Configuration::new("test")).await.expect("should create catalog");
        let borrow_cmd = BorrowItemCommand::new(svc.clone());
        let return_cmd = ReturnItemCommand::new(svc);

        let res = return_cmd.execute(ReturnItemCommandRequest::new("Tech Journal")).await;
        assert!(matches!(res, Err(CommandError::NotCurrentlyBorrowed { .. })));

        let _ = borrow_cmd.execute(BorrowItemCommandRequest::new("Tech Journal", "Alice"))
            .await.expect("should borrow item");
        let res = return_cmd.execute(ReturnItemCommandRequest::new("Tech Journal")).await.expect("should return item");
        assert!(res.item.is_available());
    }
}
