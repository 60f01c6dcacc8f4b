use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub struct ListItemsCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListItemsCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListItemsCommandRequest {
    pub available_only: bool,
}

impl ListItemsCommandRequest {
    pub fn all() -> Self {
        Self {
            available_only: false,
        }
    }

    pub fn available() -> Self {
        Self {
            available_only: true,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ListItemsCommandResponse {
    pub items: Vec<ItemDto>,
}

impl ListItemsCommandResponse {
    pub fn new(items: Vec<ItemDto>) -> Self {
        Self {
            items,
        }
    }
}

#[async_trait]
impl Command<ListItemsCommandRequest, ListItemsCommandResponse> for ListItemsCommand {
    async fn execute(&self, req: ListItemsCommandRequest) -> Result<ListItemsCommandResponse, CommandError> {
        let res = if req.available_only {
            self.catalog_service.list_available().await
        } else {
            self.catalog_service.list_all().await
        };
        res.map_err(CommandError::from).map(ListItemsCommandResponse::new)
    }
}
