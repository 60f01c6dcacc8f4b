use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use crate::catalog::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest};
use crate::catalog::command::get_item_cmd::{GetItemCommand, GetItemCommandRequest};
use crate::catalog::command::list_items_cmd::{ListItemsCommand, ListItemsCommandRequest};
use crate::catalog::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::view::render_item;
use crate::core::command::Command;
use crate::core::library::LibraryResult;
use crate::items::domain::LibraryItem;

const MENU: &str = "\nLibrary Management System\n\
1. Show all items\n\
2. Show available items for borrowing\n\
3. Borrow an item\n\
4. Return an item\n\
5. Exit\n\
Choose an option: ";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    ShowAll,
    ShowAvailable,
    Borrow,
    Return,
    Exit,
    Invalid,
}

impl From<&str> for MenuChoice {
    fn from(s: &str) -> Self {
        match s {
            "1" => MenuChoice::ShowAll,
            "2" => MenuChoice::ShowAvailable,
            "3" => MenuChoice::Borrow,
            "4" => MenuChoice::Return,
            "5" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

// Controller runs the console menu loop, one command per iteration, until the exit option
// is chosen or the input ends.
pub struct Controller<R, W> {
    catalog_service: Arc<dyn CatalogService>,
    reader: R,
    writer: W,
}

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> Controller<R, W> {
    pub fn new(catalog_service: Arc<dyn CatalogService>, reader: R, writer: W) -> Self {
        Self {
            catalog_service,
            reader,
            writer,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub async fn run(&mut self) -> LibraryResult<()> {
        loop {
            self.write(MENU).await?;
            let choice = match self.read_line().await? {
                Some(line) => MenuChoice::from(line.as_str()),
                None => return Ok(()),
            };
            tracing::debug!(?choice, "menu choice");
            match choice {
                MenuChoice::ShowAll => self.show_items(ListItemsCommandRequest::all()).await?,
                MenuChoice::ShowAvailable => self.show_items(ListItemsCommandRequest::available()).await?,
                MenuChoice::Borrow => self.borrow_item().await?,
                MenuChoice::Return => self.return_item().await?,
                MenuChoice::Exit => return Ok(()),
                MenuChoice::Invalid => self.write_line("Invalid choice. Please try again.").await?,
            }
        }
    }

    async fn show_items(&mut self, req: ListItemsCommandRequest) -> LibraryResult<()> {
        match ListItemsCommand::new(self.catalog_service.clone()).execute(req).await {
            Ok(res) => {
                for item in &res.items {
                    self.write_line(render_item(item).as_str()).await?;
                }
                Ok(())
            }
            Err(err) => self.write_line(err.message()).await,
        }
    }

    async fn borrow_item(&mut self) -> LibraryResult<()> {
        self.write("Enter the title of the item you want to borrow: ").await?;
        let title = self.read_line().await?.unwrap_or_default();
        let item = match GetItemCommand::new(self.catalog_service.clone())
            .execute(GetItemCommandRequest::new(title.as_str())).await {
            Ok(res) => res.item,
            Err(err) => return self.write_line(err.message()).await,
        };
        if let Err(err) = item.check_borrowable() {
            return self.write_line(err.message()).await;
        }

        self.write("Enter your name: ").await?;
        let borrower_name = self.read_line().await?.unwrap_or_default();
        match BorrowItemCommand::new(self.catalog_service.clone())
            .execute(BorrowItemCommandRequest::new(title.as_str(), borrower_name.as_str())).await {
            Ok(res) => {
                let message = format!("The {} '{}' has been borrowed by {}.",
                                      res.item.kind().noun(), res.item.title, borrower_name);
                self.write_line(message.as_str()).await
            }
            Err(err) => self.write_line(err.message()).await,
        }
    }

    async fn return_item(&mut self) -> LibraryResult<()> {
        self.write("Enter the title of the item you want to return: ").await?;
        let title = self.read_line().await?.unwrap_or_default();
        match ReturnItemCommand::new(self.catalog_service.clone())
            .execute(ReturnItemCommandRequest::new(title.as_str())).await {
            Ok(res) => {
                let message = format!("The {} '{}' has been returned.", res.item.kind().noun(), res.item.title);
                self.write_line(message.as_str()).await
            }
            Err(err) => self.write_line(err.message()).await,
        }
    }

    // None once the input is exhausted; only the line ending is stripped
    async fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let line = line.strip_suffix('\n').unwrap_or(line.as_str());
        Ok(Some(line.strip_suffix('\r').unwrap_or(line).to_string()))
    }

    async fn write(&mut self, text: &str) -> LibraryResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> LibraryResult<()> {
        self.write(format!("{}\n", text).as_str()).await
    }
}
