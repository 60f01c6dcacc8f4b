use crate::items::domain::model::{BorrowState, ItemVariant};
use crate::items::dto::ItemDto;
use crate::utils::date::short_date;

// Renders the two console lines shown for an item: its description and its availability.
pub fn render_item(item: &ItemDto) -> String {
    match &item.variant {
        ItemVariant::Book { page_count, borrow_state } => {
            format!("Book: {} by {}, Year: {}, Pages: {}\n{}",
                    item.title, item.author, item.year, page_count, render_state(borrow_state))
        }
        ItemVariant::Journal { issue, borrow_state } => {
            format!("Journal: {} by {}, Year: {}, Issue: {}\n{}",
                    item.title, item.author, item.year, issue, render_state(borrow_state))
        }
        ItemVariant::EBook { file_format } => {
            format!("EBook: {} by {}, Year: {}, Format: {}\nEBook is not available for borrowing.",
                    item.title, item.author, item.year, file_format)
        }
    }
}

fn render_state(state: &BorrowState) -> String {
    match state {
        BorrowState::Available => "Available for borrowing.".to_string(),
        BorrowState::Borrowed { borrower_name, borrowed_at } => {
            format!("Currently borrowed by {} on {}", borrower_name, short_date(borrowed_at))
        }
    }
}
