pub mod domain;
pub mod command {
    pub mod borrow_item_cmd;
    pub mod get_item_cmd;
    pub mod list_items_cmd;
    pub mod return_item_cmd;
}
pub mod controller;
pub mod factory;
pub mod view;
