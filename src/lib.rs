pub mod core {
    pub mod command;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
}
pub mod utils {
    pub mod date;
    pub mod logs;
}
pub mod catalog;
pub mod gateway;
pub mod items;
