use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
    // events retained by the publisher, if it keeps any
    async fn get_events(&self) -> Result<Vec<DomainEvent>, LibraryError>;
}
