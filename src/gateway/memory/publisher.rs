use std::collections::VecDeque;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

const MAX_RETAINED_EVENTS: usize = 1000;

// MemoryPublisher keeps the most recent events, dropping the oldest once full.
#[derive(Debug)]
pub struct MemoryPublisher {
    capacity: usize,
    events: Mutex<VecDeque<DomainEvent>>,
}

impl MemoryPublisher {
    pub(crate) fn new() -> Self {
        Self::with_capacity(MAX_RETAINED_EVENTS)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            events: Mutex::new(VecDeque::new()),
        }
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        tracing::debug!(event_id = event.event_id.as_str(), name = event.name.as_str(), "retaining domain event");
        let mut events = self.events.lock().await;
        if events.len() == self.capacity {
            let _ = events.pop_front();
        }
        events.push_back(event.clone());
        Ok(())
    }

    async fn get_events(&self) -> Result<Vec<DomainEvent>, LibraryError> {
        Ok(self.events.lock().await.iter().cloned().collect())
    }
}
