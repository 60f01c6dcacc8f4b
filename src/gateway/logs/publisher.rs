use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogsPublisher writes every domain event to the tracing subscriber as a structured record.
#[derive(Debug)]
pub struct LogsPublisher {
    topic: String,
}

impl LogsPublisher {
    pub(crate) fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }
}

#[async_trait]
impl EventPublisher for LogsPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        tracing::info!(topic = self.topic.as_str(), event_id = event.event_id.as_str(),
            name = event.name.as_str(), key = event.key.as_str(), "domain event {}", json);
        Ok(())
    }

    async fn get_events(&self) -> Result<Vec<DomainEvent>, LibraryError> {
        Ok(vec![])
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogsPublisher;

    #[tokio::test]
    async fn test_should_publish_to_logs() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::new("test-name", "group", "key", &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        let publisher = LogsPublisher::new("events");
        let _ = publisher.publish(&event).await.expect("should publish");
        let events = publisher.get_events().await.expect("should get events");
        assert_eq!(0, events.len());
    }
}
