use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes domain events to the structured log instead of a broker.
#[derive(Debug)]
pub struct LogPublisher {
    source: String,
}

impl LogPublisher {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let created_at = event.created_at.format(crate::utils::date::DATE_FMT).to_string();
        info!(source = %self.source,
            event_id = %event.event_id,
            name = %event.name,
            key = %event.key,
            kind = %event.kind,
            created_at = %created_at,
            data = %event.json_data,
            "domain event published");
        Ok(())
    }
}
