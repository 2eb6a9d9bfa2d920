use anyhow::Result;

use crate::domain::events::ShopEvent;
use crate::event_dispatch::{DomainEvent, EventHandler};
use super::events::ProductCreatedEvent;

// ============================================================================
// Product Event Handlers
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct SendEmailWhenProductIsCreatedHandler;

impl SendEmailWhenProductIsCreatedHandler {
    pub fn message(&self, event: &ProductCreatedEvent) -> String {
        format!(
            "Sending email to catalog subscribers: product {} ({}) created at {:.2}: {}",
            event.name, event.product_id, event.price, event.description
        )
    }
}

impl EventHandler<ProductCreatedEvent> for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &ProductCreatedEvent) -> Result<()> {
        tracing::info!(
            event_id = %event.event_id(),
            product_id = %event.product_id,
            "{}",
            self.message(event)
        );
        Ok(())
    }
}

impl EventHandler<ShopEvent> for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &ShopEvent) -> Result<()> {
        match event {
            ShopEvent::ProductCreated(e) => EventHandler::<ProductCreatedEvent>::handle(self, e),
            other => {
                tracing::debug!(event_type = other.event_type(), "Ignoring unrelated event");
                Ok(())
            }
        }
    }
}
