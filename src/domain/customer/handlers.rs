use anyhow::Result;

use crate::domain::events::ShopEvent;
use crate::event_dispatch::{DomainEvent, EventHandler};
use super::events::{CustomerCreatedEvent, CustomerUpdateAddressEvent};

// ============================================================================
// Customer Event Handlers
// ============================================================================

/// First console notification for a new customer
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLog1Handler;

/// Second console notification for a new customer
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLog2Handler;

#[derive(Debug, Default, Clone, Copy)]
pub struct SendEmailWhenCustomerIsUpdateAddressHandler;

impl ConsoleLog1Handler {
    pub fn message(&self, event: &CustomerCreatedEvent) -> String {
        format!("This is the first console.log of event: {}", event.event_type())
    }
}

impl ConsoleLog2Handler {
    pub fn message(&self, event: &CustomerCreatedEvent) -> String {
        format!("This is the second console.log of event: {}", event.event_type())
    }
}

impl SendEmailWhenCustomerIsUpdateAddressHandler {
    pub fn message(&self, event: &CustomerUpdateAddressEvent) -> String {
        format!(
            "Address of customer {}, {} changed to: {}",
            event.customer_id, event.name, event.address
        )
    }
}

impl EventHandler<CustomerCreatedEvent> for ConsoleLog1Handler {
    fn handle(&self, event: &CustomerCreatedEvent) -> Result<()> {
        tracing::info!(customer_id = %event.customer_id, "{}", self.message(event));
        Ok(())
    }
}

impl EventHandler<CustomerCreatedEvent> for ConsoleLog2Handler {
    fn handle(&self, event: &CustomerCreatedEvent) -> Result<()> {
        tracing::info!(customer_id = %event.customer_id, "{}", self.message(event));
        Ok(())
    }
}

impl EventHandler<CustomerUpdateAddressEvent> for SendEmailWhenCustomerIsUpdateAddressHandler {
    fn handle(&self, event: &CustomerUpdateAddressEvent) -> Result<()> {
        tracing::info!(
            event_id = %event.event_id(),
            customer_id = %event.customer_id,
            "{}",
            self.message(event)
        );
        Ok(())
    }
}

// Dispatchers over the ShopEvent union hand every routed event to these
// handlers; each one only acts on its own variant.

impl EventHandler<ShopEvent> for ConsoleLog1Handler {
    fn handle(&self, event: &ShopEvent) -> Result<()> {
        match event {
            ShopEvent::CustomerCreated(e) => EventHandler::<CustomerCreatedEvent>::handle(self, e),
            other => ignore(other),
        }
    }
}

impl EventHandler<ShopEvent> for ConsoleLog2Handler {
    fn handle(&self, event: &ShopEvent) -> Result<()> {
        match event {
            ShopEvent::CustomerCreated(e) => EventHandler::<CustomerCreatedEvent>::handle(self, e),
            other => ignore(other),
        }
    }
}

impl EventHandler<ShopEvent> for SendEmailWhenCustomerIsUpdateAddressHandler {
    fn handle(&self, event: &ShopEvent) -> Result<()> {
        match event {
            ShopEvent::CustomerUpdateAddress(e) => {
                EventHandler::<CustomerUpdateAddressEvent>::handle(self, e)
            }
            other => ignore(other),
        }
    }
}

fn ignore(event: &ShopEvent) -> Result<()> {
    tracing::debug!(event_type = event.event_type(), "Ignoring unrelated event");
    Ok(())
}
