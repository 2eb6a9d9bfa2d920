use serde::{Deserialize, Serialize};

use crate::event_dispatch::{DomainEvent, EventMetadata};
use super::customer::{CustomerCreatedEvent, CustomerUpdateAddressEvent};
use super::product::ProductCreatedEvent;

// ============================================================================
// Shop Events - Union of every event the domain produces
// ============================================================================

/// Routed by the payload's type name, so a dispatcher over `ShopEvent`
/// serves customers and products alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShopEvent {
    CustomerCreated(CustomerCreatedEvent),
    CustomerUpdateAddress(CustomerUpdateAddressEvent),
    ProductCreated(ProductCreatedEvent),
}

impl DomainEvent for ShopEvent {
    fn event_type(&self) -> &str {
        match self {
            ShopEvent::CustomerCreated(e) => e.event_type(),
            ShopEvent::CustomerUpdateAddress(e) => e.event_type(),
            ShopEvent::ProductCreated(e) => e.event_type(),
        }
    }

    fn metadata(&self) -> &EventMetadata {
        match self {
            ShopEvent::CustomerCreated(e) => e.metadata(),
            ShopEvent::CustomerUpdateAddress(e) => e.metadata(),
            ShopEvent::ProductCreated(e) => e.metadata(),
        }
    }
}

impl From<CustomerCreatedEvent> for ShopEvent {
    fn from(event: CustomerCreatedEvent) -> Self {
        ShopEvent::CustomerCreated(event)
    }
}

impl From<CustomerUpdateAddressEvent> for ShopEvent {
    fn from(event: CustomerUpdateAddressEvent) -> Self {
        ShopEvent::CustomerUpdateAddress(event)
    }
}

impl From<ProductCreatedEvent> for ShopEvent {
    fn from(event: ProductCreatedEvent) -> Self {
        ShopEvent::ProductCreated(event)
    }
}
