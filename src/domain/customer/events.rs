use serde::{Deserialize, Serialize};

use crate::event_dispatch::{DomainEvent, EventMetadata, NamedEvent};
use super::value_objects::Address;

// ============================================================================
// Customer Domain Events
// ============================================================================

/// Customer Created - a new customer entered the system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreatedEvent {
    pub metadata: EventMetadata,
    pub customer_id: String,
    pub name: String,
    pub address: Option<Address>,
}

impl CustomerCreatedEvent {
    pub fn new(customer_id: impl Into<String>, name: impl Into<String>, address: Option<Address>) -> Self {
        Self {
            metadata: EventMetadata::now(),
            customer_id: customer_id.into(),
            name: name.into(),
            address,
        }
    }
}

impl NamedEvent for CustomerCreatedEvent {
    const EVENT_TYPE: &'static str = "CustomerCreatedEvent";
}

impl DomainEvent for CustomerCreatedEvent {
    fn event_type(&self) -> &str {
        Self::EVENT_TYPE
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

/// Customer Address Changed - carries the address now in effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerUpdateAddressEvent {
    pub metadata: EventMetadata,
    pub customer_id: String,
    pub name: String,
    pub address: Address,
}

impl CustomerUpdateAddressEvent {
    pub fn new(customer_id: impl Into<String>, name: impl Into<String>, address: Address) -> Self {
        Self {
            metadata: EventMetadata::now(),
            customer_id: customer_id.into(),
            name: name.into(),
            address,
        }
    }
}

impl NamedEvent for CustomerUpdateAddressEvent {
    const EVENT_TYPE: &'static str = "CustomerUpdateAddressEvent";
}

impl DomainEvent for CustomerUpdateAddressEvent {
    fn event_type(&self) -> &str {
        Self::EVENT_TYPE
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
