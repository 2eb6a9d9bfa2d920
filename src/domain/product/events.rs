use serde::{Deserialize, Serialize};

use crate::event_dispatch::{DomainEvent, EventMetadata, NamedEvent};

// ============================================================================
// Product Domain Events
// ============================================================================

/// Product Created - a product became available in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreatedEvent {
    pub metadata: EventMetadata,
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ProductCreatedEvent {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            metadata: EventMetadata::now(),
            product_id: product_id.into(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

impl NamedEvent for ProductCreatedEvent {
    const EVENT_TYPE: &'static str = "ProductCreatedEvent";
}

impl DomainEvent for ProductCreatedEvent {
    fn event_type(&self) -> &str {
        Self::EVENT_TYPE
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
