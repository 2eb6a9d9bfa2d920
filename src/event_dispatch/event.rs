use std::fmt;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Event Metadata
// ============================================================================

/// Identity and timing shared by every domain event.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventMetadata {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    /// Stamp a new event occurring now
    pub fn now() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

// ============================================================================
// Domain Event Traits
// ============================================================================

/// Anything the dispatcher can route.
///
/// `event_type` is the registry key: handlers registered under exactly this
/// name receive the event.
pub trait DomainEvent: fmt::Debug {
    fn event_type(&self) -> &str;
    fn metadata(&self) -> &EventMetadata;

    fn event_id(&self) -> Uuid {
        self.metadata().event_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata().occurred_at
    }
}

/// Concrete event payloads with a fixed type name, used as registration keys.
pub trait NamedEvent {
    const EVENT_TYPE: &'static str;
}

// ============================================================================
// Event Serialization Helpers
// ============================================================================

pub fn serialize_event<E: Serialize>(event: &E) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}

pub fn deserialize_event<E: for<'de> Deserialize<'de>>(json: &str) -> Result<E> {
    Ok(serde_json::from_str(json)?)
}

// ============================================================================
// Tests
// ============================================================================
