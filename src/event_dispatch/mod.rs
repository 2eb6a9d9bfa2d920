// ============================================================================
// Event Dispatch - In-process Notification Infrastructure
// ============================================================================
//
// Generic dispatcher that routes events to handlers by exact type name.
// Domain-specific events and handlers live in src/domain/
//
// ============================================================================

pub mod dispatcher;
pub mod errors;
pub mod event;
pub mod handler;

// Re-export core types for convenience
pub use dispatcher::{EventDispatcher, SharedHandler};
pub use errors::DispatchError;
pub use event::{deserialize_event, serialize_event, DomainEvent, EventMetadata, NamedEvent};
pub use handler::EventHandler;
