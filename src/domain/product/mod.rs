// ============================================================================
// Product Domain
// ============================================================================
//
// - Entity (Product)
// - Events (ProductCreatedEvent)
// - Errors (ProductError)
// - Handlers reacting to product events
//
// ============================================================================

pub mod entity;
pub mod errors;
pub mod events;
pub mod handlers;

// Re-export for convenience
pub use entity::*;
pub use errors::*;
pub use events::*;
pub use handlers::*;
