// ============================================================================
// Customer Domain
// ============================================================================
//
// - Value objects (Address)
// - Entity (Customer)
// - Events (CustomerCreatedEvent, CustomerUpdateAddressEvent)
// - Errors (CustomerError)
// - Handlers reacting to customer events
//
// ============================================================================

pub mod value_objects;
pub mod entity;
pub mod events;
pub mod errors;
pub mod handlers;

// Re-export for convenience
pub use value_objects::*;
pub use entity::*;
pub use events::*;
pub use errors::*;
pub use handlers::*;
