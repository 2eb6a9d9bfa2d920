// ============================================================================
// Domain Layer - Event Producers and Handlers
// ============================================================================
//
// Each area has its own subdirectory with:
// - Entities / value objects
// - Events
// - Errors
// - Handlers
//
// This layer only depends on the dispatch capability traits, never on the
// dispatcher's internals.
//
// ============================================================================

pub mod customer;
pub mod events;
pub mod product;

pub use events::ShopEvent;

#[cfg(test)]
mod dispatch_tests;
