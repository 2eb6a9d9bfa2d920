//! In-process domain event notification for a small shop model.
//!
//! [`event_dispatch::EventDispatcher`] keeps an ordered list of handlers per
//! event-type name and calls them synchronously when an event is notified.
//! The [`domain`] module supplies the customers, products and addresses that
//! produce events, plus the handlers that react to them.

pub mod domain;
pub mod event_dispatch;
pub mod metrics;
