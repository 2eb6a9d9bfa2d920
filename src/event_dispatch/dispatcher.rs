use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::errors::DispatchError;
use super::event::DomainEvent;
use super::handler::EventHandler;
use crate::metrics::DispatchMetrics;

// ============================================================================
// Event Dispatcher
// ============================================================================
//
// Registry of event-type name -> ordered handler list.
//
// - Handlers run synchronously on the caller's thread, in registration order
// - Routing is exact match on DomainEvent::event_type
// - Handler identity is the shared allocation, not structural equality
//
// ============================================================================

/// Handler shared between the registrant and the dispatcher
pub type SharedHandler<E> = Rc<dyn EventHandler<E>>;

pub struct EventDispatcher<E: ?Sized + 'static> {
    event_handlers: HashMap<String, Vec<SharedHandler<E>>>,
    metrics: Option<DispatchMetrics>,
}

impl<E: DomainEvent + ?Sized + 'static> EventDispatcher<E> {
    pub fn new() -> Self {
        Self {
            event_handlers: HashMap::new(),
            metrics: None,
        }
    }

    /// Attach Prometheus counters to every notify call
    pub fn with_metrics(mut self, metrics: DispatchMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn metrics(&self) -> Option<&DispatchMetrics> {
        self.metrics.as_ref()
    }

    /// Current registry state
    pub fn event_handlers(&self) -> &HashMap<String, Vec<SharedHandler<E>>> {
        &self.event_handlers
    }

    /// Handlers for one event type; `None` if the type was never registered
    /// (or the registry was cleared), `Some(&[])` if every handler was removed.
    pub fn handlers_for(&self, event_type: &str) -> Option<&[SharedHandler<E>]> {
        self.event_handlers.get(event_type).map(Vec::as_slice)
    }

    /// Append a handler for `event_type`. Duplicates are kept.
    pub fn register(&mut self, event_type: impl Into<String>, handler: SharedHandler<E>) {
        let event_type = event_type.into();

        tracing::debug!(
            event_type = %event_type,
            handler = handler.name(),
            "Registering event handler"
        );

        self.event_handlers.entry(event_type).or_default().push(handler);
    }

    /// Remove every registration of this handler instance under `event_type`.
    ///
    /// The key is kept even when its list becomes empty. Unknown types are a no-op.
    pub fn unregister(&mut self, event_type: &str, handler: &SharedHandler<E>) {
        let Some(handlers) = self.event_handlers.get_mut(event_type) else {
            tracing::debug!(event_type, "Unregister for unknown event type ignored");
            return;
        };

        let before = handlers.len();
        handlers.retain(|registered| !same_handler(registered, handler));

        tracing::debug!(
            event_type,
            handler = handler.name(),
            removed = before - handlers.len(),
            remaining = handlers.len(),
            "Unregistered event handler"
        );
    }

    /// Drop every registration, including the keys themselves
    pub fn unregister_all(&mut self) {
        tracing::debug!(event_types = self.event_handlers.len(), "Clearing all event handlers");
        self.event_handlers.clear();
    }

    /// Invoke every handler registered for the event's type, in order.
    ///
    /// An unregistered type is not an error. The first handler error stops
    /// dispatch and is returned; later handlers are not called.
    pub fn notify(&self, event: &E) -> Result<(), DispatchError> {
        let event_type = event.event_type();

        if let Some(metrics) = &self.metrics {
            metrics.record_notified(event_type);
        }

        let Some(handlers) = self.event_handlers.get(event_type) else {
            tracing::debug!(event_type, "No handlers registered for event");
            if let Some(metrics) = &self.metrics {
                metrics.record_unrouted(event_type);
            }
            return Ok(());
        };

        tracing::debug!(
            event_type,
            event_id = %event.event_id(),
            handlers = handlers.len(),
            "Dispatching event"
        );

        for handler in handlers {
            let outcome = handler.handle(event);

            if let Some(metrics) = &self.metrics {
                metrics.record_handler_outcome(event_type, outcome.is_ok());
            }

            outcome.map_err(|source| {
                tracing::warn!(
                    event_type,
                    handler = handler.name(),
                    error = %source,
                    "Event handler failed"
                );
                DispatchError::HandlerFailed {
                    event_type: event_type.to_string(),
                    handler: handler.name(),
                    source,
                }
            })?;
        }

        Ok(())
    }
}

impl<E: DomainEvent + ?Sized + 'static> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized + 'static> fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event_type, handlers) in &self.event_handlers {
            let names: Vec<&'static str> = handlers.iter().map(|h| h.name()).collect();
            map.entry(event_type, &names);
        }
        map.finish()
    }
}

fn same_handler<E: ?Sized>(a: &SharedHandler<E>, b: &SharedHandler<E>) -> bool {
    Rc::ptr_eq(a, b)
}

// ============================================================================
// Tests
// ============================================================================
