use prometheus::{IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus counters for event dispatch
// ============================================================================
//
// Counts, per event type:
// - events passed to notify
// - events with no registry entry
// - handler invocations and failures
//
// Metrics live in a private registry; callers gather it however they like.
// ============================================================================

#[derive(Clone)]
pub struct DispatchMetrics {
    registry: Registry,

    pub events_notified: IntCounterVec,
    pub events_unrouted: IntCounterVec,
    pub handler_invocations: IntCounterVec,
    pub handler_failures: IntCounterVec,
}

impl DispatchMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let events_notified = IntCounterVec::new(
            Opts::new("events_notified_total", "Total events passed to the dispatcher"),
            &["event_type"],
        )?;
        registry.register(Box::new(events_notified.clone()))?;

        let events_unrouted = IntCounterVec::new(
            Opts::new("events_unrouted_total", "Events with no registered handler list"),
            &["event_type"],
        )?;
        registry.register(Box::new(events_unrouted.clone()))?;

        let handler_invocations = IntCounterVec::new(
            Opts::new("handler_invocations_total", "Handler calls that completed successfully"),
            &["event_type"],
        )?;
        registry.register(Box::new(handler_invocations.clone()))?;

        let handler_failures = IntCounterVec::new(
            Opts::new("handler_failures_total", "Handler calls that returned an error"),
            &["event_type"],
        )?;
        registry.register(Box::new(handler_failures.clone()))?;

        Ok(Self {
            registry,
            events_notified,
            events_unrouted,
            handler_invocations,
            handler_failures,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_notified(&self, event_type: &str) {
        self.events_notified.with_label_values(&[event_type]).inc();
    }

    pub fn record_unrouted(&self, event_type: &str) {
        self.events_unrouted.with_label_values(&[event_type]).inc();
    }

    pub fn record_handler_outcome(&self, event_type: &str, success: bool) {
        if success {
            self.handler_invocations.with_label_values(&[event_type]).inc();
        } else {
            self.handler_failures.with_label_values(&[event_type]).inc();
        }
    }
}
