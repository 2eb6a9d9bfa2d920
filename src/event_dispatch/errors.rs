// ============================================================================
// Dispatch Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Handler {handler} failed while handling {event_type}: {source}")]
    HandlerFailed {
        event_type: String,
        handler: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl DispatchError {
    pub fn event_type(&self) -> &str {
        match self {
            DispatchError::HandlerFailed { event_type, .. } => event_type,
        }
    }
}
