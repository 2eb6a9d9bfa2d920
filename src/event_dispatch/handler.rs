use anyhow::Result;

// ============================================================================
// Event Handler Capability
// ============================================================================

/// One unit of reaction to an event.
///
/// Handlers carry no state requirements; the registrant owns them and shares
/// them with the dispatcher. Returning `Err` stops dispatch of the current
/// event and surfaces the error to the caller of `notify`.
pub trait EventHandler<E: ?Sized> {
    fn handle(&self, event: &E) -> Result<()>;

    /// Name used in logs and errors
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<E, F> EventHandler<E> for F
where
    E: ?Sized,
    F: Fn(&E) -> Result<()>,
{
    fn handle(&self, event: &E) -> Result<()> {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingHandler {
        calls: Cell<u32>,
    }

    impl EventHandler<str> for CountingHandler {
        fn handle(&self, _event: &str) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_struct_handler_name_is_type_name() {
        let handler = CountingHandler { calls: Cell::new(0) };
        assert!(handler.name().ends_with("CountingHandler"));

        handler.handle("event").unwrap();
        assert_eq!(handler.calls.get(), 1);
    }

    #[test]
    fn test_closure_is_a_handler() {
        let seen = Cell::new(0usize);
        let handler = |event: &str| -> Result<()> {
            seen.set(event.len());
            Ok(())
        };

        EventHandler::<str>::handle(&handler, "hello").unwrap();
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_closure_error_is_returned() {
        let handler = |_: &str| -> Result<()> { anyhow::bail!("smtp unavailable") };

        let result = EventHandler::<str>::handle(&handler, "event");
        assert_eq!(result.unwrap_err().to_string(), "smtp unavailable");
    }
}
