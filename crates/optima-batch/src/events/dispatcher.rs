use std::sync::Arc;

use super::handler::BatchEventHandler;
use super::types::*;

/// Fans events out to handlers in registration order.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn BatchEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn BatchEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// A panicking handler is logged and skipped; later handlers still run.
    fn emit<F: Fn(&dyn BatchEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("batch event handler panicked");
            }
        }
    }

    pub fn emit_batch_started(&self, event: &BatchStartedEvent) {
        self.emit(|h| h.on_batch_started(event));
    }

    pub fn emit_progress(&self, event: &ProgressEvent) {
        self.emit(|h| h.on_progress(event));
    }

    pub fn emit_cell_completed(&self, event: &CellCompletedEvent) {
        self.emit(|h| h.on_cell_completed(event));
    }

    pub fn emit_cell_failed(&self, event: &CellFailedEvent) {
        self.emit(|h| h.on_cell_failed(event));
    }

    pub fn emit_flush(&self, event: &FlushEvent) {
        self.emit(|h| h.on_flush(event));
    }

    pub fn emit_batch_complete(&self, event: &BatchCompleteEvent) {
        self.emit(|h| h.on_batch_complete(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
