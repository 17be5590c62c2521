use super::types::*;

/// Observer of batch progress. Every method defaults to a no-op.
pub trait BatchEventHandler: Send + Sync {
    fn on_batch_started(&self, _event: &BatchStartedEvent) {}
    fn on_progress(&self, _event: &ProgressEvent) {}
    fn on_cell_completed(&self, _event: &CellCompletedEvent) {}
    fn on_cell_failed(&self, _event: &CellFailedEvent) {}
    fn on_flush(&self, _event: &FlushEvent) {}
    fn on_batch_complete(&self, _event: &BatchCompleteEvent) {}
}
