use crate::events::BatchEvent;

/// Advisory progress reporting for long batches. Sinks must not influence
/// simulation state; the batch produces identical results whichever sink is
/// attached.
pub trait ProgressSink {
    fn report(&mut self, event: BatchEvent);
}

#[derive(Debug, Default)]
pub struct InMemoryProgressSink {
    events: Vec<BatchEvent>,
}

impl InMemoryProgressSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BatchEvent] {
        &self.events
    }
}

impl ProgressSink for InMemoryProgressSink {
    fn report(&mut self, event: BatchEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn report(&mut self, _event: BatchEvent) {}
}
