//! Dashboard event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::DashboardEvent;

/// Receives one event per successful store command.
///
/// Called synchronously once the new snapshot is visible to readers, with
/// the write lock already released. A sink cannot fail the command.
pub trait DashboardEventSink: Send + Sync {
    fn emit(&self, event: DashboardEvent);
}

/// Sink for stores nobody observes.
#[derive(Clone, Default)]
pub struct NoOpDashboardEventSink;

impl DashboardEventSink for NoOpDashboardEventSink {
    fn emit(&self, _event: DashboardEvent) {}
}

/// Records every event in emission order, for assertions in tests.
#[derive(Clone, Default)]
pub struct MockDashboardEventSink {
    events: Arc<Mutex<Vec<DashboardEvent>>>,
}

impl MockDashboardEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DashboardEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DashboardEventSink for MockDashboardEventSink {
    fn emit(&self, event: DashboardEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
