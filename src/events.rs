use std::sync::Mutex;

use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoEvent {
    Created(Uuid),
    Updated(Uuid),
    Deleted(Uuid),
    Fetched(Uuid),
    Listed(usize),
}

/// Sink for handler side effects. Recording must never fail or block the
/// request, so there is nothing to return.
pub trait TodoEvents: Send + Sync {
    fn record(&self, event: TodoEvent);
}

pub struct TracingTodoEvents;

impl TodoEvents for TracingTodoEvents {
    fn record(&self, event: TodoEvent) {
        match event {
            TodoEvent::Created(id) => info!("created todo id={}", id),
            TodoEvent::Updated(id) => info!("updated todo id={}", id),
            TodoEvent::Deleted(id) => info!("deleted todo id={}", id),
            TodoEvent::Fetched(id) => debug!("returned todo id={}", id),
            TodoEvent::Listed(count) => debug!("returned all todos count={}", count),
        }
    }
}

pub struct NoopTodoEvents;

impl TodoEvents for NoopTodoEvents {
    fn record(&self, _event: TodoEvent) {}
}

/// Keeps every event in memory; used by tests to assert on side effects.
#[derive(Default)]
pub struct RecordingTodoEvents {
    events: Mutex<Vec<TodoEvent>>,
}

impl RecordingTodoEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TodoEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl TodoEvents for RecordingTodoEvents {
    fn record(&self, event: TodoEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
