use std::sync::Arc;

use crate::events::{TodoEvents, TracingTodoEvents};
use crate::repository::{InMemoryTodoRepository, TodoRepository};

#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoRepository>,
    pub events: Arc<dyn TodoEvents>,
}

impl AppState {
    pub fn new(todos: Arc<dyn TodoRepository>, events: Arc<dyn TodoEvents>) -> Self {
        Self { todos, events }
    }

    /// Empty in-memory store with events going to `tracing`.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(TracingTodoEvents),
        )
    }
}
