use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    /// Unix timestamp in nanoseconds, assigned on creation.
    pub created: i64,
}

/// Body accepted by create and update. `id` and `created` are server-owned,
/// so anything the client sends for them is dropped during decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(payload: TodoPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: payload.title,
            completed: payload.completed,
            created: now_nanos(),
        }
    }

    /// Replaces the client-editable fields, keeping `id` and `created`.
    pub fn apply(&mut self, payload: TodoPayload) {
        self.title = payload.title;
        self.completed = payload.completed;
    }
}

fn now_nanos() -> i64 {
    // Out of range only after the year 2262.
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
}
