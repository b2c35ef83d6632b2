use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Todo, TodoPayload};

/// Storage for todo records. Implementations must be safe to share across
/// concurrently running handlers without any locking on the caller's side.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Option<Todo>;

    /// Inserts or overwrites the record stored under `todo.id`.
    async fn put(&self, todo: Todo);

    /// Returns `false` if nothing was stored under `id`.
    async fn delete(&self, id: Uuid) -> bool;

    /// Snapshot of every record, in no particular order.
    async fn list(&self) -> Vec<Todo>;

    /// Applies `payload` to the stored record and returns the result, or
    /// `None` if `id` is unknown. The lookup and the write happen under one lock.
    async fn update(&self, id: Uuid, payload: TodoPayload) -> Option<Todo>;
}

#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<HashMap<Uuid, Todo>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get(&self, id: Uuid) -> Option<Todo> {
        self.todos.read().await.get(&id).cloned()
    }

    async fn put(&self, todo: Todo) {
        self.todos.write().await.insert(todo.id, todo);
    }

    async fn delete(&self, id: Uuid) -> bool {
        self.todos.write().await.remove(&id).is_some()
    }

    async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.values().cloned().collect()
    }

    async fn update(&self, id: Uuid, payload: TodoPayload) -> Option<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(&id)?;
        todo.apply(payload);
        Some(todo.clone())
    }
}
