#![deny(clippy::all)]

use crate::domain::{NewTodo, Todo, TodoChanges};
use async_trait::async_trait;
use shared::Result;

// Ports are the pluggable extension points for the store and the list cache

/// Port for the document store holding todo records
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Persist a new record under a freshly generated unique id
    async fn create(&self, new: NewTodo) -> Result<Todo>;

    async fn find(&self, id: &str) -> Result<Option<Todo>>;

    /// All records in creation order
    async fn list(&self) -> Result<Vec<Todo>>;

    /// Replace the record's fields; `None` when the id is unknown
    async fn update(&self, id: &str, changes: TodoChanges) -> Result<Option<Todo>>;

    /// `false` when the id is unknown
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Port for the key-value cache in front of the list query.
///
/// Entries expire after the TTL the backend was built with.
#[async_trait]
pub trait ListCache: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Returns whether an entry was removed
    async fn delete(&self, key: &str) -> Result<bool>;
}
