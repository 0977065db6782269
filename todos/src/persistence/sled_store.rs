use crate::domain::{NewTodo, Todo, TodoChanges};
use crate::id::generate_todo_id;
use crate::ports::TodoRepository;
use async_trait::async_trait;
use shared::{Error, Result};
use sled::{Db, IVec, Tree};
use std::path::Path;

// Documents are keyed by a monotonic sequence so a scan yields creation order
const TODOS_TREE: &str = "todos";
const TODOS_BY_ID_TREE: &str = "todos_by_id";

/// Sled-backed document store for todo records
#[derive(Clone)]
pub struct SledTodoRepository {
    db: Db,
    todos: Tree,
    by_id: Tree,
}

impl SledTodoRepository {
    /// Open (or create) the store at `path`, creating the parent directory if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create directory: {}", e)))?;
        }

        let db = sled::open(path)
            .map_err(|e| Error::Storage(format!("Failed to open Sled database: {}", e)))?;

        Self::from_db(db)
    }

    pub fn from_db(db: Db) -> Result<Self> {
        let todos = db
            .open_tree(TODOS_TREE)
            .map_err(|e| Error::Storage(format!("Failed to open todos tree: {}", e)))?;
        let by_id = db
            .open_tree(TODOS_BY_ID_TREE)
            .map_err(|e| Error::Storage(format!("Failed to open id index: {}", e)))?;

        Ok(Self { db, todos, by_id })
    }

    /// Reserve a fresh id in the index, retrying on collision
    fn reserve_id(&self, seq_key: &[u8]) -> Result<String> {
        loop {
            let id = generate_todo_id();
            let swapped = self
                .by_id
                .compare_and_swap(id.as_bytes(), None::<&[u8]>, Some(seq_key))
                .map_err(|e| Error::Storage(format!("Failed to reserve id: {}", e)))?;

            if swapped.is_ok() {
                return Ok(id);
            }
            tracing::debug!("Todo id collision on {}, retrying", id);
        }
    }

    fn seq_key_for(&self, id: &str) -> Result<Option<IVec>> {
        self.by_id
            .get(id.as_bytes())
            .map_err(|e| Error::Storage(format!("Failed to read id index: {}", e)))
    }

    fn load(&self, seq_key: &[u8]) -> Result<Option<Todo>> {
        let value = self
            .todos
            .get(seq_key)
            .map_err(|e| Error::Storage(format!("Failed to get todo: {}", e)))?;

        match value {
            Some(bytes) => decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    fn store(&self, seq_key: &[u8], todo: &Todo) -> Result<()> {
        self.todos
            .insert(seq_key, encode(todo)?)
            .map_err(|e| Error::Storage(format!("Failed to save todo: {}", e)))?;

        Ok(())
    }

    /// Rewrite the document at `seq_key` starting from the `seen` bytes.
    /// The write only lands while the document still exists, so an update
    /// racing a delete never brings the record back.
    fn replace(
        &self,
        seq_key: &[u8],
        mut seen: Option<IVec>,
        changes: TodoChanges,
    ) -> Result<Option<Todo>> {
        while let Some(old) = seen {
            let mut todo = decode(&old)?;
            todo.apply(changes.clone());

            let swapped = self
                .todos
                .compare_and_swap(seq_key, Some(&old), Some(encode(&todo)?))
                .map_err(|e| Error::Storage(format!("Failed to update todo: {}", e)))?;

            match swapped {
                Ok(()) => return Ok(Some(todo)),
                Err(conflict) => seen = conflict.current,
            }
        }

        Ok(None)
    }

    async fn flush(&self) -> Result<()> {
        self.db
            .flush_async()
            .await
            .map_err(|e| Error::Storage(format!("Failed to flush database: {}", e)))?;
        Ok(())
    }
}

fn encode(todo: &Todo) -> Result<Vec<u8>> {
    serde_json::to_vec(todo)
        .map_err(|e| Error::Serialization(format!("Failed to serialize todo: {}", e)))
}

fn decode(bytes: &[u8]) -> Result<Todo> {
    serde_json::from_slice(bytes)
        .map_err(|e| Error::Serialization(format!("Failed to deserialize todo: {}", e)))
}

#[async_trait]
impl TodoRepository for SledTodoRepository {
    async fn create(&self, new: NewTodo) -> Result<Todo> {
        let seq = self
            .db
            .generate_id()
            .map_err(|e| Error::Storage(format!("Failed to allocate sequence: {}", e)))?;
        let seq_key = seq.to_be_bytes();

        let id = self.reserve_id(&seq_key)?;
        let todo = Todo::from_new(id, new);

        self.store(&seq_key, &todo)?;
        self.flush().await?;

        Ok(todo)
    }

    async fn find(&self, id: &str) -> Result<Option<Todo>> {
        match self.seq_key_for(id)? {
            Some(seq_key) => self.load(&seq_key),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        let mut todos = Vec::new();

        for item in self.todos.iter() {
            let (_, value) =
                item.map_err(|e| Error::Storage(format!("Failed to iterate todos: {}", e)))?;
            todos.push(decode(&value)?);
        }

        Ok(todos)
    }

    async fn update(&self, id: &str, changes: TodoChanges) -> Result<Option<Todo>> {
        let Some(seq_key) = self.seq_key_for(id)? else {
            return Ok(None);
        };
        let seen = self
            .todos
            .get(&seq_key)
            .map_err(|e| Error::Storage(format!("Failed to get todo: {}", e)))?;

        let updated = self.replace(&seq_key, seen, changes)?;
        if updated.is_some() {
            self.flush().await?;
        }

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let removed = self
            .by_id
            .remove(id.as_bytes())
            .map_err(|e| Error::Storage(format!("Failed to delete todo: {}", e)))?;

        let Some(seq_key) = removed else {
            return Ok(false);
        };

        self.todos
            .remove(&seq_key)
            .map_err(|e| Error::Storage(format!("Failed to delete todo: {}", e)))?;
        self.flush().await?;

        Ok(true)
    }
}
