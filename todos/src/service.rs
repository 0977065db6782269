use crate::domain::{NewTodo, Todo, TodoChanges};
use crate::ports::{ListCache, TodoRepository};
use shared::{Error, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Cache key holding the serialized list of every todo
pub const TODOS_CACHE_KEY: &str = "todos";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    Cache,
    Store,
}

/// The full todo list as a JSON array, plus where it came from.
///
/// A cache hit hands back the cached payload untouched.
#[derive(Debug, Clone)]
pub struct Listing {
    pub source: ListSource,
    pub payload: String,
}

#[cfg(test)]
impl Listing {
    pub fn todos(&self) -> Result<Vec<Todo>> {
        serde_json::from_str(&self.payload)
            .map_err(|e| Error::Serialization(format!("Failed to decode todo list: {}", e)))
    }
}

/// Todo operations over the store, with a read-through cache for the list
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
    cache: Arc<dyn ListCache>,
    // Bumped on every invalidation; a list fill only lands if it is unchanged
    generation: AtomicU64,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>, cache: Arc<dyn ListCache>) -> Self {
        Self {
            repo,
            cache,
            generation: AtomicU64::new(0),
        }
    }

    pub async fn list(&self) -> Result<Listing> {
        if let Some(payload) = self.cache.get(TODOS_CACHE_KEY).await? {
            info!("Serving todos from cache");
            return Ok(Listing {
                source: ListSource::Cache,
                payload,
            });
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let todos = self.repo.list().await?;
        let payload = serde_json::to_string(&todos)
            .map_err(|e| Error::Serialization(format!("Failed to encode todo list: {}", e)))?;

        self.fill_list(generation, payload.clone()).await?;
        info!("Serving todos from store ({} records)", todos.len());

        Ok(Listing {
            source: ListSource::Store,
            payload,
        })
    }

    #[cfg(test)]
    pub async fn get(&self, id: &str) -> Result<Todo> {
        self.repo.find(id).await?.ok_or(Error::NotFound)
    }

    pub async fn create(&self, new: NewTodo) -> Result<Todo> {
        let todo = self.repo.create(new).await?;
        self.invalidate_list().await;
        Ok(todo)
    }

    pub async fn update(&self, id: &str, changes: TodoChanges) -> Result<Todo> {
        let todo = self
            .repo
            .update(id, changes)
            .await?
            .ok_or(Error::NotFound)?;
        self.invalidate_list().await;
        Ok(todo)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(Error::NotFound);
        }
        self.invalidate_list().await;
        Ok(())
    }

    /// Caches a list read at `generation`, unless a write invalidated the
    /// list while it was being read.
    async fn fill_list(&self, generation: u64, payload: String) -> Result<()> {
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Todo list changed while reading, not caching it");
            return Ok(());
        }

        self.cache.set(TODOS_CACHE_KEY, payload).await?;

        // A write may have invalidated between the check and the set
        if self.generation.load(Ordering::SeqCst) != generation {
            self.cache.delete(TODOS_CACHE_KEY).await?;
        }
        Ok(())
    }

    /// Drops the cached list after a write. A failure here is not fatal: the
    /// entry still expires on its own TTL.
    async fn invalidate_list(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        match self.cache.delete(TODOS_CACHE_KEY).await {
            Ok(removed) => debug!("Invalidated todo list cache (entry present: {})", removed),
            Err(e) => warn!(
                "Failed to invalidate todo list cache, stale reads possible until expiry: {}",
                e
            ),
        }
    }
}
