use async_trait::async_trait;
use moka::future::Cache;
use shared::{Result, TtlSecs};
use std::fmt::Debug;
use todos::ListCache;

/// Moka-based in-process list cache.
/// Every entry lives for the TTL given at construction time.
pub struct MokaListCache {
    cache: Cache<String, String>,
}

impl MokaListCache {
    pub fn new(ttl: TtlSecs) -> Self {
        Self {
            cache: Cache::builder()
                .name("todos-list")
                .time_to_live(ttl.as_duration())
                .build(),
        }
    }

    #[cfg(test)]
    fn with_ttl(ttl: std::time::Duration) -> Self {
        Self {
            cache: Cache::builder().time_to_live(ttl).build(),
        }
    }
}

#[async_trait]
impl ListCache for MokaListCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // None when missing or expired
        Ok(self.cache.get(key).await)
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.cache.insert(key.to_string(), value).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }
}

impl Debug for MokaListCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaListCache")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}
