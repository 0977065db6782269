use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use shared::{Error, Result, TtlSecs};
use todos::ListCache;
use tracing::debug;

/// Redis-backed list cache; entries are written with `SET .. EX ttl`.
#[derive(Clone)]
pub struct RedisListCache {
    conn: ConnectionManager,
    ttl: TtlSecs,
}

impl RedisListCache {
    pub async fn connect(url: &str, ttl: TtlSecs) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| Error::Cache(format!("Invalid Redis URL '{}': {}", url, e)))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| Error::Cache(format!("Failed to connect to Redis: {}", e)))?;

        Ok(Self { conn, ttl })
    }
}

#[async_trait]
impl ListCache for RedisListCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| Error::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut conn = self.conn.clone();
        let ttl_secs = self.ttl.0.max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| Error::Cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| Error::Cache(format!("Failed to delete key '{}': {}", key, e)))?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let result = RedisListCache::connect("http://not-redis", TtlSecs(60)).await;
        assert!(matches!(result, Err(Error::Cache(_))));
    }
}
