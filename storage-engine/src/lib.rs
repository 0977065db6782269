pub mod moka_cache;
pub mod redis_cache;

pub use moka_cache::MokaListCache;
pub use redis_cache::RedisListCache;

use shared::config::Config;
use shared::Result;
use std::sync::Arc;
use todos::ListCache;
use tracing::info;

/// Build the list cache the configuration asks for: Redis when a URL is set,
/// otherwise an in-process Moka cache. Both expire entries after the
/// configured TTL.
pub async fn build_list_cache(config: &Config) -> Result<Arc<dyn ListCache>> {
    match &config.redis_url {
        Some(url) => {
            info!("Using Redis list cache (ttl={}s)", config.cache_ttl.0);
            let cache = RedisListCache::connect(url, config.cache_ttl).await?;
            Ok(Arc::new(cache))
        }
        None => {
            info!("Using in-process Moka list cache (ttl={}s)", config.cache_ttl.0);
            Ok(Arc::new(MokaListCache::new(config.cache_ttl)))
        }
    }
}
