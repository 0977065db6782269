use crate::TtlSecs;
use tracing::warn;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: String,
    pub redis_url: Option<String>,
    pub cache_ttl: TtlSecs,
    pub allowed_origins: Vec<String>,
}

impl Config {
    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 3000;
    const DEFAULT_DATA_DIR: &str = "./data";
    const DEFAULT_CACHE_TTL_SECS: u64 = 60;

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source, so tests don't
    /// have to mutate the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                warn!("PORT={} is not a valid port, using {}", raw, Self::DEFAULT_PORT);
                Self::DEFAULT_PORT
            }),
            None => Self::DEFAULT_PORT,
        };

        let cache_ttl_secs = match lookup("TODOS_CACHE_TTL_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!(
                        "TODOS_CACHE_TTL_SECS={} is not a positive number of seconds, using {}",
                        raw,
                        Self::DEFAULT_CACHE_TTL_SECS
                    );
                    Self::DEFAULT_CACHE_TTL_SECS
                }
            },
            None => Self::DEFAULT_CACHE_TTL_SECS,
        };

        Self {
            host: lookup("TODOS_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            port,
            data_dir: lookup("TODOS_DATA_DIR")
                .unwrap_or_else(|| Self::DEFAULT_DATA_DIR.to_string()),
            redis_url: lookup("TODOS_REDIS_URL").filter(|url| !url.trim().is_empty()),
            cache_ttl: TtlSecs(cache_ttl_secs),
            allowed_origins: lookup("TODOS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}
