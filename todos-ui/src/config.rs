#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

impl Config {
    /// Runtime variable first (desktop), then the value baked in at build time (web)
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("TODOS_API_URL")
            .ok()
            .or_else(|| option_env!("TODOS_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }
}
