use shared::config::Config;
use std::path::Path;
use std::sync::Arc;
use todos::{SledTodoRepository, TodoService};

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub todo_service: Arc<TodoService>,
}

impl AppState {
    pub fn new(todo_service: Arc<TodoService>) -> Self {
        Self { todo_service }
    }

    /// Open the store under the data dir and build the configured list cache
    pub async fn from_config(config: &Config) -> shared::Result<Self> {
        let store_path = Path::new(&config.data_dir).join("todos.sled");
        tracing::info!("Opening todo store at {}", store_path.display());

        let repo = Arc::new(SledTodoRepository::open(&store_path)?);
        let cache = storage_engine::build_list_cache(config).await?;

        Ok(Self::new(Arc::new(TodoService::new(repo, cache))))
    }
}
