use serde::{Deserialize, Serialize};

// === Todo Operation Models ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    pub description: String,
    pub completed: bool,
}
