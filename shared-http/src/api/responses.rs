use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TODO_NOT_FOUND: &str = "Todo not found";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl From<todos::Todo> for TodoResponse {
    fn from(todo: todos::Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
        }
    }
}

// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// One rejected request field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: String,
}

impl FieldError {
    pub fn body(path: impl Into<String>, msg: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.into(),
            path: path.into(),
            location: "body".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Any error body the API sends back
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    Validation(ValidationErrorResponse),
    Error(ErrorResponse),
}

impl ApiErrorBody {
    /// The first validation message, or the plain error text
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiErrorBody::Validation(v) => v.errors.first().map(|e| e.msg.as_str()),
            ApiErrorBody::Error(e) => Some(e.error.as_str()),
        }
    }
}
