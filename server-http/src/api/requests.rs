use serde::Deserialize;
use serde_json::Value;

/// Body of POST/PUT /todos, kept loosely typed so that wrong or missing
/// fields become field errors rather than extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub completed: Option<Value>,
}
