use crate::api::TodoPayload;
use serde_json::Value;
use shared_http::api::FieldError;
use todos::{NewTodo, TodoChanges};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const COMPLETED_NOT_BOOLEAN: &str = "Completed must be a boolean value";
pub const BODY_NOT_AN_OBJECT: &str = "Request body must be a JSON object";

pub struct TodoValidator;

impl TodoValidator {
    /// POST /todos: title and description must be non-empty strings.
    /// Any `completed` in the body is ignored.
    pub fn for_create(payload: TodoPayload) -> Result<NewTodo, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = Self::required_text("title", TITLE_REQUIRED, payload.title, &mut errors);
        let description = Self::required_text(
            "description",
            DESCRIPTION_REQUIRED,
            payload.description,
            &mut errors,
        );

        match (title, description) {
            (Some(title), Some(description)) if errors.is_empty() => {
                Ok(NewTodo::new(title, description))
            }
            _ => Err(errors),
        }
    }

    /// PUT /todos/{id}: all three fields are required
    pub fn for_update(payload: TodoPayload) -> Result<TodoChanges, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = Self::required_text("title", TITLE_REQUIRED, payload.title, &mut errors);
        let description = Self::required_text(
            "description",
            DESCRIPTION_REQUIRED,
            payload.description,
            &mut errors,
        );
        let completed = Self::boolean("completed", COMPLETED_NOT_BOOLEAN, payload.completed, &mut errors);

        match (title, description, completed) {
            (Some(title), Some(description), Some(completed)) if errors.is_empty() => {
                Ok(TodoChanges::new(title, description, completed))
            }
            _ => Err(errors),
        }
    }

    /// Error for a body that could not be read as a JSON object at all
    pub fn malformed_body(reason: impl Into<String>) -> Vec<FieldError> {
        vec![FieldError::body("", reason, None)]
    }

    fn required_text(
        field: &'static str,
        msg: &'static str,
        value: Option<Value>,
        errors: &mut Vec<FieldError>,
    ) -> Option<String> {
        match value {
            Some(Value::String(text)) if !text.is_empty() => Some(text),
            other => {
                errors.push(FieldError::body(field, msg, other));
                None
            }
        }
    }

    // Booleans, plus the "true"/"false"/"1"/"0" spellings form posts send
    fn boolean(
        field: &'static str,
        msg: &'static str,
        value: Option<Value>,
        errors: &mut Vec<FieldError>,
    ) -> Option<bool> {
        let parsed = match &value {
            Some(Value::Bool(b)) => Some(*b),
            Some(Value::String(s)) => match s.as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            Some(Value::Number(n)) => match n.as_u64() {
                Some(1) => Some(true),
                Some(0) => Some(false),
                _ => None,
            },
            _ => None,
        };

        if parsed.is_none() {
            errors.push(FieldError::body(field, msg, value));
        }
        parsed
    }
}
