use serde::{Deserialize, Serialize};

/// A stored todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Todo {
    pub fn from_new(id: String, new: NewTodo) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            completed: false,
        }
    }

    /// Overwrites every mutable field; there is no partial update.
    pub fn apply(&mut self, changes: TodoChanges) {
        self.title = changes.title;
        self.description = changes.description;
        self.completed = changes.completed;
    }
}

/// Already-validated input for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Full replacement of a todo's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoChanges {
    pub fn new(title: impl Into<String>, description: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed,
        }
    }
}
