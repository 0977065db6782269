pub mod health;
pub mod todo_ops;

pub use health::health_check;
pub use todo_ops::{create_todo, delete_todo, list_todos, update_todo};
