pub mod domain;
pub mod id;
pub mod persistence;
pub mod ports;
pub mod service;

pub use domain::{NewTodo, Todo, TodoChanges};
pub use persistence::SledTodoRepository;
pub use ports::{ListCache, TodoRepository};
pub use service::{ListSource, Listing, TodoService, TODOS_CACHE_KEY};
