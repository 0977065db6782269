pub mod todo_list;

pub use todo_list::TodoList;
