pub mod error_banner;
pub mod server_status;
pub mod todo_form;
pub mod todo_item;
