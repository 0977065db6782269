mod requests;
mod responses;

pub use requests::{CreateTodoRequest, UpdateTodoRequest};
pub use responses::{
    ApiErrorBody, ErrorResponse, FieldError, HealthResponse, TodoResponse,
    ValidationErrorResponse, TODO_NOT_FOUND,
};
