use crate::api::TodoPayload;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::{TodoValidator, BODY_NOT_AN_OBJECT};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use shared_http::api::TodoResponse;
use todos::ListSource;
use tracing::info;

/// A body without a JSON content type reads as empty, so it fails on the
/// missing fields like any other incomplete form. Anything but an object is
/// malformed.
fn read_payload(payload: Result<Json<Value>, JsonRejection>) -> Result<TodoPayload, ApiError> {
    match payload {
        Ok(Json(body @ Value::Object(_))) => serde_json::from_value(body)
            .map_err(|e| ApiError::Validation(TodoValidator::malformed_body(e.to_string()))),
        Ok(Json(_)) => Err(ApiError::Validation(TodoValidator::malformed_body(
            BODY_NOT_AN_OBJECT,
        ))),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(TodoPayload::default()),
        Err(rejection) => Err(ApiError::Validation(TodoValidator::malformed_body(
            rejection.body_text(),
        ))),
    }
}

/// GET /todos
pub async fn list_todos(State(state): State<AppState>) -> Result<Response, ApiError> {
    let listing = state.todo_service.list().await?;

    let source = match listing.source {
        ListSource::Cache => "cache",
        ListSource::Store => "store",
    };
    info!("LIST: served from {}", source);

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        listing.payload,
    )
        .into_response())
}

/// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let new = TodoValidator::for_create(read_payload(payload)?).map_err(ApiError::Validation)?;

    let todo = state.todo_service.create(new).await?;
    info!("CREATE: id={}", todo.id);

    Ok((StatusCode::CREATED, Json(todo.into())))
}

/// PUT /todos/{id}
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let changes =
        TodoValidator::for_update(read_payload(payload)?).map_err(ApiError::Validation)?;

    let todo = state.todo_service.update(&id, changes).await?;
    info!("UPDATE: id={}, completed={}", todo.id, todo.completed);

    Ok(Json(todo.into()))
}

/// DELETE /todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.todo_service.delete(&id).await?;
    info!("DELETE: id={}", id);

    Ok(StatusCode::NO_CONTENT)
}
