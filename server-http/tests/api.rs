use async_trait::async_trait;
use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server_http::{build_router, AppState};
use shared::config::Config;
use shared::{Error, TtlSecs};
use std::sync::Arc;
use storage_engine::MokaListCache;
use tempfile::TempDir;
use todos::{ListCache, SledTodoRepository, TodoService};
use tower::ServiceExt;

fn app_with_cache(cache: Arc<dyn ListCache>) -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let repo = Arc::new(SledTodoRepository::open(temp_dir.path().join("todos.sled")).unwrap());
    let service = Arc::new(TodoService::new(repo, cache));
    let config = Config::from_lookup(|_| None);

    (build_router(AppState::new(service), &config), temp_dir)
}

fn app() -> (Router, TempDir) {
    app_with_cache(Arc::new(MokaListCache::new(TtlSecs(60))))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_len(response: axum::response::Response) -> usize {
    response.into_body().collect().await.unwrap().to_bytes().len()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn create(app: &Router, title: &str, description: &str) -> Value {
    let resp = send(
        app,
        json_request(
            "POST",
            "/todos",
            json!({ "title": title, "description": description }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

async fn list(app: &Router) -> Vec<Value> {
    let resp = send(app, empty_request("GET", "/todos")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    match body_json(resp).await {
        Value::Array(items) => items,
        other => panic!("expected an array, got {other}"),
    }
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let (app, _dir) = app();
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn list_is_json() {
    let (app, _dir) = app();
    let resp = send(&app, empty_request("GET", "/todos")).await;
    assert_eq!(
        resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let (app, _dir) = app();
    let todo = create(&app, "Test Todo", "This is a test todo").await;

    assert_eq!(todo["title"], "Test Todo");
    assert_eq!(todo["description"], "This is a test todo");
    assert_eq!(todo["completed"], false);
    assert!(!todo["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn create_todo_ignores_completed() {
    let (app, _dir) = app();
    let resp = send(
        &app,
        json_request(
            "POST",
            "/todos",
            json!({ "title": "t", "description": "d", "completed": true }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["completed"], false);
}

#[tokio::test]
async fn create_todo_missing_title_returns_400() {
    let (app, _dir) = app();
    let resp = send(
        &app,
        json_request("POST", "/todos", json!({ "description": "d" })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["msg"], "Title is required");
    assert_eq!(errors[0]["path"], "title");
    assert_eq!(errors[0]["location"], "body");
}

#[tokio::test]
async fn create_todo_missing_description_returns_400() {
    let (app, _dir) = app();
    let resp = send(
        &app,
        json_request("POST", "/todos", json!({ "title": "t", "description": "" })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["errors"][0]["msg"], "Description is required");
}

#[tokio::test]
async fn create_todo_without_content_type_reports_fields() {
    let (app, _dir) = app();
    let resp = send(&app, empty_request("POST", "/todos")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    let paths: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["title", "description"]);
}

#[tokio::test]
async fn create_todo_malformed_json_returns_400() {
    let (app, _dir) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/todos")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body("{not json".to_string())
        .unwrap();
    let resp = send(&app, request).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_todo_non_object_body_returns_400() {
    let (app, _dir) = app();

    for body in [json!(["from", "array"]), json!("title"), json!(42), json!(null)] {
        let resp = send(&app, json_request("POST", "/todos", body)).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["path"], "");
        assert_eq!(errors[0]["msg"], "Request body must be a JSON object");
    }

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn update_todo_array_body_returns_400() {
    let (app, _dir) = app();
    let created = create(&app, "t", "d").await;
    let uri = format!("/todos/{}", created["id"].as_str().unwrap());

    let resp = send(&app, json_request("PUT", &uri, json!(["x", "y", true]))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(list(&app).await, vec![created]);
}

// --- update ---

#[tokio::test]
async fn update_todo_returns_200() {
    let (app, _dir) = app();
    let created = create(&app, "Test Todo", "This is a test todo").await;
    let id = created["id"].as_str().unwrap();

    let resp = send(
        &app,
        json_request(
            "PUT",
            &format!("/todos/{id}"),
            json!({
                "title": "Updated Test Todo",
                "description": "This is an updated test todo",
                "completed": true
            }),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Updated Test Todo");
    assert_eq!(body["description"], "This is an updated test todo");
    assert_eq!(body["completed"], true);
}

#[tokio::test]
async fn update_nonexistent_todo_returns_404() {
    let (app, _dir) = app();
    let resp = send(
        &app,
        json_request(
            "PUT",
            "/todos/non_existent_id",
            json!({ "title": "t", "description": "d", "completed": true }),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Todo not found" }));
}

#[tokio::test]
async fn update_validates_before_lookup() {
    let (app, _dir) = app();
    let resp = send(
        &app,
        json_request(
            "PUT",
            "/todos/non_existent_id",
            json!({ "title": "t", "description": "d", "completed": "maybe" }),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["errors"][0]["msg"], "Completed must be a boolean value");
}

// --- delete ---

#[tokio::test]
async fn delete_todo_returns_204_then_404() {
    let (app, _dir) = app();
    let created = create(&app, "Test Todo", "This is a test todo").await;
    let uri = format!("/todos/{}", created["id"].as_str().unwrap());

    let resp = send(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(body_len(resp).await, 0);

    let resp = send(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Todo not found" }));
}

// --- cache invalidation ---

#[tokio::test]
async fn list_reflects_every_mutation() {
    let (app, _dir) = app();

    // Populate the cache
    assert!(list(&app).await.is_empty());

    let created = create(&app, "first", "one").await;
    let listed = list(&app).await;
    assert_eq!(listed, vec![created.clone()]);

    let id = created["id"].as_str().unwrap();
    let resp = send(
        &app,
        json_request(
            "PUT",
            &format!("/todos/{id}"),
            json!({ "title": "first", "description": "one", "completed": true }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed = list(&app).await;
    assert_eq!(listed[0]["completed"], true);

    let resp = send(&app, empty_request("DELETE", &format!("/todos/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn list_keeps_creation_order() {
    let (app, _dir) = app();
    let a = create(&app, "a", "1").await;
    let b = create(&app, "b", "2").await;
    let c = create(&app, "c", "3").await;

    assert_eq!(list(&app).await, vec![a, b, c]);
}

// --- failures ---

struct UnreachableCache;

#[async_trait]
impl ListCache for UnreachableCache {
    async fn get(&self, _key: &str) -> shared::Result<Option<String>> {
        Err(Error::Cache("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: String) -> shared::Result<()> {
        Err(Error::Cache("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> shared::Result<bool> {
        Err(Error::Cache("connection refused".to_string()))
    }
}

#[tokio::test]
async fn unreachable_cache_fails_list_with_500() {
    let (app, _dir) = app_with_cache(Arc::new(UnreachableCache));
    let resp = send(&app, empty_request("GET", "/todos")).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn unreachable_cache_does_not_fail_writes() {
    let (app, _dir) = app_with_cache(Arc::new(UnreachableCache));
    let created = create(&app, "still", "saved").await;
    let uri = format!("/todos/{}", created["id"].as_str().unwrap());

    let resp = send(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

// --- health ---

#[tokio::test]
async fn health_returns_ok() {
    let (app, _dir) = app();
    let resp = send(&app, empty_request("GET", "/health")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "message": "OK" }));
}
