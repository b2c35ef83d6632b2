use axum::extract::{FromRequest, Path, State};
use axum::http::{Method, header};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::error::AppError;
use crate::events::TodoEvent;
use crate::models::{Todo, TodoPayload};
use crate::state::AppState;

/// JSON body extractor whose rejections surface as `AppError::BadRequest`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_todos).post(create_todo))
        .route("/products/", get(list_todos).post(create_todo))
        .route(
            "/products/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::PUT, Method::POST, Method::GET, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(false)
}

/// Only the canonical lowercase hyphenated form addresses a record; any other
/// spelling, parsable or not, is treated as an unknown id.
fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id)
        .ok()
        .filter(|key| key.hyphenated().to_string() == id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let key = parse_id(&id)?;
    let todo = state
        .todos
        .get(key)
        .await
        .ok_or(AppError::NotFound(id))?;

    state.events.record(TodoEvent::Fetched(key));
    Ok(Json(todo))
}

async fn create_todo(
    State(state): State<AppState>,
    AppJson(payload): AppJson<TodoPayload>,
) -> Result<Json<Todo>, AppError> {
    let todo = Todo::new(payload);
    state.todos.put(todo.clone()).await;

    state.events.record(TodoEvent::Created(todo.id));
    Ok(Json(todo))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<AppJson<TodoPayload>, AppError>,
) -> Result<Json<Todo>, AppError> {
    let key = parse_id(&id)?;
    if state.todos.get(key).await.is_none() {
        return Err(AppError::NotFound(id));
    }
    let AppJson(payload) = payload?;

    // The record may have been deleted since the check above.
    let todo = state
        .todos
        .update(key, payload)
        .await
        .ok_or(AppError::NotFound(id))?;

    state.events.record(TodoEvent::Updated(key));
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(), AppError> {
    let key = parse_id(&id)?;
    if !state.todos.delete(key).await {
        return Err(AppError::NotFound(id));
    }

    state.events.record(TodoEvent::Deleted(key));
    Ok(())
}

async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    let mut todos = state.todos.list().await;
    todos.sort_by_key(|todo| todo.created);

    state.events.record(TodoEvent::Listed(todos.len()));
    Json(todos)
}
