//! HTTP request handlers for the to-do service

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::error::AppError;
use crate::todo::database::{self, AppState};
use crate::todo::model::{CreateItem, ItemUpdate, TodoItem};

const NOT_FOUND: &str = "Item not found";

/// Maps a path id onto a storage key
///
/// Ids are assigned from 1 upwards, so a negative id is a well-formed
/// request for an item that cannot exist.
fn stored_id(id: i64) -> Result<u64, AppError> {
    u64::try_from(id).map_err(|_| AppError::NotFound(NOT_FOUND))
}

/// Creates an item
///
/// # Request Body
///
/// ```json
/// { "title": "Buy milk", "description": "2 liters", "completed": false }
/// ```
///
/// Only `title` is required. Responds **201 Created** with the stored item.
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItem>,
) -> Result<impl IntoResponse, AppError> {
    let item = database::insert_item(&state.db, payload)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Lists every item in id order
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, AppError> {
    Ok(Json(database::list_items(&state.db)?))
}

pub async fn get_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TodoItem>, AppError> {
    database::find_item(&state.db, stored_id(id)?)?
        .map(Json)
        .ok_or(AppError::NotFound(NOT_FOUND))
}

/// Partially updates an item
///
/// Fields missing from the body keep their stored value. An empty body
/// writes nothing and returns the item as stored.
///
/// # Response
///
/// - **200 OK** with the item after the update
/// - **404 Not Found** when the id is unknown
pub async fn update_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ItemUpdate>,
) -> Result<Json<TodoItem>, AppError> {
    database::update_item(&state.db, stored_id(id)?, payload)?
        .map(Json)
        .ok_or(AppError::NotFound(NOT_FOUND))
}

/// Deletes an item: **204 No Content**, or **404 Not Found**
pub async fn delete_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if database::delete_item(&state.db, stored_id(id)?)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(NOT_FOUND))
    }
}

/// Service banner
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "ToDo Service API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
