//! Route definitions for the to-do service

use axum::routing::get;
use axum::Router;

use crate::todo::database::AppState;
use crate::todo::handler::{create_item, delete_item, get_item, list_items, root, update_item};

/// Creates the to-do router
///
/// - `GET /` - Service banner
/// - `GET /items` - All items
/// - `POST /items` - Creates an item
/// - `GET /items/{id}` - One item
/// - `PUT /items/{id}` - Partial update
/// - `DELETE /items/{id}` - Removes an item
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
}
