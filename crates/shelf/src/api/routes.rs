//! Axum route definitions for the shelf API.

use crate::api::handlers;
use crate::store::ItemShelf;
use axum::routing::{get, put};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create the shelf router.
///
/// # Routes
///
/// - `GET     /`                     - Greeting
/// - `OPTIONS /`                     - Explicit allowed-methods body
/// - `GET     /users/me`             - The current user (static, wins over the parametrized route)
/// - `GET     /users/{user_id}`      - Echo a user id
/// - `GET     /items/`               - Fixed item list, sliced by skip/limit
/// - `POST    /items/`               - Create an item (echoed back with derived price)
/// - `GET     /items/{item_id}`      - Item detail
/// - `GET     /models/{model_name}`  - Model lookup, enum-constrained
/// - `PUT     /item/{item_id}`       - Update an item
pub fn shelf_routes(shelf: Arc<ItemShelf>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::root).options(handlers::allowed_methods),
        )
        .route("/users/me", get(handlers::read_current_user))
        .route("/users/{user_id}", get(handlers::read_user))
        .route(
            "/items/",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route("/items/{item_id}", get(handlers::read_item))
        .route("/models/{model_name}", get(handlers::get_model))
        .route("/item/{item_id}", put(handlers::update_item))
        .layer(TraceLayer::new_for_http())
        .with_state(shelf)
}
