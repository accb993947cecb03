//! HTTP request handlers for the shelf API.

use crate::api::extract::{Json, Path, Query};
use crate::api::models::{
    AllowedMethodsResponse, CreateItemResponse, ItemDetailParams, ItemDetailResponse,
    ListItemsParams, ModelResponse, RootResponse, UpdateItemParams, UpdateItemResponse,
    UserResponse,
};
use crate::store::ItemShelf;
use crate::types::{Item, ItemRecord, ModelName};
use axum::extract::State;
use std::sync::Arc;

/// Description returned by `read_item` unless a short response is requested.
const LONG_DESCRIPTION: &str = "This is an amazing item that has a long description";

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World".to_string(),
    })
}

/// GET /users/me
///
/// Registered alongside the parametrized user route; the router matches
/// static segments before variable ones, so `me` never binds `user_id`.
pub async fn read_current_user() -> Json<UserResponse> {
    Json(UserResponse {
        user_id: "the current user".to_string(),
    })
}

/// GET /users/{user_id}
///
/// Echoes the raw path text; no numeric coercion.
pub async fn read_user(Path(user_id): Path<String>) -> Json<UserResponse> {
    Json(UserResponse { user_id })
}

/// GET /items/
pub async fn list_items(
    State(shelf): State<Arc<ItemShelf>>,
    Query(params): Query<ListItemsParams>,
) -> Json<Vec<ItemRecord>> {
    Json(shelf.page(params.skip, params.limit).to_vec())
}

/// GET /items/{item_id}
pub async fn read_item(
    Path(item_id): Path<String>,
    Query(params): Query<ItemDetailParams>,
) -> Json<ItemDetailResponse> {
    // `q` is echoed only when present and non-empty
    let q = params.q.filter(|q| !q.is_empty());
    let description = (!params.short).then(|| LONG_DESCRIPTION.to_string());

    Json(ItemDetailResponse {
        item_id,
        q,
        description,
    })
}

/// GET /models/{model_name}
pub async fn get_model(Path(model_name): Path<ModelName>) -> Json<ModelResponse> {
    Json(ModelResponse {
        model_name,
        message: model_name.message().to_string(),
    })
}

/// POST /items/
///
/// Returns the submitted item, extended with `price_with_tax` when a
/// non-zero tax was supplied.
pub async fn create_item(Json(item): Json<Item>) -> Json<CreateItemResponse> {
    let price_with_tax = item
        .tax
        .filter(|tax| *tax != 0.0)
        .map(|tax| item.price + tax);

    Json(CreateItemResponse {
        name: item.name,
        description: item.description,
        price: item.price,
        tax: item.tax,
        price_with_tax,
    })
}

/// PUT /item/{item_id}
pub async fn update_item(
    Path(item_id): Path<i64>,
    Query(params): Query<UpdateItemParams>,
    Json(item): Json<Item>,
) -> Json<UpdateItemResponse> {
    let q = params.q.filter(|q| !q.is_empty());

    Json(UpdateItemResponse {
        item_id,
        name: item.name,
        description: item.description,
        price: item.price,
        tax: item.tax,
        q,
    })
}

/// OPTIONS /
///
/// An explicit handler so the response body is ours, not a synthesized
/// Allow header.
pub async fn allowed_methods() -> Json<AllowedMethodsResponse> {
    Json(AllowedMethodsResponse {
        allowed_methods: vec!["GET".to_string(), "OPTIONS".to_string()],
    })
}
