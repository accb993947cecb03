//! End-to-end tests for the shelf API, driving the router in-process.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use shelf::api::shelf_routes;
use shelf::ItemShelf;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    shelf_routes(Arc::new(ItemShelf::seeded()))
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(app(), Method::GET, uri, None).await
}

#[tokio::test]
async fn root_returns_greeting() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello World"}));
}

#[tokio::test]
async fn options_root_returns_explicit_allowed_methods() {
    let (status, body) = send(app(), Method::OPTIONS, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"allowed-methods": ["GET", "OPTIONS"]}));
}

#[tokio::test]
async fn static_user_route_wins_over_parametrized() {
    let (status, body) = get("/users/me").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"user_id": "the current user"}));
}

#[tokio::test]
async fn user_route_echoes_any_text() {
    let (status, body) = get("/users/alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"user_id": "alice"}));

    // Numeric-looking segments stay text
    let (_, body) = get("/users/42").await;
    assert_eq!(body, json!({"user_id": "42"}));
}

#[tokio::test]
async fn listing_defaults_return_the_whole_shelf() {
    let (status, body) = get("/items/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"item_name": "Foo"},
            {"item_name": "Bar"},
            {"item_name": "Baz"}
        ])
    );
}

#[tokio::test]
async fn listing_matches_clamped_slicing_for_all_small_windows() {
    let all = ["Foo", "Bar", "Baz"];

    for skip in 0..=5usize {
        for limit in 0..=5usize {
            let uri = format!("/items/?skip={skip}&limit={limit}");
            let (status, body) = get(&uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");

            let start = skip.min(all.len());
            let end = (skip + limit).min(all.len());
            let expected: Vec<Value> = all[start..end]
                .iter()
                .map(|name| json!({"item_name": name}))
                .collect();
            assert_eq!(body, Value::Array(expected), "{uri}");
        }
    }
}

#[tokio::test]
async fn listing_rejects_non_numeric_paging() {
    let (status, body) = get("/items/?skip=lots").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn item_detail_with_query_and_short() {
    let (status, body) = get("/items/42?q=hi&short=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"item_id": "42", "q": "hi"}));
}

#[tokio::test]
async fn item_detail_defaults_include_description() {
    let (status, body) = get("/items/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "item_id": "42",
            "description": "This is an amazing item that has a long description"
        })
    );
}

#[tokio::test]
async fn item_detail_omits_empty_query_text() {
    let (status, body) = get("/items/42?q=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("q").is_none());
    assert!(body.get("description").is_some());
}

#[tokio::test]
async fn short_accepts_common_truthy_spellings() {
    for raw in ["true", "True", "1", "yes", "YES", "on"] {
        let (status, body) = get(&format!("/items/1?short={raw}")).await;
        assert_eq!(status, StatusCode::OK, "short={raw}");
        assert!(body.get("description").is_none(), "short={raw}");
    }

    for raw in ["false", "0", "no", "off"] {
        let (status, body) = get(&format!("/items/1?short={raw}")).await;
        assert_eq!(status, StatusCode::OK, "short={raw}");
        assert!(body.get("description").is_some(), "short={raw}");
    }
}

#[tokio::test]
async fn short_rejects_unknown_spellings() {
    let (status, body) = get("/items/1?short=maybe").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn model_lookup_returns_mapped_messages() {
    let cases = [
        ("alexnet", "Deep Learning FTW!"),
        ("lenet", "LeCnn all the images"),
        ("resnet", "Have some residuals"),
    ];

    for (model, message) in cases {
        let (status, body) = get(&format!("/models/{model}")).await;
        assert_eq!(status, StatusCode::OK, "{model}");
        assert_eq!(
            body,
            json!({"model_name": model, "message": message}),
            "{model}"
        );
    }
}

#[tokio::test]
async fn unknown_model_is_a_validation_error() {
    let (status, body) = get("/models/foo").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_item_returns_derived_price() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/items/",
        Some(json!({"name": "Hammer", "price": 10.0, "tax": 2.5})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "name": "Hammer",
            "description": null,
            "price": 10.0,
            "tax": 2.5,
            "price_with_tax": 12.5
        })
    );
}

#[tokio::test]
async fn create_item_without_tax_omits_derived_price() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/items/",
        Some(json!({"name": "Nail", "price": 0.5})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"name": "Nail", "description": null, "price": 0.5, "tax": null})
    );
}

#[tokio::test]
async fn create_item_with_zero_tax_omits_derived_price() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/items/",
        Some(json!({"name": "Nail", "price": 0.5, "tax": 0.0})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("price_with_tax").is_none());
    assert_eq!(body["tax"], json!(0.0));
}

#[tokio::test]
async fn create_item_rejects_malformed_body() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/items/",
        Some(json!({"name": "Hammer", "price": "ten"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn create_item_failure_does_not_poison_later_requests() {
    let app = app();

    let (status, _) = send(
        app.clone(),
        Method::POST,
        "/items/",
        Some(json!({"price": "broken"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // The process keeps serving
    let (status, body) = send(app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello World"}));
}

#[tokio::test]
async fn update_item_merges_path_body_and_query() {
    let (status, body) = send(
        app(),
        Method::PUT,
        "/item/7?q=x",
        Some(json!({"name": "A", "price": 10.0, "tax": 2.0})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "item_id": 7,
            "name": "A",
            "description": null,
            "price": 10.0,
            "tax": 2.0,
            "q": "x"
        })
    );
}

#[tokio::test]
async fn update_item_without_query_omits_q() {
    let (status, body) = send(
        app(),
        Method::PUT,
        "/item/3",
        Some(json!({"name": "B", "price": 1.0})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "item_id": 3,
            "name": "B",
            "description": null,
            "price": 1.0,
            "tax": null
        })
    );
}

#[tokio::test]
async fn update_item_requires_an_integer_id() {
    let (status, body) = send(
        app(),
        Method::PUT,
        "/item/seven",
        Some(json!({"name": "A", "price": 10.0})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));
}
