//! In-process scenario tests for the shop HTTP endpoints.
//!
//! Each test builds the router over a fresh in-memory store and drives it
//! with `tower::ServiceExt::oneshot`; no socket is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use beanhouse_server::{build_router, ServerState};
use beanhouse_store::{seed, Store};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // oneshot

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_router() -> axum::Router {
    let store = Store::open_in_memory().expect("in-memory store");
    seed::seed_if_empty(&store).expect("seed");
    build_router(Arc::new(ServerState::new(store)))
}

async fn call(router: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(req).await.expect("oneshot failed");
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn place(router: &axum::Router, bean_name: &str, price: i64) -> i64 {
    let (status, json) = call(
        router,
        post_json("/api/order", json!({ "bean_name": bean_name, "price": price })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["order_id"].as_i64().expect("order_id")
}

// ---------------------------------------------------------------------------
// GET /api/menu
// ---------------------------------------------------------------------------

#[tokio::test]
async fn menu_lists_seeded_beans_with_all_fields() {
    let router = make_router();
    let (status, json) = call(&router, get("/api/menu")).await;
    assert_eq!(status, StatusCode::OK);

    let beans = json.as_array().expect("array");
    assert!(!beans.is_empty());
    for bean in beans {
        assert!(bean["id"].is_i64());
        for field in ["name", "origin", "roast_level", "flavor"] {
            assert!(!bean[field].as_str().unwrap_or_default().is_empty(), "{field} empty");
        }
        assert!(bean["price"].as_i64().unwrap() > 0);
    }
}

// ---------------------------------------------------------------------------
// POST /api/order + GET /api/order_status/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn placed_order_reports_pending() {
    let router = make_router();
    let (status, json) = call(
        &router,
        post_json("/api/order", json!({ "bean_name": "Yirgacheffe", "price": 150 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].is_string());
    let id = json["order_id"].as_i64().unwrap();

    let (status, json) = call(&router, get(&format!("/api/order_status/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "Pending");
}

#[tokio::test]
async fn order_without_body_is_400() {
    let router = make_router();
    let (status, json) = call(&router, post_empty("/api/order")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn order_missing_field_is_400() {
    let router = make_router();
    let (status, _) = call(&router, post_json("/api/order", json!({ "bean_name": "Cerrado" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&router, post_json("/api/order", json!({ "price": 120 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&router, post_json("/api/order", json!(null))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_order_status_is_404() {
    let router = make_router();
    let (status, json) = call(&router, get("/api/order_status/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["message"].is_string());

    let (status, _) = call(&router, get("/api/order_status/latte")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Admin board
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_status_walks_pending_ready_completed() {
    let router = make_router();
    let id = place(&router, "Cerrado", 120).await;
    let uri = format!("/api/admin/update_status/{id}");

    for expected in ["Ready", "Completed", "Completed"] {
        let (status, json) = call(&router, post_empty(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["new_status"], expected);
        assert!(json["message"].is_string());
    }

    let (_, json) = call(&router, get(&format!("/api/order_status/{id}"))).await;
    assert_eq!(json["status"], "Completed");
}

#[tokio::test]
async fn update_unknown_order_is_404() {
    let router = make_router();
    let (status, json) = call(&router, post_empty("/api/admin/update_status/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn admin_orders_are_newest_first_with_time_of_day() {
    let router = make_router();
    let first = place(&router, "Yirgacheffe", 180).await;
    let second = place(&router, "Mandheling G1", 150).await;
    let third = place(&router, "Cerrado", 120).await;

    let (status, json) = call(&router, get("/api/admin/orders")).await;
    assert_eq!(status, StatusCode::OK);

    let orders = json.as_array().expect("array");
    let ids: Vec<i64> = orders.iter().map(|o| o["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![third, second, first]);

    let newest = &orders[0];
    assert_eq!(newest["items"], "Cerrado");
    assert_eq!(newest["total_amount"], 120);
    assert_eq!(newest["status"], "Pending");

    let created_at = newest["created_at"].as_str().unwrap();
    let parts: Vec<&str> = created_at.split(':').collect();
    assert_eq!(parts.len(), 3, "expected HH:MM:SS, got {created_at}");
    assert!(parts.iter().all(|p| p.len() == 2 && p.parse::<u8>().is_ok()));
}

// ---------------------------------------------------------------------------
// Cross-cutting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_allows_any_origin() {
    let router = make_router();
    let req = Request::builder()
        .method("GET")
        .uri("/api/menu")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn health_returns_ok() {
    let router = make_router();
    let resp = router.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}
