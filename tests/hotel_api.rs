//! Hotel API Integration Tests
//!
//! Drives the full router over a temp-file database: dispatch, body
//! validation, conflict detection, sort-key selection, partial update,
//! and status-code framing.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use innkeeper::api::HttpServer;
use innkeeper::config::Config;
use innkeeper::db::{Database, DbConfig};

// =============================================================================
// Test Utilities
// =============================================================================

async fn test_router(dir: &TempDir) -> Router {
    let database = Database::connect(&DbConfig::new(dir.path().join("test.db")))
        .await
        .unwrap();
    HttpServer::new(Config::default(), database).router()
}

async fn send(router: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request(method, path, body))
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn request(method: Method, path: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(path);
    match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn pearl_continental() -> Value {
    json!({
        "hotel_name": "Pearl Continental",
        "rooms_available": 50,
        "location": "Lahore",
        "rating": 4.2,
        "price_per_room": 120
    })
}

async fn add_hotel(router: &Router, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, "/hotels/add", Some(body)).await
}

// =============================================================================
// Dispatch
// =============================================================================

#[tokio::test]
async fn test_index_returns_route_map() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let (status, body) = send(&router, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to the Hotel Management System API");
    assert!(body["hotel_routes"].is_object());
    assert!(body["user_routes"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let (status, body) = send(&router, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route not found.");

    let (status, _) = send(&router, Method::POST, "/hotels", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_are_json_with_cors_headers() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let mut req = request(Method::GET, "/hotels", None);
    req.headers_mut()
        .insert(header::ORIGIN, "http://localhost:5173".parse().unwrap());
    let response = router.clone().oneshot(req).await.unwrap();

    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_preflight_short_circuits() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let mut req = request(Method::OPTIONS, "/hotels/add", None);
    req.headers_mut()
        .insert(header::ORIGIN, "http://localhost:5173".parse().unwrap());
    req.headers_mut().insert(
        header::ACCESS_CONTROL_REQUEST_METHOD,
        "POST".parse().unwrap(),
    );
    let response = router.clone().oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let allowed = &response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS];
    assert_eq!(allowed, "GET,POST,PUT,DELETE");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

// =============================================================================
// Insert & Conflict
// =============================================================================

#[tokio::test]
async fn test_add_hotel_then_duplicate_conflicts() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let (status, body) = add_hotel(&router, pearl_continental()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hotel added successfully.");

    // Identical repeat conflicts
    let (status, body) = add_hotel(&router, pearl_continental()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Hotel 'Pearl Continental' already exists in Lahore."
    );

    // Conflict is on (name, location) regardless of other fields
    let mut other = pearl_continental();
    other["rating"] = json!(1.0);
    other["rooms_available"] = json!(3);
    let (status, _) = add_hotel(&router, other).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_hotel_malformed_json_is_400() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/hotels/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_hotel_missing_field_is_400() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let (status, body) = add_hotel(&router, json!({"hotel_name": "Incomplete"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// =============================================================================
// Fetch, Filter, Sort
// =============================================================================

#[tokio::test]
async fn test_list_hotels() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let (status, body) = send(&router, Method::GET, "/hotels", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    add_hotel(&router, pearl_continental()).await;
    let (status, body) = send(&router, Method::GET, "/hotels", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["hotel_name"], "Pearl Continental");
    assert_eq!(body[0]["rooms_available"], 50);
    assert_eq!(body[0]["id"], 1);
}

#[tokio::test]
async fn test_location_filter() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;
    add_hotel(&router, pearl_continental()).await;

    let (status, body) = send(&router, Method::GET, "/hotels/location/Lahore", None).await;
    assert_eq!(status, StatusCode::OK);
    let hotels = body.as_array().unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0]["hotel_name"], "Pearl Continental");

    // Zero matches is 404, not an empty success
    let (status, body) = send(&router, Method::GET, "/hotels/location/Multan", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No hotels found in location 'Multan'.");
}

#[tokio::test]
async fn test_location_filter_decodes_path_segment() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let mut hotel = pearl_continental();
    hotel["location"] = json!("New York");
    add_hotel(&router, hotel).await;

    let (status, body) = send(&router, Method::GET, "/hotels/location/New%20York", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["location"], "New York");
}

#[tokio::test]
async fn test_sort_orders() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    for (name, location, rating, rooms) in [
        ("Beach Luxury", "Karachi", 3.1, 90),
        ("Avari Towers", "Karachi", 4.4, 80),
        ("Pearl Continental", "Lahore", 4.2, 50),
    ] {
        add_hotel(
            &router,
            json!({
                "hotel_name": name,
                "rooms_available": rooms,
                "location": location,
                "rating": rating,
                "price_per_room": 100
            }),
        )
        .await;
    }

    let (status, body) = send(&router, Method::GET, "/hotels/sort/name", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["hotel_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Avari Towers", "Beach Luxury", "Pearl Continental"]);

    let (_, body) = send(&router, Method::GET, "/hotels/sort/rating", None).await;
    let ratings: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["rating"].as_f64().unwrap())
        .collect();
    assert!(ratings.windows(2).all(|w| w[0] >= w[1]));

    let (_, body) = send(&router, Method::GET, "/hotels/sort/rooms", None).await;
    let rooms: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["rooms_available"].as_i64().unwrap())
        .collect();
    assert!(rooms.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_sort_invalid_key_is_400() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let (status, body) = send(&router, Method::GET, "/hotels/sort/invalid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid sort type. Use 'name', 'rating', or 'rooms'.");
}

// =============================================================================
// Partial Update
// =============================================================================

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;
    add_hotel(&router, pearl_continental()).await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/hotels/update/1",
        Some(json!({"rating": 4.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hotel with ID '1' updated successfully.");

    let (_, body) = send(&router, Method::GET, "/hotels", None).await;
    assert_eq!(body[0]["rating"], 4.5);
    assert_eq!(body[0]["hotel_name"], "Pearl Continental");
    assert_eq!(body[0]["rooms_available"], 50);
    assert_eq!(body[0]["location"], "Lahore");
    assert_eq!(body[0]["price_per_room"], 120.0);
}

#[tokio::test]
async fn test_update_ignores_unknown_keys() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;
    add_hotel(&router, pearl_continental()).await;

    let (status, _) = send(
        &router,
        Method::PUT,
        "/hotels/update/1",
        Some(json!({"rating": 3.9, "owner": "nobody"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_missing_hotel_is_404() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/hotels/update/42",
        Some(json!({"rating": 4.5})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Hotel with ID '42' not found.");
}

#[tokio::test]
async fn test_update_empty_body_is_400() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;
    add_hotel(&router, pearl_continental()).await;

    let (status, body) = send(&router, Method::PUT, "/hotels/update/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No valid fields to update.");
}

#[tokio::test]
async fn test_update_non_numeric_id_is_400() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/hotels/update/abc",
        Some(json!({"rating": 4.5})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid identifier 'abc'.");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_then_repeat_is_404() {
    let dir = TempDir::new().unwrap();
    let router = test_router(&dir).await;
    add_hotel(&router, pearl_continental()).await;

    let (status, body) = send(&router, Method::DELETE, "/hotels/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hotel with ID '1' deleted successfully.");

    let (status, body) = send(&router, Method::DELETE, "/hotels/delete/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Hotel with ID '1' not found.");
}
