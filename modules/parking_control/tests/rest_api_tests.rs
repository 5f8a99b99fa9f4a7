//! REST API tests driving the router over in-memory SQLite

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use parking_control::ParkingControlModule;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;
use common::sqlite_db;

async fn create_test_router() -> Router {
    let db = sqlite_db().await;
    let module = ParkingControlModule::default();
    module.init(db).await.expect("Failed to init module");
    module
        .register_rest(Router::new())
        .expect("Failed to register routes")
}

fn body(n: u32) -> Value {
    json!({
        "parkingSpotNumber": format!("{n:03}A"),
        "licensePlateCar": format!("ABC{n:04}"),
        "brandCar": "audi",
        "modelCar": "q5",
        "colorCar": "black",
        "responsibleName": format!("Resident {n}"),
        "apartment": format!("{}", 100 + n),
        "block": "A",
    })
}

async fn send(router: &Router, method: Method, uri: &str, payload: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, bytes.to_vec())
}

async fn send_json(router: &Router, method: Method, uri: &str, payload: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(router, method, uri, payload).await;
    let value = serde_json::from_slice(&bytes).expect("Response is not JSON");
    (status, value)
}

#[tokio::test]
async fn test_create_returns_created_record() {
    let router = create_test_router().await;

    let (status, created) = send_json(&router, Method::POST, "/parking-spot", Some(body(1))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(created["id"].as_str().is_some_and(|id| uuid::Uuid::parse_str(id).is_ok()));
    assert!(created["registrationDate"].is_string());
    assert_eq!(created["licensePlateCar"], "ABC0001");
    assert_eq!(created["block"], "A");
}

#[tokio::test]
async fn test_create_conflicts_return_409_with_message() {
    let router = create_test_router().await;

    let mut first = body(1);
    first["licensePlateCar"] = json!("ABC1234");
    first["apartment"] = json!("101");
    let (status, _) = send_json(&router, Method::POST, "/parking-spot", Some(first)).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut same_plate = body(2);
    same_plate["licensePlateCar"] = json!("ABC1234");
    let (status, problem) = send_json(&router, Method::POST, "/parking-spot", Some(same_plate)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(problem["status"], 409);
    assert_eq!(problem["detail"], "plate already registered");

    let mut same_apartment = body(3);
    same_apartment["apartment"] = json!("101");
    let (status, problem) =
        send_json(&router, Method::POST, "/parking-spot", Some(same_apartment)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(problem["detail"], "parking spot already registered to that apartment");

    let (_, page) = send_json(&router, Method::GET, "/parking-spot", None).await;
    assert_eq!(page["totalElements"], 1);
}

#[tokio::test]
async fn test_create_validation_errors_return_400() {
    let router = create_test_router().await;

    let mut blank = body(1);
    blank["brandCar"] = json!("  ");
    let (status, problem) = send_json(&router, Method::POST, "/parking-spot", Some(blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["detail"], "brandCar must not be blank");

    let mut missing = body(1);
    missing
        .as_object_mut()
        .expect("object body")
        .remove("block");
    let (status, problem) = send_json(&router, Method::POST, "/parking-spot", Some(missing)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["detail"], "block must not be blank");

    let (_, page) = send_json(&router, Method::GET, "/parking-spot", None).await;
    assert_eq!(page["totalElements"], 0);
}

#[tokio::test]
async fn test_unknown_or_malformed_id() {
    let router = create_test_router().await;
    let uri = format!("/parking-spot/{}", uuid::Uuid::new_v4());

    let (status, problem) = send_json(&router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["detail"], "parking spot not found");

    let (status, problem) = send_json(&router, Method::PUT, &uri, Some(body(1))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["detail"], "parking spot not found");

    let (status, problem) = send_json(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["detail"], "parking spot not found");

    let (status, _) = send_json(&router, Method::GET, "/parking-spot/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_preserves_id_and_registration_date() {
    let router = create_test_router().await;

    let (_, created) = send_json(&router, Method::POST, "/parking-spot", Some(body(1))).await;
    let id = created["id"].as_str().expect("id").to_string();
    let uri = format!("/parking-spot/{id}");

    let mut changes = body(1);
    changes["responsibleName"] = json!("New Resident");
    // Client-supplied identity is ignored
    changes["id"] = json!(uuid::Uuid::new_v4().to_string());
    changes["registrationDate"] = json!("2000-01-01T00:00:00Z");
    let (status, updated) = send_json(&router, Method::PUT, &uri, Some(changes)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);

    let (status, fetched) = send_json(&router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["responsibleName"], "New Resident");
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["registrationDate"], created["registrationDate"]);
}

#[tokio::test]
async fn test_list_pagination() {
    let router = create_test_router().await;

    let mut ids = Vec::new();
    for n in 1..=5 {
        let (_, created) = send_json(&router, Method::POST, "/parking-spot", Some(body(n))).await;
        ids.push(uuid::Uuid::parse_str(created["id"].as_str().expect("id")).expect("uuid"));
    }
    ids.sort();

    let (status, page) =
        send_json(&router, Method::GET, "/parking-spot?page=0&size=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalElements"], 5);
    assert_eq!(page["totalPages"], 3);
    assert_eq!(page["number"], 0);
    assert_eq!(page["size"], 2);
    let content = page["content"].as_array().expect("content");
    assert_eq!(content.len(), 2);
    assert_eq!(content[0]["id"], ids[0].to_string());
    assert_eq!(content[1]["id"], ids[1].to_string());

    let (status, page) = send_json(
        &router,
        Method::GET,
        "/parking-spot?sort=licensePlateCar,desc",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["size"], 10);
    assert_eq!(page["content"][0]["licensePlateCar"], "ABC0005");

    let (status, problem) =
        send_json(&router, Method::GET, "/parking-spot?sort=plate", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["detail"], "unknown sort field 'plate'");
}

#[tokio::test]
async fn test_list_huge_page_number_returns_empty_page() {
    let router = create_test_router().await;

    for n in 1..=3 {
        send_json(&router, Method::POST, "/parking-spot", Some(body(n))).await;
    }

    let (status, page) = send_json(
        &router,
        Method::GET,
        "/parking-spot?page=1000000000000000000&size=10",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["content"].as_array().expect("content").len(), 0);
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 1);
    assert_eq!(page["number"], 1_000_000_000_000_000_000u64);

    let uri = format!("/parking-spot?page={}&size=100", u64::MAX);
    let (status, page) = send_json(&router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["content"].as_array().expect("content").len(), 0);
    assert_eq!(page["totalElements"], 3);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let router = create_test_router().await;

    let (_, created) = send_json(&router, Method::POST, "/parking-spot", Some(body(1))).await;
    let uri = format!("/parking-spot/{}", created["id"].as_str().expect("id"));

    let (status, text) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(text).expect("utf-8"), "parking spot deleted");

    let (status, _) = send_json(&router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let router = create_test_router().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/parking-spot")
        .header(header::ORIGIN, "https://example.org")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .expect("request");
    let response = router.oneshot(request).await.expect("Router failed");

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert_eq!(response.headers()[header::ACCESS_CONTROL_MAX_AGE], "3600");
}

#[tokio::test]
async fn test_health_and_openapi() {
    let router = create_test_router().await;

    let (status, health) = send_json(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");

    let (status, doc) = send_json(&router, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/parking-spot/{id}"].is_object());
}
