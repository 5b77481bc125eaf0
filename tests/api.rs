//! End-to-end tests driving the router with in-memory requests.

use airline_backend::server::{
    config::Config,
    router::router,
    startup::connect_to_database,
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db: DatabaseConnection = test.db.as_ref().unwrap().clone();

    (test, router(AppState::new(db)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

#[tokio::test]
async fn create_airplane_then_duplicate() {
    let (_test, app) = setup().await;
    let body = json!({
        "serialNumber": "737",
        "manufacturer": "Boeing",
        "modelNumber": "737-800",
        "typeRating": "B"
    });

    let (status, json) = send(&app, Method::POST, "/api/airplanes", Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Airplane added successfully");
    assert_eq!(json["id"], 737);

    let (status, json) = send(&app, Method::POST, "/api/airplanes", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let (_test, app) = setup().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/airplanes",
        Some(json!({ "serialNumber": 1, "manufacturer": "  ", "modelNumber": "X", "typeRating": "A" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "All fields are required");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (_test, app) = setup().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/staff")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn staff_ids_are_generated() {
    let (_test, app) = setup().await;
    let body = json!({
        "firstName": "John",
        "surname": "Smith",
        "salary": "50000",
        "homeAddress": "1 Road",
        "workAddress": "2 Road",
        "homePhoneNum": "0100",
        "workPhoneNum": "0200"
    });

    let (status, first) = send(&app, Method::POST, "/api/staff", Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["id"], "jsmith");

    let (_, second) = send(&app, Method::POST, "/api/staff", Some(body)).await;
    assert_eq!(second["id"], "jsmith1");
}

#[tokio::test]
async fn pilot_for_unknown_staff_is_not_found() {
    let (_test, app) = setup().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/pilot",
        Some(json!({ "staffID": "ghost", "typeRating": "A" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Staff ID ghost does not exist");
}

#[tokio::test]
async fn flight_lifecycle() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let airplane = factory::airplane::AirplaneFactory::new(db)
        .type_rating("B")
        .build()
        .await
        .unwrap();
    let staff = factory::create_staff(db).await.unwrap();
    factory::create_pilot(db, &staff.id).await.unwrap();
    let passenger = factory::create_passenger(db).await.unwrap();

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/flight",
        Some(json!({
            "flightNum": 42,
            "numSer": airplane.serial_number,
            "origin": "London",
            "destination": "Glasgow",
            "arrTime": "2024-03-01 12:00:00",
            "departureTime": "2024-03-01 10:30:00",
            "pilotID": staff.id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["flightNum"], 42);
    assert_eq!(json["pilotID"], staff.id.as_str());

    let (status, json) = send(&app, Method::GET, "/api/flights?origin=London", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["flights"][0]["flightNumber"], 42);
    assert_eq!(json["flights"][0]["departureTime"], "2024-03-01 10:30:00");

    let (status, _) = send(&app, Method::GET, "/api/flights?origin=Paris", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = send(&app, Method::GET, "/api/flights/search/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["flights"].as_array().unwrap().len(), 1);

    let uri = format!("/api/flightcrew/{}", staff.id);
    let (status, json) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["flights"][0]["flightNumber"], 42);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/booking",
        Some(json!({ "passengerID": passenger.id, "flightNum": "42" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/bookings/{}", passenger.id);
    let (status, json) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["bookings"].as_array().unwrap().len(), 1);

    let (status, json) = send(&app, Method::DELETE, "/api/flight/42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn insufficient_rating_is_bad_request() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let airplane = factory::airplane::AirplaneFactory::new(db)
        .type_rating("B")
        .build()
        .await
        .unwrap();
    let staff = factory::create_staff(db).await.unwrap();
    factory::pilot::PilotFactory::new(db, &staff.id)
        .type_rating("C")
        .build()
        .await
        .unwrap();

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/flight",
        Some(json!({
            "flightNum": 7,
            "numSer": airplane.serial_number,
            "origin": "Leeds",
            "destination": "Cardiff",
            "arrTime": "t1",
            "departureTime": "t0",
            "pilotID": staff.id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        "Pilot rating C is not sufficient for Airplane rating B"
    );
}

#[tokio::test]
async fn flight_number_beyond_i64_is_rejected() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let airplane = factory::create_airplane(db).await.unwrap();
    let staff = factory::create_staff(db).await.unwrap();
    factory::create_pilot(db, &staff.id).await.unwrap();

    for flight_num in [json!(18446744073709551615u64), json!(1e20)] {
        let (status, json) = send(
            &app,
            Method::POST,
            "/api/flight",
            Some(json!({
                "flightNum": flight_num,
                "numSer": airplane.serial_number,
                "origin": "Leeds",
                "destination": "Cardiff",
                "arrTime": "t1",
                "departureTime": "t0",
                "pilotID": staff.id
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "error");
    }

    assert_eq!(entity::prelude::Flight::find().count(db).await.unwrap(), 0);
}

#[tokio::test]
async fn non_finite_salary_is_rejected() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    for salary in ["NaN", "inf"] {
        let (status, json) = send(
            &app,
            Method::POST,
            "/api/staff",
            Some(json!({
                "firstName": "John",
                "surname": "Smith",
                "salary": salary,
                "homeAddress": "1 Road",
                "workAddress": "2 Road",
                "homePhoneNum": "0100",
                "workPhoneNum": "0200"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "error");
    }

    assert_eq!(entity::prelude::Staff::find().count(db).await.unwrap(), 0);
}

#[tokio::test]
async fn non_numeric_flight_path_is_bad_request() {
    let (_test, app) = setup().await;

    let (status, json) = send(&app, Method::DELETE, "/api/flight/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn register_and_login() {
    let (_test, app) = setup().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/passenger",
        Some(json!({
            "username": "ada",
            "firstName": "Ada",
            "surname": "Lovelace",
            "password": "engine",
            "homeAddress": "1 St James",
            "workAddress": "2 Strand",
            "homePhoneNumber": "0300",
            "workPhoneNumber": "0400"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "ada");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({ "username": "ada" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({ "username": "ada", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["status"], "error");

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({ "username": "ada", "password": "engine" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["username"], "ada");
}

#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = setup().await;

    let (status, json) = send(&app, Method::GET, "/api/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/flight"].is_object());
}

#[tokio::test]
async fn startup_runs_migrations() {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:0".parse().unwrap(),
        seed_demo_data: false,
    };

    let db = connect_to_database(&config).await.unwrap();

    db.execute_unprepared("SELECT serial_number FROM airplane")
        .await
        .unwrap();
}
