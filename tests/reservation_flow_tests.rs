// End-to-end run of the booking flow across both protocol surfaces,
// sharing one store: create through REST, read through REST and
// GraphQL, then watch a room delete cascade.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use hotel_reservations::modules::hotel::adapters::outbound::sqlite::SqliteHotelRepository;
use hotel_reservations::shell::graphql::{AppSchema, build_schema};
use hotel_reservations::shell::http;
use hotel_reservations::shell::state::AppState;

async fn make_app() -> (Router, AppSchema) {
    let repository = SqliteHotelRepository::connect_in_memory()
        .await
        .expect("open in-memory store");
    repository.run_migrations().await.expect("run migrations");
    let state = AppState::new(repository);
    let schema = build_schema(state.clone());
    (http::router(state, schema.clone()), schema)
}

async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::post(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED, "POST {path}");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn booking_flow_spans_both_surfaces_and_cascades_on_room_delete() {
    let (app, schema) = make_app().await;

    let guest = post_json(
        &app,
        "/guests",
        json!({ "name": "A", "register_date": "2024-04-20T09:00:00Z" }),
    )
    .await;
    let room = post_json(
        &app,
        "/rooms",
        json!({ "number": 101, "name": "yellow-room", "status": "available" }),
    )
    .await;
    let reservation = post_json(
        &app,
        "/reservations",
        json!({
            "room_id": room["id"],
            "guest_id": guest["id"],
            "checkin_date": "2024-05-01T14:00:00Z",
            "checkout_date": "2024-05-04T10:00:00Z"
        }),
    )
    .await;
    let reservation_id = reservation["id"].as_i64().unwrap();

    // REST read resolves both parents.
    let (status, detail) = get_json(&app, &format!("/reservations/{reservation_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["room"]["number"], 101);
    assert_eq!(detail["guest"]["name"], "A");

    // The graph surface sees the same booking, shaped for its transport.
    let response = schema
        .execute("{ reservations { id room { number } guest { name } } }")
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["reservations"][0]["id"], reservation_id);
    assert_eq!(data["reservations"][0]["room"]["number"], 101);
    assert_eq!(data["reservations"][0]["guest"]["name"], "A");

    // Deleting the room takes the reservation with it.
    let deleted = app
        .clone()
        .oneshot(
            Request::delete(format!("/rooms/{}", room["id"].as_i64().unwrap()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let (status, list) = get_json(&app, "/reservations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));

    let response = schema.execute("{ reservations { id } }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["reservations"], json!([]));

    // The guest survives the cascade on both surfaces.
    let (status, _) = get_json(&app, &format!("/guests/{}", guest["id"].as_i64().unwrap())).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn a_mutation_on_one_surface_is_visible_on_the_other() {
    let (app, schema) = make_app().await;

    let response = schema
        .execute(
            r#"mutation {
                createGuest(name: "George Michael", registerDate: "2024-04-25T09:00:00Z") { id }
            }"#,
        )
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let id = data["createGuest"]["id"].as_i64().unwrap();

    let (status, body) = get_json(&app, &format!("/guests/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "George Michael");
}

#[tokio::test]
async fn health_probe_responds() {
    let (app, _schema) = make_app().await;

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
