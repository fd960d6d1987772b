//! Integration tests for the session API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. Each test builds its own [`AppState`], so no
//! session leaks between tests.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use crushsim_api::router::build_router;
use crushsim_api::state::AppState;
use crushsim_core::Catalog;
use crushsim_types::{CatalogObject, ObjectKind, ParticleMaterial};
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_router() -> Router {
    build_router(Arc::new(AppState::new()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn post(router: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn post_empty(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::post(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn start_session(router: &Router, mode: &str) -> String {
    let (status, json) = post(
        router,
        "/api/session/start",
        &json!({
            "mode": mode,
            "objects_crushed": [],
            "total_satisfaction": 0,
            "session_duration": 0,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["session_id"].as_str().unwrap().to_owned()
}

async fn crush(router: &Router, session_id: &str, object_id: &str) -> (StatusCode, Value) {
    post(
        router,
        &format!("/api/session/{session_id}/crush"),
        &json!({"object_id": object_id, "force": 1.0, "position": {"x": 0, "y": 0}}),
    )
    .await
}

// =========================================================================
// Status and catalog
// =========================================================================

#[tokio::test]
async fn test_root_status() {
    let router = make_router();

    for uri in ["/api/", "/api"] {
        let (status, json) = get(&router, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Crush Simulator API");
        assert_eq!(json["status"], "running");
    }
}

#[tokio::test]
async fn test_list_objects() {
    let router = make_router();

    let (status, json) = get(&router, "/api/objects").await;

    assert_eq!(status, StatusCode::OK);
    let objects = json["objects"].as_array().unwrap();
    assert_eq!(objects.len(), 5);
    assert_eq!(objects[0]["id"], "can_aluminum");
    assert_eq!(objects[0]["type"], "can");
    assert_eq!(objects[0]["particles"], "metal");
    assert_eq!(objects[0]["vibration_pattern"], json!([100, 50, 200]));
    assert_eq!(objects[0]["crush_time"], 2.5);
    assert_eq!(objects[4]["id"], "plastic_bottle");
}

#[tokio::test]
async fn test_get_each_object_by_id() {
    let router = make_router();

    let (_, list) = get(&router, "/api/objects").await;
    for object in list["objects"].as_array().unwrap() {
        let id = object["id"].as_str().unwrap();
        let (status, json) = get(&router, &format!("/api/objects/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], id);
        assert_eq!(&json, object);
    }
}

#[tokio::test]
async fn test_get_object_not_found() {
    let router = make_router();

    let (status, json) = get(&router, "/api/objects/does_not_exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Object not found");
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn test_list_modes() {
    let router = make_router();

    let (status, json) = get(&router, "/api/modes").await;

    assert_eq!(status, StatusCode::OK);
    let modes = json["modes"].as_array().unwrap();
    let ids: Vec<&str> = modes.iter().map(|m| m["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["interactive", "auto", "mixed"]);
    assert_eq!(modes[0]["name"], "Interactive Mode");
    assert_eq!(modes[0]["icon"], "👆");
}

// =========================================================================
// Session lifecycle
// =========================================================================

#[tokio::test]
async fn test_start_session() {
    let router = make_router();

    let (status, json) = post(&router, "/api/session/start", &json!({"mode": "auto"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Session started successfully");
    let id = json["session_id"].as_str().unwrap();
    assert!(id.parse::<uuid::Uuid>().is_ok());
}

#[tokio::test]
async fn test_start_session_with_empty_body_object() {
    let router = make_router();

    let (status, json) = post(&router, "/api/session/start", &json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let id = json["session_id"].as_str().unwrap();
    let (status, stats) = get(&router, &format!("/api/session/{id}/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({
            "total_crushed": 0,
            "total_satisfaction": 0,
            "objects_crushed": [],
            "session_duration": 0,
        })
    );
}

#[tokio::test]
async fn test_session_ids_are_unique() {
    let router = make_router();

    let mut ids = Vec::new();
    for _ in 0..20 {
        ids.push(start_session(&router, "interactive").await);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_crush_then_stats_scenario() {
    let router = make_router();
    let id = start_session(&router, "interactive").await;

    let (status, first) = crush(&router, &id, "can_aluminum").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["satisfaction_gained"], 8);

    let (status, second) = crush(&router, &id, "glass_bottle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["satisfaction_gained"], 9);

    let (status, stats) = get(&router, &format!("/api/session/{id}/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_crushed"], 2);
    assert_eq!(stats["total_satisfaction"], 17);
    assert_eq!(stats["objects_crushed"], json!(["can_aluminum", "glass_bottle"]));
    assert_eq!(stats["session_duration"], 0);
}

#[tokio::test]
async fn test_crush_result_payload() {
    let router = make_router();
    let id = start_session(&router, "mixed").await;

    let (status, json) = post(
        &router,
        &format!("/api/session/{id}/crush"),
        &json!({"object_id": "phone_old", "force": 2.5, "position": {"x": 120, "y": 45}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["object"]["id"], "phone_old");
    assert_eq!(json["object"]["name"], "Old Phone");
    assert_eq!(json["satisfaction_gained"], 10);
    assert_eq!(json["particles"], "mixed");
    assert_eq!(json["sound"], "electronics_crush.mp3");
    assert_eq!(json["vibration"], json!([200, 150, 300, 100]));
    assert_eq!(json["animation_duration"], 4.0);
    assert_eq!(json["force_applied"], 2.5);
}

#[tokio::test]
async fn test_crush_uses_defaults_and_accepts_odd_values() {
    let router = make_router();
    let id = start_session(&router, "interactive").await;

    let (status, json) = post(
        &router,
        &format!("/api/session/{id}/crush"),
        &json!({"object_id": "cardboard_box"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["force_applied"], 1.0);

    let (status, json) = post(
        &router,
        &format!("/api/session/{id}/crush"),
        &json!({"object_id": "cardboard_box", "force": -7.0, "position": {"z": 3}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["force_applied"], -7.0);

    let (_, stats) = get(&router, &format!("/api/session/{id}/stats")).await;
    assert_eq!(stats["total_satisfaction"], 14);
}

#[tokio::test]
async fn test_crush_accepts_non_numeric_position() {
    let router = make_router();
    let id = start_session(&router, "interactive").await;

    let (status, json) = post(
        &router,
        &format!("/api/session/{id}/crush"),
        &json!({"object_id": "can_aluminum", "position": {"x": "left", "y": null}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (status, _) = post(
        &router,
        &format!("/api/session/{id}/crush"),
        &json!({"object_id": "can_aluminum", "position": {"x": [1, 2], "tilt": {"deg": 30}}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = get(&router, &format!("/api/session/{id}/stats")).await;
    assert_eq!(stats["total_crushed"], 2);
    assert_eq!(stats["total_satisfaction"], 16);
}

#[tokio::test]
async fn test_start_session_with_negative_seed() {
    let router = make_router();

    let (status, json) = post(
        &router,
        "/api/session/start",
        &json!({"mode": "interactive", "total_satisfaction": -5, "session_duration": -1}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = json["session_id"].as_str().unwrap().to_owned();

    let (status, _) = crush(&router, &id, "can_aluminum").await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = get(&router, &format!("/api/session/{id}/stats")).await;
    assert_eq!(stats["total_satisfaction"], 3);
    assert_eq!(stats["session_duration"], -1);
}

#[tokio::test]
async fn test_end_session() {
    let router = make_router();
    let id = start_session(&router, "auto").await;
    let _ = crush(&router, &id, "plastic_bottle").await;

    let (status, json) = post_empty(&router, &format!("/api/session/{id}/end")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Session ended successfully");
    let stats = &json["stats"];
    assert_eq!(stats["session_id"], id.as_str());
    assert_eq!(stats["user_id"], id.as_str());
    assert_eq!(stats["mode"], "auto");
    assert_eq!(stats["active"], false);
    assert_eq!(stats["objects_crushed"], json!(["plastic_bottle"]));
    assert_eq!(stats["total_satisfaction"], 6);
    assert!(stats["created_at"].is_string());
    assert!(stats["ended_at"].is_string());
}

#[tokio::test]
async fn test_end_session_twice_is_accepted() {
    let router = make_router();
    let id = start_session(&router, "interactive").await;

    let (first, _) = post_empty(&router, &format!("/api/session/{id}/end")).await;
    let (second, json) = post_empty(&router, &format!("/api/session/{id}/end")).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(json["stats"]["active"], false);
}

// =========================================================================
// Not-found handling
// =========================================================================

#[tokio::test]
async fn test_unknown_session_is_404_everywhere() {
    let router = make_router();
    let random = uuid::Uuid::new_v4().to_string();
    let uppercase = random.to_uppercase();
    let hyphenless = random.replace('-', "");

    for id in [
        random.as_str(),
        uppercase.as_str(),
        hyphenless.as_str(),
        "invalid-session-id",
    ] {
        let (status, json) = crush(&router, id, "can_aluminum").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["detail"], "Session not found");

        let (status, _) = get(&router, &format!("/api/session/{id}/stats")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = post_empty(&router, &format!("/api/session/{id}/end")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_other_spellings_of_live_session_id_are_404() {
    let router = make_router();
    let id = start_session(&router, "interactive").await;
    let (status, _) = get(&router, &format!("/api/session/{id}/stats")).await;
    assert_eq!(status, StatusCode::OK);

    let uppercase = id.to_uppercase();
    let hyphenless = id.replace('-', "");
    let urn = format!("urn:uuid:{id}");

    for variant in [&uppercase, &hyphenless, &urn] {
        let (status, json) = get(&router, &format!("/api/session/{variant}/stats")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "variant {variant}");
        assert_eq!(json["detail"], "Session not found");

        let (status, _) = crush(&router, variant, "can_aluminum").await;
        assert_eq!(status, StatusCode::NOT_FOUND, "variant {variant}");

        let (status, _) = post_empty(&router, &format!("/api/session/{variant}/end")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "variant {variant}");
    }

    let (_, stats) = get(&router, &format!("/api/session/{id}/stats")).await;
    assert_eq!(stats["total_crushed"], 0);
}

#[tokio::test]
async fn test_crush_unknown_session_does_not_create_it() {
    let state = Arc::new(AppState::new());
    let router = build_router(Arc::clone(&state));
    let random = uuid::Uuid::new_v4().to_string();

    let (status, _) = crush(&router, &random, "can_aluminum").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(state.sessions.is_empty().await);

    let (status, _) = get(&router, &format!("/api/session/{random}/stats")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_crush_unknown_object_leaves_session_unchanged() {
    let router = make_router();
    let id = start_session(&router, "interactive").await;
    let _ = crush(&router, &id, "can_aluminum").await;

    let (_, before) = get(&router, &format!("/api/session/{id}/stats")).await;
    let (status, json) = crush(&router, &id, "invalid-object").await;
    let (_, after) = get(&router, &format!("/api/session/{id}/stats")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Object not found");
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_crush_without_object_id_is_rejected() {
    let router = make_router();
    let id = start_session(&router, "interactive").await;

    let response = router
        .clone()
        .oneshot(
            Request::post(format!("/api/session/{id}/crush"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"force": 1.0}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    let (_, stats) = get(&router, &format!("/api/session/{id}/stats")).await;
    assert_eq!(stats["total_crushed"], 0);
}

// =========================================================================
// Isolation
// =========================================================================

#[tokio::test]
async fn test_sessions_are_isolated() {
    let router = make_router();
    let a = start_session(&router, "interactive").await;
    let b = start_session(&router, "auto").await;

    for object_id in ["can_aluminum", "cardboard_box", "phone_old"] {
        let (status, _) = crush(&router, &a, object_id).await;
        assert_eq!(status, StatusCode::OK);
    }
    let _ = crush(&router, &b, "glass_bottle").await;

    let (_, stats_a) = get(&router, &format!("/api/session/{a}/stats")).await;
    let (_, stats_b) = get(&router, &format!("/api/session/{b}/stats")).await;

    assert_eq!(stats_a["total_crushed"], 3);
    assert_eq!(stats_a["total_satisfaction"], 25);
    assert_eq!(stats_b["total_crushed"], 1);
    assert_eq!(stats_b["objects_crushed"], json!(["glass_bottle"]));
}

#[tokio::test]
async fn test_custom_catalog_is_served() {
    let catalog = Catalog::new(vec![CatalogObject {
        id: String::from("egg_carton"),
        name: String::from("Egg Carton"),
        kind: ObjectKind::Box,
        difficulty: 1,
        sound: String::from("carton_crush.mp3"),
        particles: ParticleMaterial::Paper,
        vibration_pattern: vec![60, 30],
        crush_time: 1.5,
        satisfaction_score: 4,
    }]);
    let router = build_router(Arc::new(AppState::with_catalog(catalog)));

    let (_, list) = get(&router, "/api/objects").await;
    assert_eq!(list["objects"].as_array().unwrap().len(), 1);

    let (status, _) = get(&router, "/api/objects/can_aluminum").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = start_session(&router, "mixed").await;
    let (status, json) = crush(&router, &id, "egg_carton").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["satisfaction_gained"], 4);

    let (status, _) = crush(&router, &id, "can_aluminum").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_separate_states_do_not_share_sessions() {
    let first = make_router();
    let second = make_router();
    let id = start_session(&first, "interactive").await;

    let (status, _) = get(&second, &format!("/api/session/{id}/stats")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_crushes_on_one_session() {
    let router = make_router();
    let id = start_session(&router, "auto").await;

    let mut handles = Vec::new();
    for _ in 0..50 {
        let router = router.clone();
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            crush(&router, &id, "glass_bottle").await.0
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let (_, stats) = get(&router, &format!("/api/session/{id}/stats")).await;
    assert_eq!(stats["total_crushed"], 50);
    assert_eq!(stats["total_satisfaction"], 450);
}

// =========================================================================
// CORS
// =========================================================================

#[tokio::test]
async fn test_cors_preflight_mirrors_origin_with_credentials() {
    let router = make_router();

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/session/start")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}
