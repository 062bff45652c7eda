use axum::http::StatusCode;
use axum_test::TestServer;
use hostel_core::Role;
use serde_json::{json, Value};

use crate::api::router::ApiRoutes;
use crate::api::test_utils::{create_test_app_state, register_user, TEST_PASSWORD};
use crate::app_state::SharedAppState;

async fn create_server() -> (TestServer, SharedAppState) {
    let state = create_test_app_state().await;
    let server = TestServer::new(ApiRoutes::create(state.clone())).unwrap();
    (server, state)
}

async fn login(server: &TestServer, identifier: &str) -> String {
    let response = server
        .post("/api/v1/login")
        .json(&json!({ "identifier": identifier, "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let (server, _) = create_server().await;

    let response = server.get("/api/v1/rooms").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["error"], json!(true));

    let response = server
        .get("/api/v1/rooms")
        .authorization_bearer("not-a-session")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let (server, _) = create_server().await;
    let response = server.get("/api/v1/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn test_login_with_email_alias() {
    let (server, state) = create_server().await;
    register_user(&state, "stu001", Role::Student).await;

    let response = server
        .post("/api/v1/login")
        .json(&json!({ "email": "stu001@example.com", "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["user"]["role"], "student");

    let response = server
        .post("/api/v1/login")
        .json(&json!({ "userId": "stu001", "password": "wrong" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_student_is_forbidden_on_admin_routes() {
    let (server, state) = create_server().await;
    register_user(&state, "stu001", Role::Student).await;
    let token = login(&server, "stu001").await;

    let response = server
        .post("/api/v1/rooms")
        .authorization_bearer(&token)
        .json(&json!({ "number": "101", "roomType": "single" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = server
        .get("/api/v1/users")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_me_lists_allowed_actions() {
    let (server, state) = create_server().await;
    register_user(&state, "staff1", Role::Staff).await;
    let token = login(&server, "staff1").await;

    let response = server.get("/api/v1/me").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["user"]["userId"], "staff1");
    let actions = body["allowedActions"].as_array().unwrap();
    assert!(actions.contains(&json!("update_maintenance_status")));
    assert!(!actions.contains(&json!("create_room")));
}

#[tokio::test]
async fn test_logout_ends_the_session() {
    let (server, state) = create_server().await;
    register_user(&state, "stu001", Role::Student).await;
    let token = login(&server, "stu001").await;

    let response = server
        .post("/api/v1/logout")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = server.get("/api/v1/me").authorization_bearer(&token).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_and_missing_ids_are_not_found() {
    let (server, state) = create_server().await;
    register_user(&state, "warden", Role::Admin).await;
    let token = login(&server, "warden").await;

    let response = server
        .delete("/api/v1/fees/not-a-uuid")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server
        .delete(&format!("/api/v1/fees/{}", uuid::Uuid::new_v4()))
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_approve_without_body() {
    let (server, state) = create_server().await;
    register_user(&state, "warden", Role::Admin).await;
    register_user(&state, "stu001", Role::Student).await;
    let admin = login(&server, "warden").await;
    let stu = login(&server, "stu001").await;

    server
        .post("/api/v1/rooms")
        .authorization_bearer(&admin)
        .json(&json!({ "number": "101", "roomType": "single" }))
        .await;
    let request = server
        .post("/api/v1/room-requests")
        .authorization_bearer(&stu)
        .json(&json!({ "roomNumber": "101" }))
        .await
        .json::<Value>();

    let response = server
        .post(&format!("/api/v1/room-requests/{}/approve", request["id"].as_str().unwrap()))
        .authorization_bearer(&admin)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["assignedRoom"], "101");
}

#[tokio::test]
async fn test_unreadable_bodies_use_the_error_body() {
    let (server, state) = create_server().await;
    register_user(&state, "warden", Role::Admin).await;
    let token = login(&server, "warden").await;

    let response = server
        .post("/api/v1/rooms")
        .authorization_bearer(&token)
        .bytes(axum::body::Bytes::from_static(b"{not json"))
        .content_type("application/json")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], json!(true));

    let response = server
        .post("/api/v1/rooms")
        .authorization_bearer(&token)
        .json(&json!({ "number": "101", "roomType": "penthouse" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], json!(true));
    assert!(body["message"].as_str().unwrap().contains("penthouse"));
}
