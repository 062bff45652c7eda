use axum::http::StatusCode;
use axum_test::TestServer;
use hostel::api::router::ApiRoutes;
use hostel::api::test_utils::create_test_app_state;
use serde_json::{json, Value};

async fn register(server: &TestServer, user_id: &str, role: &str) -> axum_test::TestResponse {
    server
        .post("/api/v1/register")
        .json(&json!({
            "userId": user_id,
            "name": user_id,
            "email": format!("{user_id}@example.com"),
            "role": role,
            "password": "secret",
        }))
        .await
}

async fn login(server: &TestServer, user_id: &str) -> String {
    let response = server
        .post("/api/v1/login")
        .json(&json!({ "identifier": user_id, "password": "secret" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Register, request a room, approve it and check the occupants
#[tokio::test]
async fn test_room_request_end_to_end() {
    let state = create_test_app_state().await;
    let server = TestServer::new(ApiRoutes::create(state)).unwrap();

    assert_eq!(
        register(&server, "warden", "admin").await.status_code(),
        StatusCode::CREATED
    );
    assert_eq!(
        register(&server, "warden2", "admin").await.status_code(),
        StatusCode::CONFLICT
    );
    let student = register(&server, "stu001", "student").await;
    assert_eq!(student.status_code(), StatusCode::CREATED);
    assert!(student.json::<Value>().get("passwordHash").is_none());

    let admin = login(&server, "warden").await;
    let stu = login(&server, "stu001").await;

    let response = server
        .post("/api/v1/rooms")
        .authorization_bearer(&admin)
        .json(&json!({ "number": "101", "roomType": "double", "hostelBlock": "A" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["capacity"], 2);

    let response = server
        .post("/api/v1/room-requests")
        .authorization_bearer(&stu)
        .json(&json!({ "roomNumber": "101" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let request = response.json::<Value>();
    assert_eq!(request["status"], "pending");
    let request_id = request["id"].as_str().unwrap().to_string();

    let response = server
        .get("/api/v1/rooms/101")
        .authorization_bearer(&admin)
        .await;
    assert_eq!(response.json::<Value>()["status"], "requested");

    // Students cannot approve
    let response = server
        .post(&format!("/api/v1/room-requests/{request_id}/approve"))
        .authorization_bearer(&stu)
        .json(&json!({}))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = server
        .post(&format!("/api/v1/room-requests/{request_id}/approve"))
        .authorization_bearer(&admin)
        .json(&json!({}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "approved");

    let response = server
        .get("/api/v1/rooms/101")
        .authorization_bearer(&admin)
        .await;
    let room = response.json::<Value>();
    assert_eq!(room["occupants"], json!(["stu001"]));
    assert_eq!(room["status"], "vacant");

    // A decided request cannot be decided again
    let response = server
        .post(&format!("/api/v1/room-requests/{request_id}/deny"))
        .authorization_bearer(&admin)
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    // The student only sees their own room
    let response = server.get("/api/v1/rooms").authorization_bearer(&stu).await;
    let rooms = response.json::<Value>();
    assert_eq!(rooms.as_array().unwrap().len(), 1);
    assert_eq!(rooms[0]["number"], "101");

    let response = server
        .patch("/api/v1/rooms/101")
        .authorization_bearer(&admin)
        .json(&json!({ "hostelBlock": "B" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["hostelBlock"], "B");

    // Occupied rooms cannot be deleted
    let response = server
        .delete("/api/v1/rooms/101")
        .authorization_bearer(&admin)
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_fee_lifecycle() {
    let state = create_test_app_state().await;
    let server = TestServer::new(ApiRoutes::create(state)).unwrap();
    register(&server, "warden", "admin").await;
    register(&server, "stu001", "student").await;
    let admin = login(&server, "warden").await;
    let stu = login(&server, "stu001").await;

    let response = server
        .post("/api/v1/fees")
        .authorization_bearer(&admin)
        .json(&json!({ "studentId": "stu001", "amountCents": 150000, "dueDate": "2026-11-01" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let fee_id = response.json::<Value>()["id"].as_str().unwrap().to_string();

    let response = server.get("/api/v1/fees").authorization_bearer(&stu).await;
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 1);

    let response = server
        .post(&format!("/api/v1/fees/{fee_id}/pay"))
        .authorization_bearer(&stu)
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = server
        .post(&format!("/api/v1/fees/{fee_id}/pay"))
        .authorization_bearer(&admin)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "paid");

    let response = server
        .post(&format!("/api/v1/fees/{fee_id}/pay"))
        .authorization_bearer(&admin)
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let response = server
        .delete(&format!("/api/v1/fees/{fee_id}"))
        .authorization_bearer(&admin)
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    let response = server
        .delete(&format!("/api/v1/fees/{fee_id}"))
        .authorization_bearer(&admin)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_maintenance_and_visitors() {
    let state = create_test_app_state().await;
    let server = TestServer::new(ApiRoutes::create(state)).unwrap();
    register(&server, "warden", "admin").await;
    register(&server, "staff1", "staff").await;
    register(&server, "stu001", "student").await;
    let admin = login(&server, "warden").await;
    let staff = login(&server, "staff1").await;
    let stu = login(&server, "stu001").await;

    let response = server
        .post("/api/v1/maintenance")
        .authorization_bearer(&stu)
        .json(&json!({ "description": "Leaking tap" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let ticket_id = response.json::<Value>()["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/v1/maintenance/{ticket_id}/assign"))
        .authorization_bearer(&admin)
        .json(&json!({ "staffId": "staff1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["assignedStaff"], "staff1");

    let response = server
        .post(&format!("/api/v1/maintenance/{ticket_id}/status"))
        .authorization_bearer(&staff)
        .json(&json!({ "status": "resolved" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .post("/api/v1/visitors")
        .authorization_bearer(&stu)
        .json(&json!({
            "visitorName": "Parent",
            "contactNumber": "555-0100",
            "purpose": "Weekend visit",
            "date": "2026-11-14",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let visit_id = response.json::<Value>()["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/v1/visitors/{visit_id}/approve"))
        .authorization_bearer(&stu)
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = server
        .post(&format!("/api/v1/visitors/{visit_id}/approve"))
        .authorization_bearer(&admin)
        .await;
    assert_eq!(response.json::<Value>()["status"], "approved");
}
