mod common;

use axum::http::StatusCode;
use common::{accounts, ids, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_list_seeded_shifts() {
    let app = setup_test_app();
    let token = app.token_for(accounts::TEACHER).await;

    let (status, body) = app.get("/api/shifts", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["sh1", "sh2"]);
    assert_eq!(body[0]["start_time"], "08:00:00");
}

#[tokio::test]
async fn test_create_shift_requires_manage_shifts() {
    let app = setup_test_app();
    let teacher = app.token_for(accounts::TEACHER).await;
    let rp = app.token_for(accounts::RESOURCE_PERSON).await;
    let shift = json!({
        "name": "Night Shift",
        "start_time": "20:00:00",
        "end_time": "02:00:00",
        "color": "#111827"
    });

    let (status, _) = app.post("/api/shifts", &teacher, shift.clone()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.post("/api/shifts", &rp, shift.clone()).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["name"], "Night Shift");

    let (status, _) = app.post("/api/shifts", &rp, shift).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .post(
            "/api/shifts",
            &rp,
            json!({ "name": "Zero", "start_time": "09:00:00", "end_time": "09:00:00", "color": "#000" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_roster_assignment() {
    let app = setup_test_app();
    let rp = app.token_for(accounts::RESOURCE_PERSON).await;
    let teacher = app.token_for(accounts::TEACHER).await;
    let school = app.token_for(accounts::SCHOOL).await;

    let (status, body) = app
        .post(
            "/api/shifts/roster",
            &rp,
            json!({ "shift_id": "sh1", "user_id": "u2", "date": "2026-03-02" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["department_id"], "d1");

    // Reassigning the same day replaces the earlier entry.
    let (status, _) = app
        .post(
            "/api/shifts/roster",
            &rp,
            json!({ "shift_id": "sh2", "user_id": "u2", "date": "2026-03-02" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, roster) = app.get("/api/shifts/roster", &teacher).await;
    assert_eq!(roster.as_array().unwrap().len(), 1);
    assert_eq!(roster[0]["shift_id"], "sh2");

    // Others only see their own roster entries.
    let (_, roster) = app.get("/api/shifts/roster", &school).await;
    assert!(roster.as_array().unwrap().is_empty());

    let (status, _) = app
        .post(
            "/api/shifts/roster",
            &rp,
            json!({ "shift_id": "sh1", "user_id": "u_parent", "date": "2026-03-02" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(
            "/api/shifts/roster",
            &rp,
            json!({ "shift_id": "sh9", "user_id": "u2", "date": "2026-03-02" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shift_swap_workflow() {
    let app = setup_test_app();
    let teacher = app.token_for(accounts::TEACHER).await;
    let school = app.token_for(accounts::SCHOOL).await;
    let rp = app.token_for(accounts::RESOURCE_PERSON).await;

    let (status, request) = app
        .post(
            "/api/shifts/requests",
            &teacher,
            json!({
                "current_shift": "Morning Shift",
                "requested_shift": "Evening Shift",
                "date": "2026-03-09",
                "reason": "Clinic appointment"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", request);
    assert_eq!(request["status"], "pending");
    let uri = format!("/api/shifts/requests/{}", request["id"].as_str().unwrap());

    // School principals do not decide swaps.
    let (_, queue) = app.get("/api/shifts/requests/approvals", &school).await;
    assert!(queue.as_array().unwrap().is_empty());
    let (status, _) = app.patch(&uri, &school, json!({ "status": "approved" })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, queue) = app.get("/api/shifts/requests/approvals", &rp).await;
    assert_eq!(ids(&queue), vec![request["id"].as_str().unwrap()]);

    let (status, body) = app.patch(&uri, &rp, json!({ "status": "approved" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decided_by"], "u_rp");

    let (_, visible) = app.get("/api/shifts/requests", &teacher).await;
    assert_eq!(visible[0]["status"], "approved");
}

#[tokio::test]
async fn test_swap_to_same_shift_rejected() {
    let app = setup_test_app();
    let teacher = app.token_for(accounts::TEACHER).await;

    let (status, _) = app
        .post(
            "/api/shifts/requests",
            &teacher,
            json!({
                "current_shift": "Morning Shift",
                "requested_shift": "Morning Shift",
                "date": "2026-03-09",
                "reason": "No change"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
