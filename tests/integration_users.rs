mod common;

use axum::http::StatusCode;
use common::{accounts, ids, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_admin_sees_every_user() {
    let app = setup_test_app();
    let token = app.token_for(accounts::ADMIN).await;

    let (status, body) = app.get("/api/users", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_resource_person_sees_department_closure() {
    let app = setup_test_app();
    let token = app.token_for(accounts::RESOURCE_PERSON).await;

    let (status, body) = app.get("/api/users", &token).await;

    assert_eq!(status, StatusCode::OK);
    let mut visible = ids(&body);
    visible.sort();
    assert_eq!(visible, vec!["u2", "u_rp", "u_school"]);
}

#[tokio::test]
async fn test_other_roles_see_only_themselves() {
    let app = setup_test_app();

    for (email, id) in [
        (accounts::TEACHER, "u2"),
        (accounts::SCHOOL, "u_school"),
        (accounts::PARENT, "u_parent"),
    ] {
        let token = app.token_for(email).await;
        let (status, body) = app.get("/api/users", &token).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![id], "visibility for {}", email);
    }
}

#[tokio::test]
async fn test_profile_lists_effective_permissions() {
    let app = setup_test_app();

    let admin = app.token_for(accounts::ADMIN).await;
    let (status, body) = app.get("/api/users/profile", &admin).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["permissions"], json!(["all"]));

    let teacher = app.token_for(accounts::TEACHER).await;
    let (_, body) = app.get("/api/users/profile", &teacher).await;
    assert_eq!(body["user"]["name"], "Dr. Sarah Wilson");
    assert_eq!(
        body["permissions"],
        json!(["view_attendance", "mark_attendance", "post_notice"])
    );
}

#[tokio::test]
async fn test_resource_person_creates_user_in_own_department() {
    let app = setup_test_app();
    let token = app.token_for(accounts::RESOURCE_PERSON).await;

    let (status, body) = app
        .post(
            "/api/users",
            &token,
            json!({
                "name": "New Teacher",
                "email": "new.teacher@easwipe.com",
                "password": "longenough",
                "role": "TEACHER",
                "department_id": "s1"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["department_id"], "s1");

    // The new account can log in straight away.
    let (status, _) = app
        .send(
            axum::http::Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "new.teacher@easwipe.com", "password": "longenough" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listing) = app.get("/api/users", &token).await;
    assert_eq!(listing.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_create_user_rejections() {
    let app = setup_test_app();
    let rp = app.token_for(accounts::RESOURCE_PERSON).await;
    let teacher = app.token_for(accounts::TEACHER).await;

    let user = |email: &str, role: &str, department: Option<&str>, password: &str| {
        json!({
            "name": "Someone",
            "email": email,
            "password": password,
            "role": role,
            "department_id": department
        })
    };

    // Teachers cannot manage users at all.
    let (status, _) = app
        .post("/api/users", &teacher, user("a@easwipe.com", "STUDENT", Some("d1"), "password1"))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Only administrators hand out the administrator role.
    let (status, _) = app
        .post("/api/users", &rp, user("b@easwipe.com", "ADMIN", Some("d1"), "password1"))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Users without a department are outside every resource person's reach.
    let (status, _) = app
        .post("/api/users", &rp, user("c@easwipe.com", "STUDENT", None, "password1"))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .post("/api/users", &rp, user("d@easwipe.com", "STUDENT", Some("nowhere"), "password1"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/api/users", &rp, user(accounts::TEACHER, "STUDENT", Some("d1"), "password1"))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .post("/api/users", &rp, user("e@easwipe.com", "STUDENT", Some("d1"), "short"))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_user_within_scope() {
    let app = setup_test_app();
    let rp = app.token_for(accounts::RESOURCE_PERSON).await;

    let (status, body) = app
        .put("/api/users/u2", &rp, json!({ "phone": "+1 555 0199", "blood_group": "A+" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phone"], "+1 555 0199");
    assert_eq!(body["name"], "Dr. Sarah Wilson");

    // The parent has no department, so the resource person cannot reach them.
    let (status, _) = app
        .put("/api/users/u_parent", &rp, json!({ "name": "Renamed" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let app = setup_test_app();
    let admin = app.token_for(accounts::ADMIN).await;
    let rp = app.token_for(accounts::RESOURCE_PERSON).await;

    let (status, _) = app.delete("/api/users/u1", &rp).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/api/users/u1", &admin).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.delete("/api/users/u_parent", &admin).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get("/api/users", &admin).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_nobody_changes_their_own_role() {
    let app = setup_test_app();

    for (email, id) in [(accounts::SCHOOL, "u_school"), (accounts::ADMIN, "u1")] {
        let token = app.token_for(email).await;
        let (status, _) = app
            .put(&format!("/api/users/{}", id), &token, json!({ "role": "RESOURCE_PERSON" }))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN, "self role change for {}", email);
    }

    let school = app.token_for(accounts::SCHOOL).await;
    let (_, profile) = app.get("/api/users/profile", &school).await;
    assert_eq!(profile["user"]["role"], "SCHOOL");

    // Other fields on the own account stay editable.
    let (status, body) = app
        .put("/api/users/u_school", &school, json!({ "phone": "+1 555 0101" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phone"], "+1 555 0101");
}

#[tokio::test]
async fn test_school_cannot_touch_higher_roles() {
    let app = setup_test_app();
    let school = app.token_for(accounts::SCHOOL).await;

    // The resource person shares d1 with the principal but ranks above it.
    let (status, _) = app
        .put("/api/users/u_rp", &school, json!({ "role": "STUDENT" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app
        .put("/api/users/u_rp", &school, json!({ "name": "Renamed" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.delete("/api/users/u_rp", &school).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let rp = app.token_for(accounts::RESOURCE_PERSON).await;
    let (_, profile) = app.get("/api/users/profile", &rp).await;
    assert_eq!(profile["user"]["role"], "RESOURCE_PERSON");
    assert_eq!(profile["user"]["name"], "Mr. Area Manager");
}

#[tokio::test]
async fn test_managers_only_assign_roles_below_their_own() {
    let app = setup_test_app();
    let school = app.token_for(accounts::SCHOOL).await;
    let rp = app.token_for(accounts::RESOURCE_PERSON).await;

    let (status, _) = app
        .put("/api/users/u2", &school, json!({ "role": "RESOURCE_PERSON" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app
        .put("/api/users/u2", &school, json!({ "role": "SCHOOL" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .post(
            "/api/users",
            &school,
            json!({
                "name": "Deputy",
                "email": "deputy@easwipe.com",
                "password": "longenough",
                "role": "RESOURCE_PERSON",
                "department_id": "s1"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .put("/api/users/u2", &school, json!({ "role": "STUDENT" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "STUDENT");

    let (status, body) = app
        .put("/api/users/u_school", &rp, json!({ "role": "TEACHER" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "TEACHER");
}

#[tokio::test]
async fn test_update_rejects_taken_username() {
    let app = setup_test_app();
    let admin = app.token_for(accounts::ADMIN).await;

    let (status, _) = app
        .put("/api/users/u_parent", &admin, json!({ "username": "sarahw" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, card) = app
        .send(axum::http::Method::GET, "/api/public/id-card/sarahw", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(card["name"], "Dr. Sarah Wilson");

    // Keeping one's own username is not a conflict.
    let (status, body) = app
        .put("/api/users/u2", &admin, json!({ "username": "sarahw", "phone": "+1 555 0142" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "sarahw");
}

#[tokio::test]
async fn test_out_of_scope_update_does_not_reveal_emails() {
    let app = setup_test_app();
    let rp = app.token_for(accounts::RESOURCE_PERSON).await;
    let admin = app.token_for(accounts::ADMIN).await;

    let taken = json!({ "email": accounts::TEACHER });

    let (status, _) = app.put("/api/users/u_parent", &rp, taken.clone()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.put("/api/users/u_parent", &admin, taken).await;
    assert_eq!(status, StatusCode::CONFLICT);
}
