mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{json, Value};

use common::app::{ADMIN_EMAIL, ADMIN_PASSWORD};
use common::{Factory, TestApp};
use portfolio_cms::client::ResourceApi;
use portfolio_cms::resource::Collection;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "email": ADMIN_EMAIL,
            "password": ADMIN_PASSWORD
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["email"].as_str().unwrap(), ADMIN_EMAIL);
    assert_eq!(body["user"]["_id"], json!(app.state.auth.admin().id));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({
            "email": ADMIN_EMAIL,
            "password": "wrong"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "Invalid credentials");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new();
    let factory = Factory::new(&app.state, &app.backend);
    let auth = factory.admin();

    app.server
        .get("/api/auth/me")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .get("/api/auth/me")
        .add_header("Authorization", auth.auth_header())
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["role"].as_str().unwrap(), "admin");
    assert_eq!(body["_id"].as_str().unwrap(), auth.admin_id);
}

#[tokio::test]
async fn test_public_read_protected_write() {
    let app = TestApp::new();
    let factory = Factory::new(&app.state, &app.backend);
    factory.create_skill("Rust").await;

    let response = app.server.get("/api/skills").await;
    response.assert_status(StatusCode::OK);
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 1);

    app.server
        .post("/api/skills")
        .json(&json!({ "name": "Go" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    app.server
        .post("/api/skills")
        .add_header("Authorization", "Bearer not-a-jwt")
        .json(&json!({ "name": "Go" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_crud_flow() {
    let app = TestApp::new();
    let auth = Factory::new(&app.state, &app.backend).admin();

    let response = app
        .server
        .post("/api/blogs")
        .add_header("Authorization", auth.auth_header())
        .json(&json!({ "title": "Hello", "url": "https://blog.example.com/hello" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    let id = created["_id"].as_str().unwrap().to_string();
    assert!(created["createdAt"].as_str().is_some());

    let response = app
        .server
        .put(&format!("/api/blogs/{}", id))
        .add_header("Authorization", auth.auth_header())
        .json(&json!({ "title": "Hello again" }))
        .await;
    response.assert_status(StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["title"].as_str().unwrap(), "Hello again");
    assert_eq!(updated["url"].as_str().unwrap(), "https://blog.example.com/hello");

    app.server
        .get(&format!("/api/blogs/{}", id))
        .await
        .assert_status(StatusCode::OK);

    app.server
        .delete(&format!("/api/blogs/{}", id))
        .add_header("Authorization", auth.auth_header())
        .await
        .assert_status(StatusCode::OK);

    let response = app.server.get(&format!("/api/blogs/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "Blog not found");
}

#[tokio::test]
async fn test_create_invalid_payload() {
    let app = TestApp::new();
    let auth = Factory::new(&app.state, &app.backend).admin();

    let response = app
        .server
        .post("/api/social")
        .add_header("Authorization", auth.auth_header())
        .json(&json!({ "platform": "github", "url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["details"].as_str().unwrap().starts_with("url:"));
    assert!(app.backend.list(Collection::Social).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_projects_all_includes_drafts() {
    let app = TestApp::new();
    let factory = Factory::new(&app.state, &app.backend);
    let auth = factory.admin();
    factory.create_project("Live", "published").await;
    factory.create_project("Wip", "draft").await;

    app.server
        .get("/api/projects/all")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .get("/api/projects/all")
        .add_header("Authorization", auth.auth_header())
        .await;
    response.assert_status(StatusCode::OK);
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 2);
}

#[tokio::test]
async fn test_public_projects_hide_drafts() {
    let app = TestApp::new();
    let factory = Factory::new(&app.state, &app.backend);
    factory.create_project("Live", "published").await;
    factory.create_project("Wip", "draft").await;

    let response = app.server.get("/api/projects").await;
    response.assert_status(StatusCode::OK);
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["title"].as_str().unwrap(), "Live");
}

#[tokio::test]
async fn test_update_stores_lowercase_status() {
    let app = TestApp::new();
    let factory = Factory::new(&app.state, &app.backend);
    let auth = factory.admin();
    let project = factory.create_project("Site", "draft").await;
    let id = project["_id"].as_str().unwrap();

    let response = app
        .server
        .put(&format!("/api/projects/{}", id))
        .add_header("Authorization", auth.auth_header())
        .json(&json!({ "status": "Published" }))
        .await;
    response.assert_status(StatusCode::OK);

    let updated: Value = response.json();
    assert_eq!(updated["status"], json!("published"));

    let response = app.server.get("/api/projects").await;
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 1);
}

#[tokio::test]
async fn test_bulk_skills() {
    let app = TestApp::new();
    let auth = Factory::new(&app.state, &app.backend).admin();

    let response = app
        .server
        .post("/api/skills/bulk")
        .add_header("Authorization", auth.auth_header())
        .json(&json!([
            { "name": "Rust", "category": "Languages", "level": "Advanced" },
            { "name": "SQL", "category": "Database", "level": "Intermediate" }
        ]))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 2);
    assert!(body.iter().all(|skill| skill["_id"].is_string()));
}

#[tokio::test]
async fn test_contact_form_and_unread() {
    let app = TestApp::new();
    let factory = Factory::new(&app.state, &app.backend);
    let auth = factory.admin();
    factory.create_message("Ann", true).await;

    // the public contact form posts without a token
    let response = app
        .server
        .post("/api/messages")
        .json(&json!({
            "name": "Bob",
            "email": "bob@example.com",
            "message": "Are you available?"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["read"], json!(false));
    let id = created["_id"].as_str().unwrap().to_string();

    app.server
        .get("/api/messages")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .get("/api/messages/unread")
        .add_header("Authorization", auth.auth_header())
        .await;
    response.assert_status(StatusCode::OK);
    let unread: Vec<Value> = response.json();
    assert_eq!(unread.len(), 1);

    let response = app
        .server
        .put(&format!("/api/messages/{}/read", id))
        .add_header("Authorization", auth.auth_header())
        .json(&json!({ "read": true }))
        .await;
    response.assert_status(StatusCode::OK);
    let marked: Value = response.json();
    assert_eq!(marked["read"], json!(true));

    assert_eq!(app.backend.unread_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_singleton_routes() {
    let app = TestApp::new();
    let auth = Factory::new(&app.state, &app.backend).admin();

    let response = app.server.get("/api/about").await;
    response.assert_status(StatusCode::OK);
    let empty: Value = response.json();
    assert_eq!(empty, json!({}));

    app.server
        .put("/api/about")
        .json(&json!({ "bio": "Hi" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .put("/api/contact")
        .add_header("Authorization", auth.auth_header())
        .json(&json!({ "email": "me@example.com", "phone": "+1 (555) 123-4567" }))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = app.server.get("/api/contact").await.json();
    assert_eq!(body["email"].as_str().unwrap(), "me@example.com");
}

#[tokio::test]
async fn test_upload_file() {
    let app = TestApp::new();
    let auth = Factory::new(&app.state, &app.backend).admin();

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![0x89, 0x50, 0x4e, 0x47])
            .file_name("avatar.png")
            .mime_type("image/png"),
    );
    let response = app
        .server
        .post("/api/upload/profile/photo")
        .add_header("Authorization", auth.auth_header())
        .multipart(form)
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("http://test.local/uploads/profile/photo/"));
    assert!(url.ends_with("-avatar.png"));
}

#[tokio::test]
async fn test_upload_rejects_wrong_kind() {
    let app = TestApp::new();
    let auth = Factory::new(&app.state, &app.backend).admin();

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"%PDF-1.7".to_vec())
            .file_name("photo.pdf")
            .mime_type("application/pdf"),
    );
    app.server
        .post("/api/upload/blogs/image/b1")
        .add_header("Authorization", auth.auth_header())
        .multipart(form)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
