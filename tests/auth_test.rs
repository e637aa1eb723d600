mod common;

use axum::http::StatusCode;
use common::{DEMO_PASSWORD, DEMO_USER, setup_app};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use stk_portal::entities::prelude::*;
use stk_portal::services::auth_service::upsert_admin;

#[tokio::test]
async fn test_demo_login_needs_no_store_read() {
    let t = setup_app().await;
    // Without an admins table any store lookup would fail
    t.db.execute_unprepared("DROP TABLE admins").await.unwrap();

    let (status, body) = t.login(DEMO_USER, DEMO_PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], DEMO_USER);
    assert!(body["token"].as_str().is_some());

    // A non-demo pair does reach the store
    let (status, _) = t.login("editor", "whatever").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_stored_admin_login() {
    let t = setup_app().await;
    upsert_admin(&t.db, "editor", "correct horse").await.unwrap();

    let stored = Admins::find_by_id("editor").one(&t.db).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "correct horse");

    let (status, body) = t.login("editor", "correct horse").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "editor");

    let (status, body) = t.login("editor", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_unknown_pair_is_rejected() {
    let t = setup_app().await;
    let (status, body) = t.login("nobody", "nothing").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
    assert_eq!(AdminSessions::find().count(&t.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_admin_routes_require_session() {
    let t = setup_app().await;

    let (status, _) = t.get("/admin/institutions").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = t.admin("GET", "/admin/session", "not-a-token", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = t.demo_token().await;
    let (status, body) = t.admin("GET", "/admin/session", &token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], DEMO_USER);
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    let (status, _) = t.admin("POST", "/admin/logout", &token, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(AdminSessions::find().count(&t.db).await.unwrap(), 0);

    // Signature is still valid but the session row is gone
    let (status, _) = t.admin("GET", "/admin/session", &token, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upsert_admin_replaces_password() {
    let t = setup_app().await;
    upsert_admin(&t.db, "editor", "first").await.unwrap();
    upsert_admin(&t.db, "editor", "second").await.unwrap();

    assert_eq!(Admins::find().count(&t.db).await.unwrap(), 1);
    let (status, _) = t.login("editor", "first").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = t.login("editor", "second").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let t = setup_app().await;
    let (status, body) = t.get("/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Page not found");
}
