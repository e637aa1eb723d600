mod common;

use axum::http::StatusCode;
use common::setup_app;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use stk_portal::entities::prelude::*;

fn about_us(mission: &str) -> serde_json::Value {
    json!({
        "mission": mission,
        "story": "We started as a group of Studienkolleg students.",
        "creator_name": "Sara",
        "creator_title": "Founder",
        "creator_bio": "Studied medicine in Heidelberg.",
        "creator_image": "https://example.com/sara.jpg"
    })
}

#[tokio::test]
async fn test_absent_pages_load_defaults() {
    let t = setup_app().await;

    let (status, body) = t.get("/pages/uber-uns").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mission"], "");

    let (status, body) = t.get("/pages/unterlagen").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["faqs"].as_array().unwrap().len(), 1);
    assert_eq!(body["preparation_steps"].as_array().unwrap().len(), 1);

    let (_, body) = t.get("/pages/informationen").await;
    assert!(body["embed_url"].is_null());
}

#[tokio::test]
async fn test_saving_twice_inserts_then_updates() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    let (status, body) = t
        .admin("PUT", "/admin/pages/uber-uns", &token, Some(about_us("Helping students get in")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mission"], "Helping students get in");

    let (status, body) = t
        .admin("PUT", "/admin/pages/uber-uns", &token, Some(about_us("Helping students succeed")))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mission"], "Helping students succeed");

    assert_eq!(PageContent::find().count(&t.db).await.unwrap(), 1);

    let (_, body) = t.get("/pages/uber-uns").await;
    assert_eq!(body["mission"], "Helping students succeed");
}

#[tokio::test]
async fn test_about_us_validation_blocks_write() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    let (status, body) = t
        .admin("PUT", "/admin/pages/uber-uns", &token, Some(about_us("short")))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("mission"));
    assert_eq!(PageContent::find().count(&t.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_information_page_embed_and_youtube_check() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    let (status, body) = t
        .admin(
            "PUT",
            "/admin/pages/informationen",
            &token,
            Some(json!({ "title": "Studienkolleg", "content": "Kurse T, M, W", "video_url": "https://vimeo.com/1" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("Please enter a valid YouTube URL"));

    let (status, _) = t
        .admin(
            "PUT",
            "/admin/pages/informationen",
            &token,
            Some(json!({ "title": "Studienkolleg", "content": "Kurse T, M, W", "video_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = t.get("/pages/informationen").await;
    assert_eq!(body["title"], "Studienkolleg");
    assert_eq!(body["embed_url"], "https://www.youtube.com/embed/dQw4w9WgXcQ");

    // title/content share the about page's columns but not its row
    let (_, about) = t.get("/pages/uber-uns").await;
    assert_eq!(about["mission"], "");
}

#[tokio::test]
async fn test_removing_last_faq_is_rejected() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    let (status, body) = t
        .admin("DELETE", "/admin/pages/unterlagen/faqs/0", &token, None)
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "You need to keep at least one FAQ");

    let (status, body) = t
        .admin("POST", "/admin/pages/unterlagen/faqs", &token, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["faqs"].as_array().unwrap().len(), 2);

    let (status, body) = t
        .admin("DELETE", "/admin/pages/unterlagen/faqs/1", &token, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["faqs"].as_array().unwrap().len(), 1);

    let (status, _) = t
        .admin("DELETE", "/admin/pages/unterlagen/faqs/7", &token, None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_step_and_item_edits() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    let (status, body) = t
        .admin("DELETE", "/admin/pages/unterlagen/steps/0", &token, None)
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "You need to keep at least one preparation step");

    let (status, body) = t
        .admin("DELETE", "/admin/pages/unterlagen/steps/0/items/0", &token, None)
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Step must have at least one required item");

    let (_, body) = t
        .admin("POST", "/admin/pages/unterlagen/steps/0/items", &token, None)
        .await;
    assert_eq!(body["preparation_steps"][0]["required_items"].as_array().unwrap().len(), 2);

    let (status, _) = t
        .admin("POST", "/admin/pages/unterlagen/steps/3/items", &token, None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = t
        .admin("POST", "/admin/pages/unterlagen/steps", &token, None)
        .await;
    assert_eq!(body["preparation_steps"].as_array().unwrap().len(), 2);
    assert_eq!(PageContent::find().count(&t.db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_full_replace_keeps_list_invariants() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    let (status, _) = t
        .admin(
            "PUT",
            "/admin/pages/unterlagen",
            &token,
            Some(json!({ "faqs": [], "preparation_steps": [{ "title": "a", "description": "b", "required_items": ["Pass"] }] })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = t
        .admin(
            "PUT",
            "/admin/pages/unterlagen",
            &token,
            Some(json!({
                "faqs": [{ "question": "Wann?", "answer": "Bis 15 Juli" }],
                "preparation_steps": [{ "title": "Übersetzen", "description": "Beglaubigt", "required_items": ["Zeugnis", "Pass"] }]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["faqs"][0]["question"], "Wann?");

    let (_, body) = t.get("/pages/unterlagen").await;
    assert_eq!(body["preparation_steps"][0]["required_items"][1], "Pass");
}
