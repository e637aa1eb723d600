mod common;

use axum::http::StatusCode;
use common::setup_app;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use stk_portal::entities::prelude::*;
use stk_portal::infrastructure::seed::seed_initial_data;

#[tokio::test]
async fn test_article_lifecycle_and_filters() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    for (title, category) in [
        ("Visa beantragen", "visa"),
        ("FSP Vorbereitung", "exams"),
        ("Aufnahmeprüfung Tipps", "exams"),
    ] {
        let (status, _) = t
            .admin(
                "POST",
                "/admin/articles",
                &token,
                Some(json!({
                    "title": title,
                    "excerpt": "Kurz",
                    "content": "Lang und ausführlich",
                    "image_url": "",
                    "category": category
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = t.get("/articles?category=exams").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = t.get("/articles?category=all&search=visa").await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert!(list[0]["image_url"].is_null());

    let (status, _) = t.get("/articles?category=sports").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let id = list[0]["id"].as_str().unwrap().to_string();
    let (status, body) = t
        .admin(
            "PUT",
            &format!("/admin/articles/{}", id),
            &token,
            Some(json!({
                "title": "Visum beantragen",
                "content": "Neu",
                "category": "living"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "living");

    let (_, body) = t.get(&format!("/articles/{}", id)).await;
    assert_eq!(body["title"], "Visum beantragen");

    let (status, _) = t
        .admin("DELETE", &format!("/admin/articles/{}", id), &token, None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = t.get(&format!("/articles/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Article not found");
}

#[tokio::test]
async fn test_article_requires_title() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    let (status, body) = t
        .admin(
            "POST",
            "/admin/articles",
            &token,
            Some(json!({ "title": " ", "content": "x", "category": "visa" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("Title is required"));
}

#[tokio::test]
async fn test_seeded_articles_are_listed_newest_first() {
    let t = setup_app().await;
    seed_initial_data(&t.db).await.unwrap();
    seed_initial_data(&t.db).await.unwrap();
    assert_eq!(Articles::find().count(&t.db).await.unwrap(), 6);

    let (status, body) = t.get("/articles").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list[0]["title"], "German Language Resources for Moroccan Students");
    assert_eq!(list[5]["title"], "How to Prepare for Aufnahmeprüfung");

    let (_, living) = t.get("/articles?category=living").await;
    assert_eq!(living.as_array().unwrap().len(), 2);

    let (_, found) = t.get("/articles?search=feststellungspr").await;
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["category"], "exams");
}
