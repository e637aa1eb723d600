mod common;

use axum::http::StatusCode;
use common::setup_app;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
use serde_json::{json, Value};
use stk_portal::entities::{institution_details, institutions, prelude::*};
use stk_portal::infrastructure::seed::seed_initial_data;
use stk_portal::models::institution::{
    ADDRESS_NOT_AVAILABLE, DEFAULT_LEVEL, NOT_AVAILABLE, NOT_SPECIFIED,
};

#[tokio::test]
async fn test_seeded_directory_and_filters() {
    let t = setup_app().await;
    seed_initial_data(&t.db).await.unwrap();
    // second run is a no-op
    seed_initial_data(&t.db).await.unwrap();
    assert_eq!(Institutions::find().count(&t.db).await.unwrap(), 3);

    let (status, body) = t.get("/institutions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (_, body) = t.get("/institutions?search=KARLS").await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["level"], "B1");
    assert_eq!(list[0]["application_winter"], "bis 15 Juli");
    assert_eq!(list[0]["application_summer"], "bis 15 Januar");

    let (_, b1) = t.get("/institutions?b1=true").await;
    let (_, b2) = t.get("/institutions?b2=true").await;
    let (_, both) = t.get("/institutions?b1=true&b2=true").await;
    assert_eq!(b1.as_array().unwrap().len(), 1);
    assert_eq!(b2.as_array().unwrap().len(), 2);
    assert_eq!(both.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_null_deadline_and_missing_details() {
    let t = setup_app().await;

    institutions::ActiveModel {
        id: Set("kassel".into()),
        name: Set("Kassel".into()),
        description: Set(String::new()),
        location: Set("Kassel".into()),
        kind: Set("Studienkolleg".into()),
        image_url: Set(String::new()),
        created_at: Set(None),
    }
    .insert(&t.db)
    .await
    .unwrap();

    let (_, body) = t.get("/institutions").await;
    let kassel = &body[0];
    assert_eq!(kassel["application_winter"], NOT_SPECIFIED);
    assert_eq!(kassel["application_summer"], NOT_SPECIFIED);
    assert_eq!(kassel["registration"], NOT_AVAILABLE);
    assert_eq!(kassel["level"], DEFAULT_LEVEL);
    assert_eq!(kassel["address"], ADDRESS_NOT_AVAILABLE);
    assert_eq!(kassel["more_info"], "#");

    institution_details::ActiveModel {
        institution_id: Set("kassel".into()),
        application_test_date: Set(Some("Juni,Dezember".into())),
        ..Default::default()
    }
    .insert(&t.db)
    .await
    .unwrap();

    let (status, body) = t.get("/institutions/kassel").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["application_winter"], NOT_SPECIFIED);
    assert_eq!(body["test_summer"], "Dezember");
    assert_eq!(body["region"], NOT_AVAILABLE);
    assert_eq!(body["type"], "Studienkolleg");
}

#[tokio::test]
async fn test_unknown_institution_is_404() {
    let t = setup_app().await;
    let (status, body) = t.get("/institutions/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "University not found");
}

fn card(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Vorbereitung auf das Studium",
        "location": "Mainz",
        "type": "public",
        "image_url": "https://example.org/mainz.jpg"
    })
}

fn with(mut base: Value, extra: Value) -> Value {
    if let (Some(b), Some(e)) = (base.as_object_mut(), extra.as_object()) {
        for (k, v) in e {
            b.insert(k.clone(), v.clone());
        }
    }
    base
}

#[tokio::test]
async fn test_admin_create_update_delete() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    let (status, _) = t
        .admin("POST", "/admin/institutions", &token, Some(card("  ")))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, created) = t
        .admin(
            "POST",
            "/admin/institutions",
            &token,
            Some(with(
                card("Studienkolleg Mainz"),
                json!({
                    "email": "",
                    "application_deadline": "bis 15 Juli,bis 15 Januar",
                    "language_requirements": "B2"
                }),
            )),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(created["details"]["email"].is_null());

    let (status, updated) = t
        .admin(
            "PUT",
            &format!("/admin/institutions/{}", id),
            &token,
            Some(with(
                card("Studienkolleg Mainz"),
                json!({ "email": "stk@uni-mainz.de", "language_requirements": "B1" }),
            )),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["details"]["email"], "stk@uni-mainz.de");
    assert_eq!(InstitutionDetails::find().count(&t.db).await.unwrap(), 1);

    let (_, listing) = t.get(&format!("/institutions/{}", id)).await;
    assert_eq!(listing["level"], "B1");

    let (status, _) = t
        .admin("PUT", "/admin/institutions/missing", &token, Some(card("X")))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = t
        .admin("DELETE", &format!("/admin/institutions/{}", id), &token, None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(Institutions::find().count(&t.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_admin_update_creates_missing_detail_row() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    institutions::ActiveModel {
        id: Set("bare".into()),
        name: Set("Bare".into()),
        description: Set(String::new()),
        location: Set(String::new()),
        kind: Set(String::new()),
        image_url: Set(String::new()),
        created_at: Set(None),
    }
    .insert(&t.db)
    .await
    .unwrap();

    let (status, body) = t
        .admin(
            "PUT",
            "/admin/institutions/bare",
            &token,
            Some(with(card("Bare"), json!({ "address": "Hauptstr. 1" }))),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["details"]["address"], "Hauptstr. 1");
    assert_eq!(InstitutionDetails::find().count(&t.db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_admin_create_requires_card_fields() {
    let t = setup_app().await;
    let token = t.demo_token().await;

    let (status, body) = t
        .admin(
            "POST",
            "/admin/institutions",
            &token,
            Some(json!({
                "name": "Studienkolleg Mainz",
                "location": "Mainz",
                "type": "public",
                "image_url": "https://example.org/mainz.jpg"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "description: Description is required");
    assert_eq!(Institutions::find().count(&t.db).await.unwrap(), 0);
}
