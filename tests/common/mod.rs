#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::{Database, DatabaseConnection};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use stk_portal::config::PortalConfig;
use stk_portal::infrastructure::database;
use stk_portal::services::storage::{StorageService, public_object_url};
use stk_portal::{AppState, create_app};
use tower::ServiceExt;

pub const DEMO_USER: &str = "admin@stk-community.com";
pub const DEMO_PASSWORD: &str = "admin123";
pub const PUBLIC_BASE: &str = "http://storage.test";

pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    database::run_migrations(&db).await.unwrap();
    db
}

pub struct MockStorageService {
    pub files: Mutex<HashMap<String, (Vec<u8>, String)>>,
}

impl MockStorageService {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl StorageService for MockStorageService {
    async fn upload_file(&self, key: &str, data: Vec<u8>, content_type: &str) -> anyhow::Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(key.to_string(), (data, content_type.to_string()));
        Ok(())
    }

    async fn delete_file(&self, key: &str) -> anyhow::Result<()> {
        self.files.lock().unwrap().remove(key);
        Ok(())
    }

    async fn file_exists(&self, key: &str) -> anyhow::Result<bool> {
        Ok(self.files.lock().unwrap().contains_key(key))
    }

    fn public_url(&self, key: &str) -> String {
        public_object_url(PUBLIC_BASE, "documents", key)
    }
}

pub struct TestApp {
    pub app: Router,
    pub db: DatabaseConnection,
    pub storage: Arc<MockStorageService>,
}

pub async fn setup_app() -> TestApp {
    setup_app_with(PortalConfig::development()).await
}

pub async fn setup_app_with(config: PortalConfig) -> TestApp {
    let db = setup_test_db().await;
    let storage = Arc::new(MockStorageService::new());
    let state = AppState::new(db.clone(), storage.clone(), config);
    TestApp {
        app: create_app(state),
        db,
        storage,
    }
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let res = self.app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn admin(
        &self,
        method: &str,
        uri: &str,
        token: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token));
        let req = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(req).await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        let body = serde_json::json!({ "username": username, "password": password });
        self.send(
            Request::builder()
                .method("POST")
                .uri("/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn demo_token(&self) -> String {
        let (status, body) = self.login(DEMO_USER, DEMO_PASSWORD).await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }
}
