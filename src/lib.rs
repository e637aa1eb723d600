pub mod api;
pub mod config;
pub mod entities;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

use crate::api::handlers;
use crate::config::PortalConfig;
use crate::services::article_service::ArticleService;
use crate::services::auth_service::AuthService;
use crate::services::document_service::DocumentService;
use crate::services::institution_service::InstitutionService;
use crate::services::page_content_service::PageContentService;
use crate::services::storage::StorageService;
use axum::{
    Json, Router,
    http::{HeaderValue, StatusCode},
    middleware::{from_fn, from_fn_with_state},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as AnyOrigin, CorsLayer};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::institutions::list_institutions,
        handlers::institutions::get_institution,
        handlers::articles::list_articles,
        handlers::articles::get_article,
        handlers::pages::get_about_us,
        handlers::pages::get_information,
        handlers::pages::get_document_page,
        handlers::documents::list_documents,
        handlers::documents::download_document,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::current_session,
        handlers::institutions::admin_list_institutions,
        handlers::institutions::create_institution,
        handlers::institutions::update_institution,
        handlers::institutions::delete_institution,
        handlers::pages::save_about_us,
        handlers::pages::load_information,
        handlers::pages::save_information,
        handlers::pages::save_document_page,
        handlers::pages::add_faq,
        handlers::pages::remove_faq,
        handlers::pages::add_step,
        handlers::pages::remove_step,
        handlers::pages::add_step_item,
        handlers::pages::remove_step_item,
        handlers::articles::create_article,
        handlers::articles::update_article,
        handlers::articles::delete_article,
        handlers::documents::admin_list_documents,
        handlers::documents::upload_document,
        handlers::documents::delete_document,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::auth::LoginRequest,
            handlers::auth::LoginResponse,
            handlers::auth::SessionResponse,
            models::institution::InstitutionListing,
            models::institution::InstitutionDetailView,
            models::institution::InstitutionDetailFields,
            models::institution::InstitutionForm,
            models::institution::InstitutionRecord,
            models::article::ArticleCategory,
            models::article::ArticleView,
            models::article::ArticleForm,
            models::document::FileKind,
            models::document::DocumentView,
            models::page::AboutUsForm,
            models::page::InformationForm,
            models::page::InformationPage,
            models::page::FaqItem,
            models::page::PreparationStep,
            models::page::DocumentPageForm,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "institutions", description = "Studienkolleg directory"),
        (name = "articles", description = "Information page articles"),
        (name = "pages", description = "Editable page content"),
        (name = "documents", description = "Downloadable documents"),
        (name = "admin", description = "Authenticated editor endpoints"),
        (name = "system", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "jwt",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: Arc<dyn StorageService>,
    pub config: PortalConfig,
    pub institutions: Arc<InstitutionService>,
    pub pages: Arc<PageContentService>,
    pub articles: Arc<ArticleService>,
    pub documents: Arc<DocumentService>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, storage: Arc<dyn StorageService>, config: PortalConfig) -> Self {
        Self {
            institutions: Arc::new(InstitutionService::new(db.clone())),
            pages: Arc::new(PageContentService::new(db.clone())),
            articles: Arc::new(ArticleService::new(db.clone())),
            documents: Arc::new(DocumentService::new(
                db.clone(),
                storage.clone(),
                config.clone(),
            )),
            auth: Arc::new(AuthService::new(db.clone(), config.clone())),
            db,
            storage,
            config,
        }
    }
}

/// One failing handler must not take the server down.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("💥 Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Something went wrong. Please try again later." })),
    )
        .into_response()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(AnyOrigin).allow_headers(AnyOrigin);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(AnyOrigin);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

fn admin_routes(state: &AppState) -> Router<AppState> {
    use handlers::{articles, auth, documents, institutions, pages};

    Router::new()
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::current_session))
        .route(
            "/institutions",
            get(institutions::admin_list_institutions).post(institutions::create_institution),
        )
        .route(
            "/institutions/:id",
            axum::routing::put(institutions::update_institution)
                .delete(institutions::delete_institution),
        )
        .route(
            "/pages/uber-uns",
            get(pages::get_about_us).put(pages::save_about_us),
        )
        .route(
            "/pages/informationen",
            get(pages::load_information).put(pages::save_information),
        )
        .route(
            "/pages/unterlagen",
            get(pages::get_document_page).put(pages::save_document_page),
        )
        .route("/pages/unterlagen/faqs", post(pages::add_faq))
        .route("/pages/unterlagen/faqs/:index", delete(pages::remove_faq))
        .route("/pages/unterlagen/steps", post(pages::add_step))
        .route("/pages/unterlagen/steps/:index", delete(pages::remove_step))
        .route(
            "/pages/unterlagen/steps/:index/items",
            post(pages::add_step_item),
        )
        .route(
            "/pages/unterlagen/steps/:index/items/:item",
            delete(pages::remove_step_item),
        )
        .route("/articles", post(articles::create_article))
        .route(
            "/articles/:id",
            axum::routing::put(articles::update_article).delete(articles::delete_article),
        )
        .route(
            "/documents",
            get(documents::admin_list_documents).post(documents::upload_document),
        )
        .route("/documents/:id", delete(documents::delete_document))
        .route_layer(from_fn_with_state(
            state.clone(),
            api::middleware::auth::auth_middleware,
        ))
        // Only the login route sits outside the gate
        .route("/login", post(auth::login))
}

pub fn create_app(state: AppState) -> Router {
    use handlers::{articles, documents, health, institutions, pages};

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        .route("/institutions", get(institutions::list_institutions))
        .route("/institutions/:id", get(institutions::get_institution))
        .route("/articles", get(articles::list_articles))
        .route("/articles/:id", get(articles::get_article))
        .route("/pages/uber-uns", get(pages::get_about_us))
        .route("/pages/informationen", get(pages::get_information))
        .route("/pages/unterlagen", get(pages::get_document_page))
        .route("/documents", get(documents::list_documents))
        .route("/documents/:id/download", get(documents::download_document))
        .nest("/admin", admin_routes(&state))
        .fallback(health::not_found)
        .layer(from_fn(api::middleware::metrics::metrics_middleware))
        .layer(from_fn(api::middleware::request_id::request_id_middleware))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(&state.config.allowed_origins))
        .layer(axum::extract::DefaultBodyLimit::max(
            state.config.max_file_size + 10 * 1024 * 1024, // multipart overhead
        ))
        .with_state(state)
}
