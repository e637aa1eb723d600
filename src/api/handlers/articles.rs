use crate::AppState;
use crate::api::error::AppError;
use crate::models::article::{ArticleForm, ArticleView, CategoryFilter};
use crate::utils::filters::{filter_by_category, filter_by_search};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleQuery {
    /// Case-insensitive substring of the title
    pub search: Option<String>,
    /// `all`, `exams`, `visa`, `living` or `language`
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleQuery),
    responses(
        (status = 200, description = "Articles, newest first", body = [ArticleView]),
        (status = 400, description = "Unknown category")
    ),
    tag = "articles"
)]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleQuery>,
) -> Result<Json<Vec<ArticleView>>, AppError> {
    let category = match query.category.as_deref() {
        Some(c) => c.parse::<CategoryFilter>().map_err(AppError::BadRequest)?,
        None => CategoryFilter::All,
    };

    let articles = state.articles.list().await?;
    let articles = filter_by_category(
        filter_by_search(articles, query.search.as_deref()),
        category,
    );
    Ok(Json(articles))
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article", body = ArticleView),
        (status = 404, description = "Article not found")
    ),
    tag = "articles"
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArticleView>, AppError> {
    state
        .articles
        .find(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Article not found".to_string()))
}

#[utoipa::path(
    post,
    path = "/admin/articles",
    request_body = ArticleForm,
    responses(
        (status = 201, description = "Article created", body = ArticleView),
        (status = 422, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn create_article(
    State(state): State<AppState>,
    Json(form): Json<ArticleForm>,
) -> Result<(StatusCode, Json<ArticleView>), AppError> {
    let form = form.normalize();
    form.validate()?;

    let article = state.articles.create(form).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/admin/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body = ArticleForm,
    responses(
        (status = 200, description = "Article updated", body = ArticleView),
        (status = 404, description = "Article not found"),
        (status = 422, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<ArticleForm>,
) -> Result<Json<ArticleView>, AppError> {
    let form = form.normalize();
    form.validate()?;

    Ok(Json(state.articles.update(&id, form).await?))
}

#[utoipa::path(
    delete,
    path = "/admin/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 404, description = "Article not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.articles.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
