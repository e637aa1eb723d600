use crate::AppState;
use crate::api::error::AppError;
use crate::models::institution::{
    InstitutionDetailView, InstitutionForm, InstitutionListing, InstitutionRecord,
};
use crate::utils::filters::{LevelFilter, filter_by_search};
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
pub struct InstitutionQuery {
    /// Case-insensitive substring of the name
    pub search: Option<String>,
    #[serde(default)]
    pub b1: bool,
    #[serde(default)]
    pub b2: bool,
}

#[utoipa::path(
    get,
    path = "/institutions",
    params(InstitutionQuery),
    responses(
        (status = 200, description = "Institution directory", body = [InstitutionListing])
    ),
    tag = "institutions"
)]
pub async fn list_institutions(
    State(state): State<AppState>,
    Query(query): Query<InstitutionQuery>,
) -> Result<Json<Vec<InstitutionListing>>, AppError> {
    let listings: Vec<InstitutionListing> = state
        .institutions
        .list_with_details()
        .await?
        .iter()
        .map(|(i, d)| InstitutionListing::from_rows(i, d.as_ref()))
        .collect();

    let levels = LevelFilter {
        b1: query.b1,
        b2: query.b2,
    };
    let listings = levels.apply(filter_by_search(listings, query.search.as_deref()));

    Ok(Json(listings))
}

#[utoipa::path(
    get,
    path = "/institutions/{id}",
    params(("id" = String, Path, description = "Institution id")),
    responses(
        (status = 200, description = "Institution detail", body = InstitutionDetailView),
        (status = 404, description = "University not found")
    ),
    tag = "institutions"
)]
pub async fn get_institution(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InstitutionDetailView>, AppError> {
    let (institution, details) = state
        .institutions
        .find_with_details(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("University not found".to_string()))?;

    Ok(Json(InstitutionDetailView::from_rows(
        &institution,
        details.as_ref(),
    )))
}

#[utoipa::path(
    get,
    path = "/admin/institutions",
    responses(
        (status = 200, description = "Institutions as stored", body = [InstitutionRecord]),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn admin_list_institutions(
    State(state): State<AppState>,
) -> Result<Json<Vec<InstitutionRecord>>, AppError> {
    let records = state
        .institutions
        .list_with_details()
        .await?
        .into_iter()
        .map(|(i, d)| InstitutionRecord::from_rows(i, d.as_ref()))
        .collect();
    Ok(Json(records))
}

#[utoipa::path(
    post,
    path = "/admin/institutions",
    request_body = InstitutionForm,
    responses(
        (status = 201, description = "Institution created", body = InstitutionRecord),
        (status = 422, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn create_institution(
    State(state): State<AppState>,
    Json(form): Json<InstitutionForm>,
) -> Result<(StatusCode, Json<InstitutionRecord>), AppError> {
    let form = form.normalize();
    form.validate()?;

    let record = state.institutions.create(form).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    put,
    path = "/admin/institutions/{id}",
    params(("id" = String, Path, description = "Institution id")),
    request_body = InstitutionForm,
    responses(
        (status = 200, description = "Institution updated", body = InstitutionRecord),
        (status = 404, description = "University not found"),
        (status = 422, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn update_institution(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<InstitutionForm>,
) -> Result<Json<InstitutionRecord>, AppError> {
    let form = form.normalize();
    form.validate()?;

    Ok(Json(state.institutions.update(&id, form).await?))
}

#[utoipa::path(
    delete,
    path = "/admin/institutions/{id}",
    params(("id" = String, Path, description = "Institution id")),
    responses(
        (status = 204, description = "Institution deleted"),
        (status = 404, description = "University not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn delete_institution(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.institutions.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
