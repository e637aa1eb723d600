use crate::AppState;
use crate::api::error::AppError;
use crate::models::page::{
    AboutUsForm, DocumentPageForm, InformationForm, InformationPage, ListEditError, PageName,
};
use crate::services::page_content_service::{PageContentPatch, SaveOutcome};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

/// 201 when the save created the row, 200 when it updated it.
fn saved_status(outcome: SaveOutcome) -> StatusCode {
    match outcome {
        SaveOutcome::Inserted => StatusCode::CREATED,
        SaveOutcome::Updated => StatusCode::OK,
    }
}

// ── Public pages ──────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/pages/uber-uns",
    responses(
        (status = 200, description = "About-us page content", body = AboutUsForm)
    ),
    tag = "pages"
)]
pub async fn get_about_us(State(state): State<AppState>) -> Result<Json<AboutUsForm>, AppError> {
    let row = state.pages.find(PageName::AboutUs).await?;
    Ok(Json(AboutUsForm::from_row(row.as_ref())))
}

#[utoipa::path(
    get,
    path = "/pages/informationen",
    responses(
        (status = 200, description = "Information page content with video embed", body = InformationPage)
    ),
    tag = "pages"
)]
pub async fn get_information(
    State(state): State<AppState>,
) -> Result<Json<InformationPage>, AppError> {
    let row = state.pages.find(PageName::Information).await?;
    Ok(Json(InformationForm::from_row(row.as_ref()).into()))
}

#[utoipa::path(
    get,
    path = "/pages/unterlagen",
    responses(
        (status = 200, description = "FAQs and preparation steps", body = DocumentPageForm)
    ),
    tag = "pages"
)]
pub async fn get_document_page(
    State(state): State<AppState>,
) -> Result<Json<DocumentPageForm>, AppError> {
    Ok(Json(state.pages.load_document_page().await?))
}

// ── About-us editor ───────────────────────────────────────────────────

#[utoipa::path(
    put,
    path = "/admin/pages/uber-uns",
    request_body = AboutUsForm,
    responses(
        (status = 200, description = "Page updated", body = AboutUsForm),
        (status = 201, description = "Page created", body = AboutUsForm),
        (status = 422, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn save_about_us(
    State(state): State<AppState>,
    Json(form): Json<AboutUsForm>,
) -> Result<(StatusCode, Json<AboutUsForm>), AppError> {
    form.validate()?;

    let (outcome, stored) = state
        .pages
        .save(PageName::AboutUs, PageContentPatch::from(form))
        .await?;
    Ok((
        saved_status(outcome),
        Json(AboutUsForm::from_row(Some(&stored))),
    ))
}

// ── Information editor ────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/admin/pages/informationen",
    responses(
        (status = 200, description = "Information editor state", body = InformationForm),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn load_information(
    State(state): State<AppState>,
) -> Result<Json<InformationForm>, AppError> {
    let row = state.pages.find(PageName::Information).await?;
    Ok(Json(InformationForm::from_row(row.as_ref())))
}

#[utoipa::path(
    put,
    path = "/admin/pages/informationen",
    request_body = InformationForm,
    responses(
        (status = 200, description = "Page updated", body = InformationForm),
        (status = 201, description = "Page created", body = InformationForm),
        (status = 422, description = "Please enter a valid YouTube URL"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn save_information(
    State(state): State<AppState>,
    Json(form): Json<InformationForm>,
) -> Result<(StatusCode, Json<InformationForm>), AppError> {
    form.validate()?;

    let (outcome, stored) = state
        .pages
        .save(PageName::Information, PageContentPatch::from(form))
        .await?;
    Ok((
        saved_status(outcome),
        Json(InformationForm::from_row(Some(&stored))),
    ))
}

// ── Documents-page editor ─────────────────────────────────────────────

#[utoipa::path(
    put,
    path = "/admin/pages/unterlagen",
    request_body = DocumentPageForm,
    responses(
        (status = 200, description = "Page updated", body = DocumentPageForm),
        (status = 201, description = "Page created", body = DocumentPageForm),
        (status = 422, description = "A list would be left empty"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn save_document_page(
    State(state): State<AppState>,
    Json(form): Json<DocumentPageForm>,
) -> Result<(StatusCode, Json<DocumentPageForm>), AppError> {
    form.check_lists()?;

    let (outcome, stored) = state
        .pages
        .save(PageName::Documents, PageContentPatch::from(&form))
        .await?;
    Ok((
        saved_status(outcome),
        Json(DocumentPageForm::from_row(Some(&stored))),
    ))
}

#[utoipa::path(
    post,
    path = "/admin/pages/unterlagen/faqs",
    responses(
        (status = 200, description = "Blank FAQ appended", body = DocumentPageForm),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn add_faq(State(state): State<AppState>) -> Result<Json<DocumentPageForm>, AppError> {
    let form = state
        .pages
        .edit_document_page(|f| {
            f.add_faq();
            Ok::<(), ListEditError>(())
        })
        .await?;
    Ok(Json(form))
}

#[utoipa::path(
    delete,
    path = "/admin/pages/unterlagen/faqs/{index}",
    params(("index" = usize, Path, description = "Zero-based FAQ index")),
    responses(
        (status = 200, description = "FAQ removed", body = DocumentPageForm),
        (status = 404, description = "No FAQ at that index"),
        (status = 422, description = "You need to keep at least one FAQ"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn remove_faq(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<DocumentPageForm>, AppError> {
    let form = state
        .pages
        .edit_document_page(|f| f.remove_faq(index))
        .await?;
    Ok(Json(form))
}

#[utoipa::path(
    post,
    path = "/admin/pages/unterlagen/steps",
    responses(
        (status = 200, description = "Blank step appended", body = DocumentPageForm),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn add_step(State(state): State<AppState>) -> Result<Json<DocumentPageForm>, AppError> {
    let form = state
        .pages
        .edit_document_page(|f| {
            f.add_step();
            Ok::<(), ListEditError>(())
        })
        .await?;
    Ok(Json(form))
}

#[utoipa::path(
    delete,
    path = "/admin/pages/unterlagen/steps/{index}",
    params(("index" = usize, Path, description = "Zero-based step index")),
    responses(
        (status = 200, description = "Step removed", body = DocumentPageForm),
        (status = 404, description = "No step at that index"),
        (status = 422, description = "You need to keep at least one preparation step"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn remove_step(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<DocumentPageForm>, AppError> {
    let form = state
        .pages
        .edit_document_page(|f| f.remove_step(index))
        .await?;
    Ok(Json(form))
}

#[utoipa::path(
    post,
    path = "/admin/pages/unterlagen/steps/{index}/items",
    params(("index" = usize, Path, description = "Zero-based step index")),
    responses(
        (status = 200, description = "Blank required item appended", body = DocumentPageForm),
        (status = 404, description = "No step at that index"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn add_step_item(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<DocumentPageForm>, AppError> {
    let form = state
        .pages
        .edit_document_page(|f| f.add_step_item(index))
        .await?;
    Ok(Json(form))
}

#[utoipa::path(
    delete,
    path = "/admin/pages/unterlagen/steps/{index}/items/{item}",
    params(
        ("index" = usize, Path, description = "Zero-based step index"),
        ("item" = usize, Path, description = "Zero-based required-item index")
    ),
    responses(
        (status = 200, description = "Required item removed", body = DocumentPageForm),
        (status = 404, description = "No step or item at that index"),
        (status = 422, description = "Step must have at least one required item"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn remove_step_item(
    State(state): State<AppState>,
    Path((index, item)): Path<(usize, usize)>,
) -> Result<Json<DocumentPageForm>, AppError> {
    let form = state
        .pages
        .edit_document_page(|f| f.remove_step_item(index, item))
        .await?;
    Ok(Json(form))
}
