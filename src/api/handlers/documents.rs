use crate::AppState;
use crate::api::error::AppError;
use crate::models::document::DocumentView;
use crate::services::document_service::DocumentUpload;
use crate::utils::filters::filter_by_search;
use crate::utils::validation::default_display_name;
use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DocumentQuery {
    /// Case-insensitive substring of the document name
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "/documents",
    params(DocumentQuery),
    responses(
        (status = 200, description = "Downloadable documents, newest first", body = [DocumentView])
    ),
    tag = "documents"
)]
pub async fn list_documents(
    State(state): State<AppState>,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<Vec<DocumentView>>, AppError> {
    let documents = state.documents.list().await?;
    Ok(Json(filter_by_search(documents, query.search.as_deref())))
}

#[utoipa::path(
    get,
    path = "/documents/{id}/download",
    params(("id" = String, Path, description = "Document id")),
    responses(
        (status = 302, description = "Redirect to the public object URL"),
        (status = 404, description = "Document not found")
    ),
    tag = "documents"
)]
pub async fn download_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let document = state
        .documents
        .find(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, document.public_url)],
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/admin/documents",
    responses(
        (status = 200, description = "Uploaded documents, newest first", body = [DocumentView]),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn admin_list_documents(
    State(state): State<AppState>,
) -> Result<Json<Vec<DocumentView>>, AppError> {
    Ok(Json(state.documents.list().await?))
}

#[utoipa::path(
    post,
    path = "/admin/documents",
    request_body(content = Multipart, description = "`file` part plus an optional `name` part"),
    responses(
        (status = 201, description = "Document uploaded", body = DocumentView),
        (status = 400, description = "Please select a file and provide a name"),
        (status = 413, description = "File too large"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<DocumentView>), AppError> {
    let mut display_name: Option<String> = None;
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        let err_msg = e.to_string();
        if err_msg.contains("length limit exceeded") {
            AppError::PayloadTooLarge("Request body exceeds the maximum allowed limit".to_string())
        } else {
            AppError::BadRequest(err_msg)
        }
    })? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" {
            let filename = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(|s| s.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some((filename, content_type, data.to_vec()));
        } else if name == "name" {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            if !text.trim().is_empty() {
                display_name = Some(text);
            }
        }
    }

    let Some((filename, content_type, data)) = file.filter(|(f, _, _)| !f.trim().is_empty())
    else {
        return Err(AppError::BadRequest(
            "Please select a file and provide a name".to_string(),
        ));
    };

    let upload = DocumentUpload {
        display_name: display_name.unwrap_or_else(|| default_display_name(&filename)),
        filename,
        content_type,
        data,
    };

    let document = state.documents.upload(upload).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

#[utoipa::path(
    delete,
    path = "/admin/documents/{id}",
    params(("id" = String, Path, description = "Document id")),
    responses(
        (status = 204, description = "Document and stored object deleted"),
        (status = 404, description = "Document not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "admin"
)]
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.documents.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
