use crate::api::error::AppError;
use crate::config::PortalConfig;
use crate::entities::{documents, prelude::*};
use crate::models::document::DocumentView;
use crate::services::storage::StorageService;
use crate::utils::validation::{build_storage_path, validate_extension, validate_file_size};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

const FALLBACK_MIME: &str = "application/octet-stream";

/// One file picked in the uploader.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub display_name: String,
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Declared content type first, then magic-byte sniffing.
pub fn resolve_mime_type(declared: Option<&str>, data: &[u8]) -> String {
    declared
        .map(str::trim)
        .filter(|m| !m.is_empty() && *m != FALLBACK_MIME)
        .map(str::to_string)
        .or_else(|| infer::get(data).map(|k| k.mime_type().to_string()))
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}

pub struct DocumentService {
    db: DatabaseConnection,
    storage: Arc<dyn StorageService>,
    config: PortalConfig,
}

impl DocumentService {
    pub fn new(db: DatabaseConnection, storage: Arc<dyn StorageService>, config: PortalConfig) -> Self {
        Self {
            db,
            storage,
            config,
        }
    }

    pub fn public_url(&self, file_path: &str) -> String {
        self.storage.public_url(file_path)
    }

    fn view(&self, model: documents::Model) -> DocumentView {
        let url = self.public_url(&model.file_path);
        DocumentView::from_model(model, url)
    }

    /// Newest first.
    pub async fn list(&self) -> Result<Vec<DocumentView>, AppError> {
        let rows = Documents::find()
            .order_by_desc(documents::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|m| self.view(m)).collect())
    }

    pub async fn find(&self, id: &str) -> Result<Option<DocumentView>, AppError> {
        let row = Documents::find_by_id(id).one(&self.db).await?;
        Ok(row.map(|m| self.view(m)))
    }

    /// Writes the bytes first, then the metadata row. A failed row insert
    /// leaves the object behind.
    pub async fn upload(&self, upload: DocumentUpload) -> Result<DocumentView, AppError> {
        let display_name = upload.display_name.trim().to_string();
        if display_name.is_empty() || upload.filename.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Please select a file and provide a name".to_string(),
            ));
        }

        validate_extension(&upload.filename, &self.config.allowed_document_extensions)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        validate_file_size(upload.data.len(), self.config.max_file_size)
            .map_err(|e| AppError::PayloadTooLarge(e.to_string()))?;

        let file_path = build_storage_path(
            Utc::now().timestamp_millis(),
            &display_name,
            &upload.filename,
        );
        let mime_type = resolve_mime_type(upload.content_type.as_deref(), &upload.data);
        let size = upload.data.len() as i64;

        info!("📤 Uploading document '{}' to {}", display_name, file_path);

        self.storage
            .upload_file(&file_path, upload.data, &mime_type)
            .await
            .map_err(|e| {
                error!("❌ Storage upload failed for {}: {}", file_path, e);
                AppError::Anyhow(e)
            })?;

        let row = documents::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(display_name),
            file_path: Set(file_path.clone()),
            size: Set(size),
            mime_type: Set(mime_type),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            warn!("⚠️ Metadata insert failed, object {} is orphaned: {}", file_path, e);
            AppError::Database(e)
        })?;

        info!("✅ Document {} stored ({} bytes)", row.id, row.size);
        Ok(self.view(row))
    }

    /// Removes the object, then the row. Not transactional.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let row = Documents::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

        self.storage.delete_file(&row.file_path).await?;
        Documents::delete_by_id(id).exec(&self.db).await?;

        info!("🗑️ Deleted document {} ({})", id, row.file_path);
        Ok(())
    }
}
