use crate::entities::documents;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Doc,
    Xls,
    File,
}

impl FileKind {
    /// Classifies on the MIME subtype. OOXML types all carry
    /// `officedocument`, so spreadsheets are matched before word documents.
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.to_lowercase();
        let subtype = mime.split_once('/').map(|(_, s)| s).unwrap_or(&mime);
        if subtype.contains("pdf") {
            FileKind::Pdf
        } else if subtype.contains("spreadsheetml")
            || subtype.contains("ms-excel")
            || subtype.contains("excel")
        {
            FileKind::Xls
        } else if subtype.contains("wordprocessingml")
            || subtype.contains("msword")
            || subtype.contains("word")
        {
            FileKind::Doc
        } else {
            FileKind::File
        }
    }
}

/// `N bytes`, `N.N KB` or `N.N MB`.
pub fn format_file_size(bytes: i64) -> String {
    const KB: i64 = 1024;
    const MB: i64 = 1024 * 1024;
    if bytes < KB {
        format!("{} bytes", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DocumentView {
    pub id: String,
    pub name: String,
    pub file_path: String,
    pub size: i64,
    pub size_label: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub kind: FileKind,
    pub public_url: String,
    pub created_at: DateTime<Utc>,
}

impl DocumentView {
    pub fn from_model(model: documents::Model, public_url: String) -> Self {
        Self {
            size_label: format_file_size(model.size),
            kind: FileKind::from_mime(&model.mime_type),
            id: model.id,
            name: model.name,
            file_path: model.file_path,
            size: model.size,
            mime_type: model.mime_type,
            public_url,
            created_at: model.created_at,
        }
    }
}
