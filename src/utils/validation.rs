use anyhow::{Result, anyhow};
use std::path::Path;
use url::Url;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates file size against maximum limit
pub fn validate_file_size(size: usize, max_size: usize) -> Result<()> {
    if size > max_size {
        return Err(anyhow!(ValidationError {
            code: "FILE_TOO_LARGE",
            message: format!(
                "File size {} bytes exceeds maximum allowed {} bytes ({} MB)",
                size,
                max_size,
                max_size / 1024 / 1024
            ),
        }));
    }
    Ok(())
}

/// Extension after the last `.` of the file name component, if any.
pub fn file_extension(filename: &str) -> Option<&str> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
}

/// Validates the extension against the uploader's allow-list
pub fn validate_extension(filename: &str, allowed: &[String]) -> Result<String> {
    let ext = file_extension(filename)
        .map(|e| e.to_lowercase())
        .ok_or_else(|| {
            anyhow!(ValidationError {
                code: "MISSING_EXTENSION",
                message: format!("File '{}' has no extension", filename),
            })
        })?;

    if !allowed.iter().any(|a| *a == ext) {
        return Err(anyhow!(ValidationError {
            code: "EXTENSION_NOT_ALLOWED",
            message: format!(
                "File extension '.{}' is not allowed. Supported formats: {}",
                ext,
                allowed.join(", ")
            ),
        }));
    }
    Ok(ext)
}

/// Display name suggested for an upload: the file name up to its first `.`
pub fn default_display_name(filename: &str) -> String {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);
    name.split('.').next().unwrap_or("").trim().to_string()
}

/// Makes a display name safe for use inside an object key.
/// Whitespace runs become a single `_`; separators and reserved characters become `_`.
pub fn sanitize_display_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        let reserved = c.is_control()
            || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | ';' | '#' | '%');
        out.push(if reserved { '_' } else { c });
    }

    // Limit length safely for UTF-8
    if out.len() > 200 {
        let mut end = 200;
        while !out.is_char_boundary(end) {
            end -= 1;
        }
        out.truncate(end);
    }
    out
}

/// `{millis}_{sanitized name}.{original extension}`
pub fn build_storage_path(timestamp_millis: i64, display_name: &str, original_filename: &str) -> String {
    let stem = sanitize_display_name(display_name);
    match file_extension(original_filename) {
        Some(ext) => format!("{}_{}.{}", timestamp_millis, stem, ext),
        None => format!("{}_{}", timestamp_millis, stem),
    }
}

fn is_video_id(id: &str) -> bool {
    id.len() == 11
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Extracts the 11-character id from a `youtube.com/watch?v=` or `youtu.be/` link.
/// The scheme may be omitted.
pub fn youtube_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let with_scheme = if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };
    let url = Url::parse(&with_scheme).ok()?;

    let id = match url.host_str()? {
        "youtube.com" | "www.youtube.com" => {
            if url.path() != "/watch" {
                return None;
            }
            url.query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned())?
        }
        "youtu.be" => url.path().trim_start_matches('/').to_string(),
        _ => return None,
    };

    is_video_id(&id).then_some(id)
}

pub fn is_youtube_url(input: &str) -> bool {
    youtube_video_id(input).is_some()
}

pub fn youtube_embed_url(input: &str) -> Option<String> {
    youtube_video_id(input).map(|id| format!("https://www.youtube.com/embed/{}", id))
}
