use std::env;

/// Credentials accepted by the login gate without a store lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAdmin {
    pub username: String,
    pub password: String,
}

/// Runtime configuration for the portal API
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Maximum uploaded document size in bytes (default: 50 MB)
    pub max_file_size: usize,

    /// JWT signing secret for admin sessions
    pub jwt_secret: String,

    /// Admin session lifetime in hours (default: 12)
    pub session_ttl_hours: i64,

    /// Allowed CORS Origins (comma separated)
    pub allowed_origins: Vec<String>,

    /// Lower-case extensions accepted by the document uploader
    pub allowed_document_extensions: Vec<String>,

    /// Optional demo admin pair checked before the admins table
    pub demo_admin: Option<DemoAdmin>,

    /// Base URL public object links are built from (no trailing slash)
    pub storage_public_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            max_file_size: 50 * 1024 * 1024, // 50 MB
            jwt_secret: "secret".to_string(),
            session_ttl_hours: 12,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(), // Vite default
                "http://127.0.0.1:3000".to_string(),
            ],
            allowed_document_extensions: default_document_extensions(),
            demo_admin: None,
            storage_public_url: "http://localhost:9000".to_string(),
        }
    }
}

fn default_document_extensions() -> Vec<String> {
    ["pdf", "doc", "docx", "xls", "xlsx"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn demo_admin_from_env() -> Option<DemoAdmin> {
    match (
        env::var("ADMIN_DEMO_USERNAME"),
        env::var("ADMIN_DEMO_PASSWORD"),
    ) {
        (Ok(username), Ok(password)) if !username.is_empty() && !password.is_empty() => {
            Some(DemoAdmin { username, password })
        }
        _ => None,
    }
}

impl PortalConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            max_file_size: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_file_size),

            jwt_secret: env::var("JWT_SECRET").unwrap_or(default.jwt_secret),

            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|h: &i64| *h > 0)
                .unwrap_or(default.session_ttl_hours),

            allowed_origins: env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(default.allowed_origins),

            allowed_document_extensions: env::var("ALLOWED_DOCUMENT_EXTENSIONS")
                .ok()
                .map(|v| parse_list(&v))
                .filter(|v| !v.is_empty())
                .unwrap_or(default.allowed_document_extensions),

            demo_admin: demo_admin_from_env(),

            storage_public_url: env::var("STORAGE_PUBLIC_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(default.storage_public_url),
        }
    }

    /// Local development: demo admin enabled, localhost origins
    pub fn development() -> Self {
        Self {
            demo_admin: Some(DemoAdmin {
                username: "admin@stk-community.com".to_string(),
                password: "admin123".to_string(),
            }),
            ..Self::default()
        }
    }

    /// Production: secret required, no demo admin unless explicitly configured
    pub fn production() -> Self {
        let from_env = Self::from_env();
        Self {
            jwt_secret: env::var("JWT_SECRET").expect("CRITICAL: JWT_SECRET must be set"),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|| vec!["https://stk-community.com".to_string()]),
            ..from_env
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert_eq!(config.max_file_size, 50 * 1024 * 1024);
        assert_eq!(config.session_ttl_hours, 12);
        assert!(config.demo_admin.is_none());
        assert!(!config.allowed_origins.contains(&"*".to_string()));
    }

    #[test]
    fn test_development_config() {
        let config = PortalConfig::development();
        let demo = config.demo_admin.expect("demo admin");
        assert_eq!(demo.username, "admin@stk-community.com");
    }

    #[test]
    fn test_default_document_extensions() {
        let config = PortalConfig::default();
        assert_eq!(
            config.allowed_document_extensions,
            vec!["pdf", "doc", "docx", "xls", "xlsx"]
        );
    }

    #[test]
    fn test_parse_list_skips_blanks() {
        assert_eq!(parse_list(" PDF, ,odt "), vec!["pdf", "odt"]);
    }
}
