use crate::api::error::AppError;
use crate::config::PortalConfig;
use crate::entities::{admin_sessions, admins, prelude::*};
use crate::utils::auth::{Claims, create_jwt, validate_jwt};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use tracing::{info, warn};
use uuid::Uuid;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Inserts the admin, or replaces the password of an existing one.
pub async fn upsert_admin(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    let password_hash = hash_password(password)?;

    match Admins::find_by_id(username).one(db).await? {
        Some(existing) => {
            let mut active = existing.into_active_model();
            active.password_hash = Set(password_hash);
            active.update(db).await?;
        }
        None => {
            admins::ActiveModel {
                username: Set(username.to_string()),
                password_hash: Set(password_hash),
                created_at: Set(Some(Utc::now())),
            }
            .insert(db)
            .await?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

pub struct AuthService {
    db: DatabaseConnection,
    config: PortalConfig,
}

impl AuthService {
    pub fn new(db: DatabaseConnection, config: PortalConfig) -> Self {
        Self { db, config }
    }

    /// The configured demo pair is accepted without touching the store;
    /// anything else is checked against the `admins` table.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, AppError> {
        if let Some(demo) = &self.config.demo_admin
            && demo.username == username
            && demo.password == password
        {
            info!("🔑 Demo admin '{}' signed in", username);
            return Ok(username.to_string());
        }

        let admin = Admins::find_by_id(username).one(&self.db).await?;

        match admin {
            Some(admin) if verify_password(password, &admin.password_hash) => {
                info!("🔑 Admin '{}' signed in", username);
                Ok(admin.username)
            }
            _ => {
                warn!("🚫 Failed admin login for '{}'", username);
                Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
            }
        }
    }

    pub async fn open_session(&self, username: &str) -> Result<IssuedSession, AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.session_ttl_hours);
        let session_id = Uuid::new_v4().to_string();

        // Expired rows are dropped opportunistically
        AdminSessions::delete_many()
            .filter(admin_sessions::Column::ExpiresAt.lt(now))
            .exec(&self.db)
            .await?;

        admin_sessions::ActiveModel {
            id: Set(session_id.clone()),
            username: Set(username.to_string()),
            expires_at: Set(expires_at),
            created_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        let token = create_jwt(username, &session_id, expires_at, &self.config.jwt_secret)?;

        Ok(IssuedSession {
            token,
            username: username.to_string(),
            expires_at,
        })
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedSession, AppError> {
        let username = self.authenticate(username, password).await?;
        self.open_session(&username).await
    }

    /// Signature, expiry and a live session row are all required.
    pub async fn validate_session(&self, token: &str) -> Result<Claims, AppError> {
        let claims = validate_jwt(token, &self.config.jwt_secret)
            .map_err(|_| AppError::Unauthorized("Invalid or expired session".to_string()))?;

        let session = AdminSessions::find_by_id(claims.jti.clone())
            .one(&self.db)
            .await?;

        match session {
            Some(s) if s.username == claims.sub && s.expires_at > Utc::now() => Ok(claims),
            _ => Err(AppError::Unauthorized(
                "Invalid or expired session".to_string(),
            )),
        }
    }

    pub async fn close_session(&self, session_id: &str) -> Result<(), AppError> {
        AdminSessions::delete_by_id(session_id).exec(&self.db).await?;
        info!("👋 Session {} closed", session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hash = hash_password("s3cret-pass").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("s3cret-pass", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "plaintext-password"));
    }
}
