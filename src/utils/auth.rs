use anyhow::Result;
use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // admin username
    pub exp: usize,
    pub jti: String, // admin_sessions.id
}

pub fn create_jwt(
    username: &str,
    session_id: &str,
    expires_at: DateTime<Utc>,
    secret: &str,
) -> Result<String> {
    let claims = Claims {
        sub: username.to_owned(),
        exp: expires_at.timestamp() as usize,
        jti: session_id.to_owned(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(token)
}

pub fn validate_jwt(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}
