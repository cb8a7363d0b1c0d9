// src/utils/jwt.rs

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::Config, error::AppError};

/// JWT Claims structure. Tokens are issued by the identity service.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Claims {
    /// Subject - the talent id (UUID as string).
    pub sub: String,
    /// Expiration time as Unix timestamp.
    pub exp: usize,
}

impl Claims {
    /// The calling talent. A malformed subject is treated as missing.
    pub fn talent_id(&self) -> Uuid {
        Uuid::parse_str(&self.sub).unwrap_or(Uuid::nil())
    }
}

/// Signs a token whose subject is `talent_id`.
pub fn sign_jwt(talent_id: Uuid, secret: &str, expiration_seconds: u64) -> Result<String, AppError> {
    let expiration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .as_secs() as usize
        + expiration_seconds as usize;

    let claims = Claims {
        sub: talent_id.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Verifies and decodes a JWT string.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::AuthError("Invalid token".to_string()))?;

    Ok(token_data.claims)
}

/// Axum Middleware: Authentication.
///
/// Validates the 'Authorization: Bearer <token>' header and injects `Claims`
/// into the request extensions. Returns 401 otherwise.
pub async fn auth_middleware(
    State(config): State<Config>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => return Err(StatusCode::UNAUTHORIZED),
    };

    match verify_jwt(token, &config.jwt_secret) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(_) => Err(StatusCode::UNAUTHORIZED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_token_round_trips_talent_id() {
        let talent = Uuid::new_v4();
        let token = sign_jwt(talent, "secret", 60).unwrap();

        let claims = verify_jwt(&token, "secret").unwrap();
        assert_eq!(claims.talent_id(), talent);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign_jwt(Uuid::new_v4(), "secret", 60).unwrap();
        assert!(matches!(verify_jwt(&token, "other"), Err(AppError::AuthError(_))));
    }

    #[test]
    fn malformed_subject_maps_to_nil() {
        let claims = Claims { sub: "42".to_string(), exp: 0 };
        assert!(claims.talent_id().is_nil());
    }
}
