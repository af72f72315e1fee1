//! Bearer-token authentication and role checks.
//!
//! Token issuance is out of band; this service only validates tokens signed
//! with the shared secret and enforces the USER role on workflow routes.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Roles recognized by the workflow routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

impl Claims {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r == role.as_str())
    }
}

/// JWT service for token generation and validation
#[derive(Clone)]
pub struct JwtService {
    secret: String,
    expiration_hours: u64,
}

impl JwtService {
    /// Create a new JWT service
    pub fn new(secret: String, expiration_hours: Option<u64>) -> Self {
        Self {
            secret,
            expiration_hours: expiration_hours.unwrap_or(24),
        }
    }

    /// Generate a token for a principal with the given roles
    pub fn generate_token(&self, username: &str, roles: &[Role]) -> Result<String, AppError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AppError::internal("system clock before epoch"))?
            .as_secs();

        let exp = now + (self.expiration_hours * 3600);

        let claims = Claims {
            sub: username.to_string(),
            roles: roles.iter().map(|r| r.as_str().to_string()).collect(),
            exp: exp as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|_| AppError::unauthorized("Failed to generate token"))
    }

    /// Validate a token and return its claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::unauthorized("Invalid token"))?;

        Ok(token_data.claims)
    }
}

/// Authentication middleware: validates the bearer token and stores the
/// claims in request extensions for the role check and handlers.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => {
            header.strip_prefix("Bearer ").unwrap_or("")
        }
        _ => return Err(AppError::unauthorized("missing bearer token")),
    };

    let claims = state.jwt.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Authorization middleware: the adoption workflow requires the USER role.
pub async fn require_user_role(req: Request, next: Next) -> Result<Response, AppError> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| AppError::unauthorized("no authenticated principal"))?;

    if claims.has_role(Role::User) || claims.has_role(Role::Admin) {
        Ok(next.run(req).await)
    } else {
        tracing::warn!(principal = %claims.sub, "principal lacks USER role");
        Err(AppError::forbidden("USER role required"))
    }
}
