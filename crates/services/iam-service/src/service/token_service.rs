//! JWT session tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult, JwtConfig};
use domain::SECONDS_PER_DAY;

use crate::domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// User id
    pub uid: i64,
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TokenService: Send + Sync {
    /// Issue a token for a persisted user.
    fn generate_token(&self, user: &User) -> AppResult<String>;

    /// Verify signature and expiry and return the claims.
    fn validate_token(&self, token: &str) -> AppResult<Claims>;

    /// Token lifetime in seconds.
    fn expires_in(&self) -> i64;
}

pub struct JwtTokenService {
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(&self, user: &User) -> AppResult<String> {
        let uid = user
            .id()
            .ok_or_else(|| AppError::internal("Cannot issue a token for an unsaved user"))?;

        let now = Utc::now();
        let expires_at = Duration::try_days(self.config.expiration_days)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Token lifetime of {} days is out of range",
                    self.config.expiration_days
                ))
            })?;

        let claims = Claims {
            sub: user.username().to_string(),
            uid,
            roles: user.role_names(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )?;
        Ok(token)
    }

    fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    fn expires_in(&self) -> i64 {
        self.config.expiration_days.saturating_mul(SECONDS_PER_DAY)
    }
}
