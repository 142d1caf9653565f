//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Identity & Access
// =============================================================================

/// Maximum username length
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Maximum length of the stored (hashed) user password
pub const MAX_USER_PASSWORD_LENGTH: usize = 120;

// =============================================================================
// Profiles
// =============================================================================

/// Exact number of digits in a RUC
pub const RUC_LENGTH: usize = 11;

/// Maximum length of a razón social
pub const MAX_RAZON_SOCIAL_LENGTH: usize = 255;

/// Maximum length of a contact name
pub const MAX_NOMBRE_CONTACTO_LENGTH: usize = 255;

/// Maximum length of an email address
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Minimum length of a profile password
pub const MIN_PROFILE_PASSWORD_LENGTH: usize = 6;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in days
pub const DEFAULT_JWT_EXPIRATION_DAYS: i64 = 7;

/// Longest accepted JWT lifetime in days
pub const MAX_JWT_EXPIRATION_DAYS: i64 = 365;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per day (for token expiration calculation)
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
