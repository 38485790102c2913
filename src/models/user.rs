//! User account model and session claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Coarse permission tier attached to a user account.
///
/// `Full` and `High` form the elevated set that gates administrative views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Full,
    High,
    Extended,
    Research,
    Standard,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Full => "full",
            AccessLevel::High => "high",
            AccessLevel::Extended => "extended",
            AccessLevel::Research => "research",
            AccessLevel::Standard => "standard",
        }
    }

    /// Whether this level belongs to the elevated set {full, high}.
    pub fn is_elevated(&self) -> bool {
        matches!(self, AccessLevel::Full | AccessLevel::High)
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AccessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(AccessLevel::Full),
            "high" => Ok(AccessLevel::High),
            "extended" => Ok(AccessLevel::Extended),
            "research" => Ok(AccessLevel::Research),
            "standard" => Ok(AccessLevel::Standard),
            _ => Err(format!("Invalid access level: {}", s)),
        }
    }
}

/// A directory account.
///
/// Seeded at process start; the only mutation over its lifetime is the
/// last-login touch on successful authentication.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserAccount {
    pub username: String,
    /// Argon2 hash; the plaintext seed never leaves the seeding function.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
    pub access_level: AccessLevel,
}

/// Public projection of an account (no secrets)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserPublic {
    pub username: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub access_level: AccessLevel,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<&UserAccount> for UserPublic {
    fn from(account: &UserAccount) -> Self {
        Self {
            username: account.username.clone(),
            name: account.name.clone(),
            role: account.role.clone(),
            email: account.email.clone(),
            access_level: account.access_level,
            last_login: account.last_login,
        }
    }
}

/// JWT claims carried in the client-held session token.
///
/// The token is the whole session: verified and decoded once per request,
/// no server-side session table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Username (directory key)
    pub sub: String,
    pub name: String,
    pub role: String,
    pub access_level: AccessLevel,
    /// When this session was opened
    pub login_time: DateTime<Utc>,
    /// Extended-lifetime session ("remember me")
    pub extended: bool,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    /// Check if the session belongs to the elevated set
    pub fn is_elevated(&self) -> bool {
        self.access_level.is_elevated()
    }

    /// Require elevated access for administrative views
    pub fn require_elevated(&self) -> Result<(), AppError> {
        if self.is_elevated() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Administrative access required".to_string(),
            ))
        }
    }

    /// Landing page appropriate for this session's access level
    pub fn landing_page(&self) -> &'static str {
        if self.is_elevated() {
            "/admin-dashboard"
        } else {
            "/dashboard"
        }
    }
}
