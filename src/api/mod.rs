//! API handlers for Atheneum endpoints

pub mod auth;
pub mod catalog;
pub mod contact;
pub mod dashboard;
pub mod health;
pub mod openapi;
pub mod pages;
pub mod system;

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode, Uri},
    middleware::Next,
    response::Response,
};
use serde_json::json;
use std::net::SocketAddr;

use crate::{
    error::AppError,
    models::activity::{ActivityAction, ActivityEvent},
    models::user::SessionClaims,
    AppState,
};

/// Extractor for an authenticated session, reconstructed from the bearer token.
/// Fails closed: routes using it reject unauthenticated requests with a
/// login redirect hint.
pub struct AuthenticatedUser(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthenticated(
                    "Authentication required. Please log in to continue.".to_string(),
                )
            })?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Unauthenticated(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];

        // Verify the signed session capsule using the configured secret
        let claims = SessionClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|_| {
                AppError::Unauthenticated(
                    "Session expired or invalid. Please log in again.".to_string(),
                )
            })?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Extractor for sessions in the elevated set {full, high}; everything else
/// is rejected with `Forbidden`.
pub struct ElevatedUser(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for ElevatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(claims) = AuthenticatedUser::from_request_parts(parts, state).await?;
        claims.require_elevated()?;
        Ok(ElevatedUser(claims))
    }
}

/// Client origin address, from X-Forwarded-For when present, otherwise the
/// peer address.
pub struct ClientAddr(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let origin = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(|value| value.trim().to_string())
            .or_else(|| {
                parts
                    .extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|info| info.0.ip().to_string())
            })
            .unwrap_or_else(|| "unknown".to_string());
        Ok(ClientAddr(origin))
    }
}

/// Fallback for unmatched routes: recorded in the activity log and rendered
/// through the shared error body.
pub async fn not_found(
    State(state): State<AppState>,
    session: Option<AuthenticatedUser>,
    ClientAddr(origin): ClientAddr,
    uri: Uri,
) -> AppError {
    state.stores.activity.record(ActivityEvent::new(
        ActivityAction::PageNotFound,
        session.as_ref().map(|s| s.0.sub.as_str()),
        Some(json!({ "url": uri.to_string() })),
        &origin,
    ));
    AppError::NotFound(format!("No such page: {}", uri.path()))
}

/// Response-status middleware: internal faults are recorded with the failing
/// path so the admin dashboard sees them.
pub async fn track_internal_faults(
    State(state): State<AppState>,
    ClientAddr(origin): ClientAddr,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    if response.status() == StatusCode::INTERNAL_SERVER_ERROR {
        state.stores.activity.record(ActivityEvent::new(
            ActivityAction::InternalError,
            None,
            Some(json!({ "path": path })),
            &origin,
        ));
    }
    response
}
