//! Authentication endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::user::UserPublic,
};

use super::{AuthenticatedUser, ClientAddr};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Ask for an extended-lifetime session
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    pub user: UserPublic,
    /// Dashboard appropriate for the session's access level
    pub redirect: String,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
    pub redirect: String,
}

/// Credential submission
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    ClientAddr(origin): ClientAddr,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let username = request.username.trim();
    let password = request.password.trim();

    if username.is_empty() || password.is_empty() {
        return Err(AppError::Validation(vec![
            "Username and password are required for system access.".to_string(),
        ]));
    }

    let success = state
        .services
        .auth
        .authenticate(username, password, request.remember_me, &origin)
        .await?;

    let message = format!(
        "Welcome back, {}! Access granted to Atheneum.",
        success.user.name
    );
    Ok(Json(LoginResponse {
        token: success.token,
        token_type: "Bearer".to_string(),
        expires_in: success.expires_in,
        redirect: success.claims.landing_page().to_string(),
        user: success.user,
        message,
    }))
}

/// End the session. The token is client-held, so this records the logout
/// and the client discards the capsule.
#[utoipa::path(
    get,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session ended", body = LogoutResponse)
    )
)]
pub async fn logout(
    State(state): State<crate::AppState>,
    session: Option<AuthenticatedUser>,
    ClientAddr(origin): ClientAddr,
) -> Json<LogoutResponse> {
    let claims = session.as_ref().map(|s| &s.0);
    state.services.auth.logout(claims, &origin);

    let name = claims.map(|c| c.name.as_str()).unwrap_or("visitor");
    Json(LogoutResponse {
        message: format!(
            "Session terminated successfully. Thank you for using Atheneum, {}!",
            name
        ),
        redirect: "/".to_string(),
    })
}
