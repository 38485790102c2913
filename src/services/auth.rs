//! Authentication service

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use chrono::Utc;
use serde_json::json;
use std::time::Duration;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        activity::{ActivityAction, ActivityEvent},
        user::{SessionClaims, UserPublic},
    },
    store::Stores,
};

/// Outcome of a successful credential check
#[derive(Debug)]
pub struct AuthSuccess {
    /// Signed session token (the client-held session capsule)
    pub token: String,
    pub claims: SessionClaims,
    pub user: UserPublic,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

#[derive(Clone)]
pub struct AuthService {
    stores: Stores,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(stores: Stores, config: AuthConfig) -> Self {
        Self { stores, config }
    }

    /// Check credentials against the directory and open a session.
    ///
    /// Failure paths (unknown username, password mismatch) are
    /// indistinguishable to the caller and both impose the configured delay.
    /// Success touches the account's last-login timestamp, bumps the login
    /// counter and records exactly one `successful_login` event.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
        origin: &str,
    ) -> AppResult<AuthSuccess> {
        self.stores.activity.record(ActivityEvent::new(
            ActivityAction::LoginAttempt,
            None,
            Some(json!({ "username": username })),
            origin,
        ));

        let account = match self.stores.directory.get(username) {
            Some(account) => account,
            None => return self.reject(username, origin).await,
        };

        if !self.verify_password(&account.password_hash, password)? {
            return self.reject(username, origin).await;
        }

        let now = Utc::now();
        self.stores.directory.touch_login(username, now);

        let expires_in = if remember_me {
            self.config.extended_session_days as i64 * 86_400
        } else {
            self.config.jwt_expiration_hours as i64 * 3_600
        };

        let claims = SessionClaims {
            sub: account.username.clone(),
            name: account.name.clone(),
            role: account.role.clone(),
            access_level: account.access_level,
            login_time: now,
            extended: remember_me,
            iat: now.timestamp(),
            exp: now.timestamp() + expires_in,
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create session token: {}", e)))?;

        self.stores.counters.record_login();
        self.stores.activity.record(ActivityEvent::new(
            ActivityAction::SuccessfulLogin,
            Some(username),
            None,
            origin,
        ));
        tracing::info!(username, access_level = %account.access_level, "login succeeded");

        // Re-read so the returned profile carries the fresh last-login
        let user = self
            .stores
            .directory
            .get(username)
            .map(|account| UserPublic::from(&account))
            .ok_or_else(|| AppError::Internal("Account vanished during login".to_string()))?;

        Ok(AuthSuccess {
            token,
            claims,
            user,
            expires_in,
        })
    }

    /// Record the end of a session. With client-held tokens there is nothing
    /// to revoke server-side; the client discards the capsule.
    pub fn logout(&self, claims: Option<&SessionClaims>, origin: &str) {
        self.stores.activity.record(ActivityEvent::new(
            ActivityAction::Logout,
            claims.map(|c| c.sub.as_str()),
            None,
            origin,
        ));
    }

    /// Resolve the directory account behind a session
    pub fn current_user(&self, claims: &SessionClaims) -> AppResult<UserPublic> {
        self.stores
            .directory
            .get(&claims.sub)
            .map(|account| UserPublic::from(&account))
            .ok_or_else(|| AppError::NotFound(format!("Unknown account: {}", claims.sub)))
    }

    fn verify_password(&self, hash: &str, password: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    async fn reject<T>(&self, username: &str, origin: &str) -> AppResult<T> {
        self.stores.activity.record(ActivityEvent::new(
            ActivityAction::FailedLogin,
            None,
            Some(json!({ "username": username })),
            origin,
        ));
        tracing::warn!(username, "login failed");
        tokio::time::sleep(Duration::from_millis(self.config.failed_login_delay_ms)).await;
        Err(AppError::Authentication(
            "Authentication failed. Please verify your credentials and try again.".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActivityConfig;
    use crate::models::user::AccessLevel;
    use crate::store::directory::SEED_ACCOUNTS;

    fn service() -> (AuthService, Stores) {
        let stores = Stores::new(&ActivityConfig { capacity: 256 }).unwrap();
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiration_hours: 1,
            extended_session_days: 30,
            failed_login_delay_ms: 0,
        };
        (AuthService::new(stores.clone(), config), stores)
    }

    #[tokio::test]
    async fn every_seed_account_authenticates_with_its_level() {
        let (auth, _stores) = service();
        for seed in &SEED_ACCOUNTS {
            let success = auth
                .authenticate(seed.username, seed.password, false, "127.0.0.1")
                .await
                .expect("seed credentials must authenticate");
            assert_eq!(success.claims.access_level, seed.access_level);
            assert_eq!(success.user.username, seed.username);
        }
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_rejected() {
        let (auth, _stores) = service();
        let err = auth
            .authenticate("admin", "not-the-password", false, "127.0.0.1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authentication(_)));

        let err = auth
            .authenticate("nobody", "admin2025", false, "127.0.0.1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authentication(_)));
    }

    #[tokio::test]
    async fn success_records_exactly_one_login_event_for_the_user() {
        let (auth, stores) = service();
        auth.authenticate("student", "student456", false, "127.0.0.1")
            .await
            .unwrap();

        assert_eq!(
            stores
                .activity
                .count_by_action("student", ActivityAction::SuccessfulLogin),
            1
        );
        assert_eq!(stores.counters.snapshot().successful_logins, 1);
        assert!(stores.directory.get("student").unwrap().last_login.is_some());
    }

    #[tokio::test]
    async fn failed_attempts_never_attribute_the_attempted_username() {
        let (auth, stores) = service();
        let _ = auth
            .authenticate("ghost", "whatever", false, "127.0.0.1")
            .await;

        // attempted name lives in details only; actor stays anonymous
        assert_eq!(stores.activity.count_for("ghost"), 0);
        assert_eq!(
            stores
                .activity
                .count_by_action(crate::models::ANONYMOUS, ActivityAction::FailedLogin),
            1
        );
    }

    #[test]
    fn extended_session_outlives_the_default_one() {
        let (auth, _stores) = service();
        let short = tokio_test::block_on(auth.authenticate(
            "faculty",
            "faculty789",
            false,
            "127.0.0.1",
        ))
        .unwrap();
        let long = tokio_test::block_on(auth.authenticate(
            "faculty",
            "faculty789",
            true,
            "127.0.0.1",
        ))
        .unwrap();
        assert!(long.expires_in > short.expires_in);
        assert!(long.claims.extended);
        assert_eq!(short.claims.access_level, AccessLevel::Extended);
    }

    #[tokio::test]
    async fn token_round_trips_through_the_extractor_path() {
        let (auth, _stores) = service();
        let success = auth
            .authenticate("librarian", "lib123", false, "127.0.0.1")
            .await
            .unwrap();
        let claims = SessionClaims::from_token(&success.token, "test-secret").unwrap();
        assert_eq!(claims.sub, "librarian");
        assert!(claims.is_elevated());
    }
}
