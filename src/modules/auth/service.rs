use tracing::{info, instrument, warn};

use easwipe_auth::create_access_token;
use easwipe_config::JwtConfig;
use easwipe_core::{AppError, verify_password};
use easwipe_models::{ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse};
use easwipe_observability::{track_login_failure, track_login_success};

use crate::store::Store;

pub struct AuthService;

impl AuthService {
    #[instrument(skip(store, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login_user(
        store: &Store,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let (user, password_hash) = {
            let records = store.read().await;
            let user = records.user_by_email(&dto.email).cloned();
            let hash = user
                .as_ref()
                .and_then(|user| records.password_hashes.get(&user.id).cloned());
            (user, hash)
        };

        let (Some(user), Some(password_hash)) = (user, password_hash) else {
            warn!("Login attempt for unknown email");
            track_login_failure("unknown_email");
            return Err(AppError::unauthorized(
                "Invalid email or password".to_string(),
            ));
        };

        if !verify_password(&dto.password, &password_hash)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            track_login_failure("wrong_password");
            return Err(AppError::unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let access_token = create_access_token(&user, jwt_config)?;
        track_login_success(user.role.as_str());
        info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginResponse { access_token, user })
    }

    /// Always answers the same way so callers cannot probe which emails exist.
    /// No mail is sent.
    #[instrument(skip(store, dto))]
    pub async fn forgot_password(
        store: &Store,
        dto: ForgotPasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        let known = store.read().await.user_by_email(&dto.email).is_some();
        info!(known_account = known, "Password reset requested");

        Ok(MessageResponse::new(
            "If an account exists for that email, reset instructions have been sent",
        ))
    }
}
