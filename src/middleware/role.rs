//! Role-gated extractors.
//!
//! Role checks here are coarse gates for whole endpoints. Finer decisions
//! (which records, which departments) are made by `easwipe_access` inside
//! the services.

use easwipe_access::{can_administer, can_manage_users};
use easwipe_core::AppError;
use easwipe_models::Role;

use crate::middleware::auth::AuthUser;

pub fn ensure_role(auth_user: &AuthUser, allowed: fn(Role) -> bool) -> Result<(), AppError> {
    if allowed(auth_user.0.role) {
        return Ok(());
    }
    Err(AppError::forbidden(format!(
        "Access denied. Role {} is not permitted",
        auth_user.0.role
    )))
}

/// Declares an extractor that only admits roles accepted by `$allowed`.
#[macro_export]
macro_rules! require_roles {
    ($name:ident, $allowed:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = easwipe_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;
                $crate::middleware::role::ensure_role(&auth_user, $allowed)?;
                Ok($name(auth_user))
            }
        }
    };
}

require_roles!(RequireAdmin, can_administer);
require_roles!(RequireUserManager, can_manage_users);
