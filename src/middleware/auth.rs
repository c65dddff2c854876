use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use easwipe_auth::{Claims, verify_token};
use easwipe_core::AppError;
use easwipe_models::{Principal, UserId};

use crate::state::AppState;

/// Extractor that validates the bearer token and exposes the caller's claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The principal every access decision is made for.
    pub fn principal(&self) -> Principal {
        self.0.to_principal()
    }

    pub fn user_id(&self) -> &UserId {
        &self.0.sub
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid authorization header format".to_string())
        })?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

/// Declares an extractor that requires a permission key from the live role
/// permission table. Edits to the table apply to the next request without
/// reissuing tokens.
#[macro_export]
macro_rules! require_permission {
    ($name:ident, $permission:expr) => {
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

                let org = state.store.org();
                easwipe_access::require_permission(
                    &auth_user.principal(),
                    &org.role_permissions,
                    $permission,
                )?;

                Ok($name(auth_user))
            }
        }
    };
}

require_permission!(RequirePostNotice, easwipe_core::permissions::POST_NOTICE);
require_permission!(RequireManageShifts, easwipe_core::permissions::MANAGE_SHIFTS);

#[cfg(test)]
mod tests {
    use super::*;
    use easwipe_models::{DepartmentId, Role};

    #[test]
    fn test_principal_from_claims() {
        let claims = Claims {
            sub: UserId::from("u_rp"),
            email: "rp@easwipe.com".to_string(),
            role: Role::ResourcePerson,
            department_id: Some(DepartmentId::from("d1")),
            school_id: None,
            designation_id: None,
            exp: 9999999999,
            iat: 1234567890,
        };
        let auth_user = AuthUser(claims);

        let principal = auth_user.principal();
        assert_eq!(principal.id, UserId::from("u_rp"));
        assert_eq!(principal.role, Role::ResourcePerson);
        assert_eq!(principal.department_id, Some(DepartmentId::from("d1")));
        assert_eq!(auth_user.email(), "rp@easwipe.com");
    }
}
