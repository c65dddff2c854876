//! JWT claim structures for access tokens.

use easwipe_models::{DepartmentId, DesignationId, Principal, Role, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for access tokens.
///
/// An unknown `role` string decodes to [`Role::Unrecognized`] rather than
/// rejecting the token, so the access layer can fail closed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: UserId,
    pub email: String,
    pub role: Role,
    pub department_id: Option<DepartmentId>,
    pub school_id: Option<DepartmentId>,
    pub designation_id: Option<DesignationId>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn to_principal(&self) -> Principal {
        Principal {
            id: self.sub.clone(),
            role: self.role,
            department_id: self.department_id.clone(),
            school_id: self.school_id.clone(),
            designation_id: self.designation_id.clone(),
        }
    }
}
