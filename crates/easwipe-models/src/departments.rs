//! The department tree and designations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{DepartmentId, DesignationId, UserId};
use crate::users::Role;

/// A node in the organisational forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub parent_id: Option<DepartmentId>,
    #[serde(default)]
    pub head_ids: Vec<UserId>,
}

impl Department {
    pub fn new(id: impl Into<DepartmentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            head_ids: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<DepartmentId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// A job title mapped onto a system role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Designation {
    pub id: DesignationId,
    pub name: String,
    pub role: Role,
    pub department_id: Option<DepartmentId>,
}

/// Full replacement of a department's editable fields.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SaveDepartmentDto {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,
    pub parent_id: Option<DepartmentId>,
    #[serde(default)]
    pub head_ids: Vec<UserId>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SaveDesignationDto {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,
    pub role: Role,
    pub department_id: Option<DepartmentId>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClosureResponse {
    pub root: DepartmentId,
    /// Sorted for stable output.
    pub department_ids: Vec<DepartmentId>,
}
