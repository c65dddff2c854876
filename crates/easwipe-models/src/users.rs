//! User domain models and DTOs.
//!
//! Contains the user entity, the fixed set of system roles, and the
//! [`Principal`] describing who is making a request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{DepartmentId, DesignationId, UserId};
use crate::scoped::Scoped;

/// System roles.
///
/// Role values arriving from tokens or stored tables that do not match a known
/// role deserialize to [`Role::Unrecognized`], which the access layer treats
/// as self-only with no permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    ResourcePerson,
    School,
    Teacher,
    Student,
    Parent,
    #[serde(other)]
    Unrecognized,
}

impl Role {
    /// Every assignable role, in display order.
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::ResourcePerson,
        Role::School,
        Role::Teacher,
        Role::Student,
        Role::Parent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::ResourcePerson => "RESOURCE_PERSON",
            Role::School => "SCHOOL",
            Role::Teacher => "TEACHER",
            Role::Student => "STUDENT",
            Role::Parent => "PARENT",
            Role::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    /// Never fails: unknown values become [`Role::Unrecognized`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ADMIN" => Role::Admin,
            "RESOURCE_PERSON" => Role::ResourcePerson,
            "SCHOOL" => Role::School,
            "TEACHER" => Role::Teacher,
            "STUDENT" => Role::Student,
            "PARENT" => Role::Parent,
            _ => Role::Unrecognized,
        })
    }
}

/// A user in the campus directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub username: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub sub_department_id: Option<DepartmentId>,
    /// Schools are departments in the org tree.
    pub school_id: Option<DepartmentId>,
    pub designation_id: Option<DesignationId>,
    pub blood_group: Option<String>,
    pub emergency_contact: Option<String>,
    pub id_number: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id.clone(),
            role: self.role,
            department_id: self.department_id.clone(),
            school_id: self.school_id.clone(),
            designation_id: self.designation_id.clone(),
        }
    }
}

impl Scoped for User {
    fn owner_id(&self) -> &UserId {
        &self.id
    }

    fn department_id(&self) -> Option<&DepartmentId> {
        self.department_id.as_ref()
    }
}

/// The authenticated actor a request is evaluated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    pub id: UserId,
    pub role: Role,
    pub department_id: Option<DepartmentId>,
    pub school_id: Option<DepartmentId>,
    pub designation_id: Option<DesignationId>,
}

impl Principal {
    pub fn new(id: impl Into<UserId>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
            department_id: None,
            school_id: None,
            designation_id: None,
        }
    }

    pub fn with_department(mut self, department_id: impl Into<DepartmentId>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Checked against the security policy's minimum length.
    pub password: String,
    pub role: Role,
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub sub_department_id: Option<DepartmentId>,
    pub school_id: Option<DepartmentId>,
    pub designation_id: Option<DesignationId>,
    pub blood_group: Option<String>,
    pub emergency_contact: Option<String>,
    pub id_number: Option<String>,
    pub phone: Option<String>,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 120, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    pub role: Option<Role>,
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub sub_department_id: Option<DepartmentId>,
    pub school_id: Option<DepartmentId>,
    pub designation_id: Option<DesignationId>,
    pub blood_group: Option<String>,
    pub emergency_contact: Option<String>,
    pub id_number: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user: User,
    /// Effective permission keys; `["all"]` for wildcard holders.
    pub permissions: Vec<String>,
}

/// Public ID card. Optional fields are only filled when the ID card field
/// configuration enables them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct IdCard {
    pub organization: String,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub username: Option<String>,
    pub department: Option<String>,
    pub blood_group: Option<String>,
    pub emergency_contact: Option<String>,
    pub id_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_round_trip() {
        assert_eq!(
            serde_json::to_string(&Role::ResourcePerson).unwrap(),
            r#""RESOURCE_PERSON""#
        );
        let role: Role = serde_json::from_str(r#""TEACHER""#).unwrap();
        assert_eq!(role, Role::Teacher);
    }

    #[test]
    fn test_unknown_role_is_unrecognized() {
        let role: Role = serde_json::from_str(r#""JANITOR""#).unwrap();
        assert_eq!(role, Role::Unrecognized);
        assert_eq!("janitor".parse::<Role>().unwrap(), Role::Unrecognized);
    }

    #[test]
    fn test_role_from_str_matches_as_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_principal_builder() {
        let principal = Principal::new("u_rp", Role::ResourcePerson).with_department("d1");
        assert_eq!(principal.department_id, Some(DepartmentId::from("d1")));
        assert!(!principal.is_admin());
    }

    #[test]
    fn test_create_user_dto_validation() {
        let dto = CreateUserDto {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            password: "password".to_string(),
            role: Role::Student,
            username: None,
            avatar: None,
            department_id: None,
            sub_department_id: None,
            school_id: None,
            designation_id: None,
            blood_group: None,
            emergency_contact: None,
            id_number: None,
            phone: None,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
    }
}
