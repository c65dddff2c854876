//! Permission sets and the role permission table.
//!
//! A permission is either the wildcard ([`Permission::All`], wire form `"all"`)
//! or a specific key such as `approve_leave`. Call sites never compare against
//! the `"all"` string directly.

use easwipe_core::permissions;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use utoipa::ToSchema;

use crate::users::Role;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Permission {
    All,
    Key(String),
}

impl Permission {
    pub fn key(key: impl Into<String>) -> Self {
        let key = key.into();
        if key == permissions::WILDCARD {
            Permission::All
        } else {
            Permission::Key(key)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Permission::All => permissions::WILDCARD,
            Permission::Key(key) => key,
        }
    }

    /// Whether this permission grants `key`.
    pub fn grants(&self, key: &str) -> bool {
        match self {
            Permission::All => true,
            Permission::Key(own) => own == key,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Permission::key)
    }
}

/// Permissions configured for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RolePermissionConfig {
    pub role: Role,
    #[schema(value_type = Vec<String>, example = json!(["view_attendance", "approve_leave"]))]
    pub permissions: Vec<Permission>,
}

impl RolePermissionConfig {
    pub fn new<I, S>(role: Role, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            role,
            permissions: keys.into_iter().map(Permission::key).collect(),
        }
    }
}

/// An entry of the permission catalogue shown on the roles settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AppPermission {
    #[schema(value_type = String)]
    pub key: &'static str,
    #[schema(value_type = String)]
    pub label: &'static str,
    #[schema(value_type = String)]
    pub module: &'static str,
}

/// Every permission key an administrator can toggle.
pub const PERMISSION_CATALOGUE: [AppPermission; 6] = [
    AppPermission {
        key: permissions::VIEW_ATTENDANCE,
        label: "View Attendance",
        module: "Attendance",
    },
    AppPermission {
        key: permissions::MARK_ATTENDANCE,
        label: "Manual Marking",
        module: "Attendance",
    },
    AppPermission {
        key: permissions::APPROVE_LEAVE,
        label: "Approve Leaves",
        module: "Leave",
    },
    AppPermission {
        key: permissions::MANAGE_SHIFTS,
        label: "Manage Shifts",
        module: "Shifts",
    },
    AppPermission {
        key: permissions::POST_NOTICE,
        label: "Post Notices",
        module: "Notice Board",
    },
    AppPermission {
        key: permissions::VIEW_REPORTS,
        label: "View Analytics",
        module: "Reports",
    },
];

/// The permission table a fresh installation starts with.
pub fn default_role_permissions() -> Vec<RolePermissionConfig> {
    use permissions::*;

    vec![
        RolePermissionConfig::new(Role::Admin, [WILDCARD]),
        RolePermissionConfig::new(
            Role::ResourcePerson,
            [
                VIEW_ATTENDANCE,
                MARK_ATTENDANCE,
                APPROVE_LEAVE,
                MANAGE_SHIFTS,
                POST_NOTICE,
            ],
        ),
        RolePermissionConfig::new(
            Role::School,
            [VIEW_ATTENDANCE, MARK_ATTENDANCE, APPROVE_LEAVE, POST_NOTICE],
        ),
        RolePermissionConfig::new(
            Role::Teacher,
            [VIEW_ATTENDANCE, MARK_ATTENDANCE, POST_NOTICE],
        ),
        RolePermissionConfig::new(Role::Student, [VIEW_SELF_ID, APPLY_LEAVE]),
        RolePermissionConfig::new(Role::Parent, [VIEW_SELF_ID]),
    ]
}
