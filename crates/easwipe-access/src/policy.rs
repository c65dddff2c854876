//! Permission table lookups and role gates.

use easwipe_core::AppError;
use easwipe_models::{Permission, Principal, Role, RolePermissionConfig};

/// The permissions configured for `role`. Unrecognized roles get none, even
/// if the table somehow carries an entry for them.
pub fn permissions_for(role: Role, configs: &[RolePermissionConfig]) -> &[Permission] {
    if role == Role::Unrecognized {
        return &[];
    }
    configs
        .iter()
        .find(|config| config.role == role)
        .map(|config| config.permissions.as_slice())
        .unwrap_or(&[])
}

/// Whether `role` holds `key`, directly or through the wildcard.
pub fn has_permission(role: Role, configs: &[RolePermissionConfig], key: &str) -> bool {
    permissions_for(role, configs)
        .iter()
        .any(|permission| permission.grants(key))
}

/// Wire form of the role's permissions, as shown on the profile.
pub fn effective_permission_keys(role: Role, configs: &[RolePermissionConfig]) -> Vec<String> {
    permissions_for(role, configs)
        .iter()
        .map(|permission| permission.as_str().to_string())
        .collect()
}

pub fn require_permission(
    principal: &Principal,
    configs: &[RolePermissionConfig],
    key: &str,
) -> Result<(), AppError> {
    if has_permission(principal.role, configs, key) {
        Ok(())
    } else {
        tracing::debug!(user_id = %principal.id, role = %principal.role, permission = key, "Permission denied");
        Err(AppError::forbidden(format!("Missing permission: {key}")))
    }
}

/// Roles that may create, edit and remove directory entries.
pub fn can_manage_users(role: Role) -> bool {
    matches!(role, Role::Admin | Role::ResourcePerson | Role::School)
}

/// Position in the management chain, highest first.
pub fn role_rank(role: Role) -> u8 {
    match role {
        Role::Admin => 4,
        Role::ResourcePerson => 3,
        Role::School => 2,
        Role::Teacher => 1,
        Role::Student | Role::Parent | Role::Unrecognized => 0,
    }
}

/// Whether `manager` may act on accounts holding `role`, or hand that role
/// out. Administrators may act on every role; everyone else only on roles
/// strictly below their own.
pub fn outranks(manager: Role, role: Role) -> bool {
    manager == Role::Admin || role_rank(manager) > role_rank(role)
}

/// Org structure, designations and settings are administrator-only.
pub fn can_administer(role: Role) -> bool {
    role == Role::Admin
}

#[cfg(test)]
mod tests {
    use super::*;
    use easwipe_core::permissions;
    use easwipe_models::default_role_permissions;

    const EVERY_KEY: [&str; 8] = [
        permissions::VIEW_ATTENDANCE,
        permissions::MARK_ATTENDANCE,
        permissions::APPROVE_LEAVE,
        permissions::APPLY_LEAVE,
        permissions::MANAGE_SHIFTS,
        permissions::POST_NOTICE,
        permissions::VIEW_REPORTS,
        permissions::VIEW_SELF_ID,
    ];

    #[test]
    fn test_admin_wildcard_grants_any_key() {
        let table = default_role_permissions();
        for key in EVERY_KEY {
            assert!(has_permission(Role::Admin, &table, key));
        }
        assert!(has_permission(Role::Admin, &table, "not_a_real_key"));
    }

    #[test]
    fn test_default_table_grants() {
        let table = default_role_permissions();
        assert!(has_permission(Role::ResourcePerson, &table, permissions::MANAGE_SHIFTS));
        assert!(has_permission(Role::School, &table, permissions::APPROVE_LEAVE));
        assert!(!has_permission(Role::School, &table, permissions::MANAGE_SHIFTS));
        assert!(has_permission(Role::Teacher, &table, permissions::POST_NOTICE));
        assert!(!has_permission(Role::Teacher, &table, permissions::APPROVE_LEAVE));
        assert!(has_permission(Role::Student, &table, permissions::APPLY_LEAVE));
        assert!(!has_permission(Role::Parent, &table, permissions::APPLY_LEAVE));
        assert!(!has_permission(Role::Parent, &table, permissions::VIEW_REPORTS));
    }

    #[test]
    fn test_unrecognized_role_has_no_permissions() {
        let mut table = default_role_permissions();
        table.push(RolePermissionConfig::new(Role::Unrecognized, ["all"]));
        for key in EVERY_KEY {
            assert!(!has_permission(Role::Unrecognized, &table, key));
        }
        assert!(effective_permission_keys(Role::Unrecognized, &table).is_empty());
    }

    #[test]
    fn test_role_missing_from_table_has_no_permissions() {
        let table = vec![RolePermissionConfig::new(Role::Admin, ["all"])];
        assert!(!has_permission(Role::Teacher, &table, permissions::VIEW_ATTENDANCE));
    }

    #[test]
    fn test_effective_keys_keep_wildcard_wire_form() {
        let table = default_role_permissions();
        assert_eq!(effective_permission_keys(Role::Admin, &table), vec!["all"]);
        assert_eq!(
            effective_permission_keys(Role::Parent, &table),
            vec![permissions::VIEW_SELF_ID]
        );
    }

    #[test]
    fn test_require_permission_is_forbidden() {
        let table = default_role_permissions();
        let parent = Principal::new("u_parent", Role::Parent);
        let err = require_permission(&parent, &table, permissions::POST_NOTICE).unwrap_err();
        assert_eq!(err.status.as_u16(), 403);
        assert!(require_permission(&parent, &table, permissions::VIEW_SELF_ID).is_ok());
    }

    #[test]
    fn test_role_gates() {
        assert!(can_manage_users(Role::School));
        assert!(!can_manage_users(Role::Teacher));
        assert!(can_administer(Role::Admin));
        assert!(!can_administer(Role::ResourcePerson));
    }

    #[test]
    fn test_outranks_is_strict_below_admin() {
        assert!(outranks(Role::Admin, Role::Admin));
        assert!(outranks(Role::ResourcePerson, Role::School));
        assert!(outranks(Role::School, Role::Teacher));
        assert!(outranks(Role::School, Role::Student));

        assert!(!outranks(Role::School, Role::School));
        assert!(!outranks(Role::School, Role::ResourcePerson));
        assert!(!outranks(Role::ResourcePerson, Role::ResourcePerson));
        assert!(!outranks(Role::ResourcePerson, Role::Admin));
        assert!(!outranks(Role::Unrecognized, Role::Parent));
    }
}
