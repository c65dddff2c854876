//! User directory.
//!
//! Listing follows the role visibility rule. Managers (admins, resource
//! persons, school principals) create and edit users inside their delegated
//! scope. Below administrator, a manager only touches and hands out roles
//! ranked under its own, and nobody changes their own role.

use chrono::Utc;
use tracing::{info, instrument};

use easwipe_access::{VisibilityScope, effective_permission_keys, filter_visible, outranks};
use easwipe_core::{AppError, hash_password};
use easwipe_models::{
    CreateUserDto, DepartmentId, DesignationId, Principal, ProfileResponse, Role, UpdateUserDto,
    User, UserId,
};
use easwipe_observability::track_user_created;

use crate::store::{OrgSnapshot, Store};

pub struct UserService;

impl UserService {
    #[instrument(skip(store))]
    pub async fn get_profile(store: &Store, principal: &Principal) -> Result<ProfileResponse, AppError> {
        let org = store.org();
        let user = store
            .read()
            .await
            .user(&principal.id)
            .cloned()
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(ProfileResponse {
            permissions: effective_permission_keys(user.role, &org.role_permissions),
            user,
        })
    }

    #[instrument(skip(store))]
    pub async fn get_users(store: &Store, principal: &Principal) -> Result<Vec<User>, AppError> {
        let org = store.org();
        let records = store.read().await;
        Ok(filter_visible(Some(principal), &records.users, &org.departments))
    }

    #[instrument(skip(store, dto), fields(email = %dto.email, role = %dto.role))]
    pub async fn create_user(
        store: &Store,
        principal: &Principal,
        dto: CreateUserDto,
    ) -> Result<User, AppError> {
        let org = store.org();
        let settings = store.settings();

        ensure_assignable_role(principal, dto.role)?;
        ensure_affiliations_exist(
            &org,
            [dto.department_id.as_ref(), dto.sub_department_id.as_ref(), dto.school_id.as_ref()],
            dto.designation_id.as_ref(),
        )?;
        ensure_department_in_scope(principal, &org, dto.department_id.as_ref())?;

        let min_length = settings.security.password_min_length as usize;
        if dto.password.chars().count() < min_length {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "Password must be at least {} characters",
                min_length
            )));
        }

        // Hash before taking the write lock.
        let password_hash = hash_password(&dto.password, store.config().password_hash_cost)?;

        let mut records = store.write().await;
        if records.user_by_email(&dto.email).is_some() {
            return Err(AppError::conflict(anyhow::anyhow!(
                "A user with this email already exists"
            )));
        }
        if let Some(username) = &dto.username
            && records.user_by_username(username).is_some()
        {
            return Err(AppError::conflict(anyhow::anyhow!(
                "Username is already taken"
            )));
        }

        let user = User {
            id: UserId::generate(),
            name: dto.name,
            email: dto.email,
            role: dto.role,
            avatar: dto.avatar,
            username: dto.username,
            department_id: dto.department_id,
            sub_department_id: dto.sub_department_id,
            school_id: dto.school_id,
            designation_id: dto.designation_id,
            blood_group: dto.blood_group,
            emergency_contact: dto.emergency_contact,
            id_number: dto.id_number,
            phone: dto.phone,
            created_at: Utc::now(),
        };

        records.password_hashes.insert(user.id.clone(), password_hash);
        records.users.push(user.clone());
        drop(records);

        track_user_created(user.role.as_str());
        info!(user_id = %user.id, created_by = %principal.id, "User created");
        Ok(user)
    }

    #[instrument(skip(store, dto))]
    pub async fn update_user(
        store: &Store,
        principal: &Principal,
        id: &UserId,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let org = store.org();

        if let Some(role) = dto.role {
            if &principal.id == id {
                return Err(AppError::forbidden("You cannot change your own role".to_string()));
            }
            ensure_assignable_role(principal, role)?;
        }
        ensure_affiliations_exist(
            &org,
            [dto.department_id.as_ref(), dto.sub_department_id.as_ref(), dto.school_id.as_ref()],
            dto.designation_id.as_ref(),
        )?;
        if dto.department_id.is_some() {
            ensure_department_in_scope(principal, &org, dto.department_id.as_ref())?;
        }

        let mut records = store.write().await;
        let index = managed_user_index(&records.users, principal, &org, id)?;

        if let Some(email) = &dto.email
            && records
                .user_by_email(email)
                .is_some_and(|other| &other.id != id)
        {
            return Err(AppError::conflict(anyhow::anyhow!(
                "A user with this email already exists"
            )));
        }
        if let Some(username) = &dto.username
            && records
                .user_by_username(username)
                .is_some_and(|other| &other.id != id)
        {
            return Err(AppError::conflict(anyhow::anyhow!(
                "Username is already taken"
            )));
        }

        let user = &mut records.users[index];

        let UpdateUserDto {
            name,
            email,
            role,
            username,
            avatar,
            department_id,
            sub_department_id,
            school_id,
            designation_id,
            blood_group,
            emergency_contact,
            id_number,
            phone,
        } = dto;

        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        if let Some(role) = role {
            info!(user_id = %id, from = %user.role, to = %role, changed_by = %principal.id, "User role changed");
            user.role = role;
        }
        user.username = username.or(user.username.take());
        user.avatar = avatar.or(user.avatar.take());
        user.department_id = department_id.or(user.department_id.take());
        user.sub_department_id = sub_department_id.or(user.sub_department_id.take());
        user.school_id = school_id.or(user.school_id.take());
        user.designation_id = designation_id.or(user.designation_id.take());
        user.blood_group = blood_group.or(user.blood_group.take());
        user.emergency_contact = emergency_contact.or(user.emergency_contact.take());
        user.id_number = id_number.or(user.id_number.take());
        user.phone = phone.or(user.phone.take());

        Ok(user.clone())
    }

    #[instrument(skip(store))]
    pub async fn delete_user(store: &Store, principal: &Principal, id: &UserId) -> Result<(), AppError> {
        if &principal.id == id {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "You cannot delete your own account"
            )));
        }

        let org = store.org();
        let mut records = store.write().await;
        let index = managed_user_index(&records.users, principal, &org, id)?;

        records.users.remove(index);
        records.password_hashes.remove(id);
        info!(user_id = %id, deleted_by = %principal.id, "User deleted");
        Ok(())
    }
}

/// Position of user `id`, if `principal` may manage them. Users outside the
/// manager's scope are reported as missing. Inside the scope, a manager acts
/// on its own account and on roles ranked below its own.
fn managed_user_index(
    users: &[User],
    principal: &Principal,
    org: &OrgSnapshot,
    id: &UserId,
) -> Result<usize, AppError> {
    let scope = VisibilityScope::delegated(principal, &org.departments);
    let index = users
        .iter()
        .position(|user| &user.id == id && scope.permits(user))
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

    let user = &users[index];
    if user.id != principal.id && !outranks(principal.role, user.role) {
        return Err(AppError::forbidden(format!(
            "Role {} cannot manage {} accounts",
            principal.role, user.role
        )));
    }
    Ok(index)
}

fn ensure_assignable_role(principal: &Principal, role: Role) -> Result<(), AppError> {
    if role == Role::Unrecognized {
        return Err(AppError::bad_request(anyhow::anyhow!("Unknown role")));
    }
    if !outranks(principal.role, role) {
        return Err(AppError::forbidden(format!(
            "Role {} cannot assign the {} role",
            principal.role, role
        )));
    }
    Ok(())
}

fn ensure_affiliations_exist(
    org: &OrgSnapshot,
    departments: [Option<&DepartmentId>; 3],
    designation: Option<&DesignationId>,
) -> Result<(), AppError> {
    for department in departments.into_iter().flatten() {
        if !org.departments.iter().any(|d| &d.id == department) {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Department {} does not exist",
                department
            )));
        }
    }
    if let Some(designation) = designation
        && !org.designations.iter().any(|d| &d.id == designation)
    {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Designation {} does not exist",
            designation
        )));
    }
    Ok(())
}

fn ensure_department_in_scope(
    principal: &Principal,
    org: &OrgSnapshot,
    department: Option<&DepartmentId>,
) -> Result<(), AppError> {
    if VisibilityScope::delegated(principal, &org.departments).covers_department(department) {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "You can only manage users inside your department".to_string(),
        ))
    }
}
