//! Role permission table and organisation settings.
//!
//! The permission table lives in the org snapshot so a request sees the
//! table and the department tree from the same version.

use std::collections::HashSet;

use tracing::{info, instrument};

use easwipe_core::AppError;
use easwipe_models::{
    AppConfig, EmailConfig, IdFieldConfig, Permission, Role, RolePermissionConfig,
    SecurityConfig, Settings,
};

use crate::store::Store;

pub struct SettingsService;

impl SettingsService {
    #[instrument(skip(store))]
    pub async fn get_role_permissions(store: &Store) -> Vec<RolePermissionConfig> {
        store.org().role_permissions.clone()
    }

    /// Replaces the whole table. Roles left out end up with no permissions.
    #[instrument(skip(store, configs), fields(roles = configs.len()))]
    pub async fn update_role_permissions(
        store: &Store,
        configs: Vec<RolePermissionConfig>,
    ) -> Result<Vec<RolePermissionConfig>, AppError> {
        validate_role_permissions(&configs)?;

        let version = store
            .update_org(|org| {
                org.role_permissions = configs.clone();
                Ok(org.version + 1)
            })
            .await?;

        info!(version, "Role permissions updated");
        Ok(configs)
    }

    #[instrument(skip(store))]
    pub async fn get_settings(store: &Store) -> std::sync::Arc<Settings> {
        store.settings()
    }

    #[instrument(skip(store, config))]
    pub async fn update_app_config(store: &Store, config: AppConfig) -> Result<AppConfig, AppError> {
        Self::replace_section(store, "app", |settings| settings.app = config.clone()).await?;
        Ok(config)
    }

    #[instrument(skip(store, config))]
    pub async fn update_email_config(
        store: &Store,
        config: EmailConfig,
    ) -> Result<EmailConfig, AppError> {
        Self::replace_section(store, "email", |settings| settings.email = config.clone()).await?;
        Ok(config)
    }

    #[instrument(skip(store, config))]
    pub async fn update_security_config(
        store: &Store,
        config: SecurityConfig,
    ) -> Result<SecurityConfig, AppError> {
        Self::replace_section(store, "security", |settings| {
            settings.security = config.clone()
        })
        .await?;
        Ok(config)
    }

    #[instrument(skip(store, config))]
    pub async fn update_id_card_config(
        store: &Store,
        config: IdFieldConfig,
    ) -> Result<IdFieldConfig, AppError> {
        Self::replace_section(store, "id_card", |settings| {
            settings.id_card = config.clone()
        })
        .await?;
        Ok(config)
    }

    async fn replace_section<F>(store: &Store, section: &str, apply: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Settings),
    {
        store
            .update_settings(|settings| {
                apply(settings);
                Ok(())
            })
            .await?;
        info!(section, "Settings updated");
        Ok(())
    }
}

fn validate_role_permissions(configs: &[RolePermissionConfig]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for config in configs {
        if config.role == Role::Unrecognized {
            return Err(AppError::bad_request(anyhow::anyhow!("Unknown role")));
        }
        if !seen.insert(config.role) {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Role {} is listed more than once",
                config.role
            )));
        }
        if config
            .permissions
            .iter()
            .any(|permission| matches!(permission, Permission::Key(key) if key.trim().is_empty()))
        {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Permission keys must not be empty"
            )));
        }
    }
    Ok(())
}
