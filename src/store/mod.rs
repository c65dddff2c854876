//! In-memory data store.
//!
//! Organisation configuration (departments, designations, role permissions)
//! and settings are read-mostly. Each lives in an [`ArcSwap`] cell: readers
//! take a snapshot with a single atomic load and keep using it for the whole
//! request, while writers serialize on a mutex, edit a copy and publish it in
//! one swap. Campus records change often and sit behind a read-write lock.

mod seed;

pub use seed::DEMO_PASSWORD;

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use easwipe_config::StoreConfig;
use easwipe_core::AppError;
use easwipe_models::{
    AttendanceEntry, Department, DepartmentId, Designation, LeaveRequest, Notice,
    RolePermissionConfig, Settings, Shift, ShiftAssignment, ShiftChangeRequest, User, UserId,
    default_role_permissions,
};

/// One consistent version of the org structure and permission table.
#[derive(Debug, Clone)]
pub struct OrgSnapshot {
    /// Incremented on every published edit.
    pub version: u64,
    pub departments: Vec<Department>,
    pub designations: Vec<Designation>,
    pub role_permissions: Vec<RolePermissionConfig>,
}

impl Default for OrgSnapshot {
    fn default() -> Self {
        Self {
            version: 1,
            departments: Vec::new(),
            designations: Vec::new(),
            role_permissions: default_role_permissions(),
        }
    }
}

/// Campus records. Password hashes are kept apart from [`User`] so they can
/// never be serialized with it.
#[derive(Debug, Default)]
pub struct Records {
    pub users: Vec<User>,
    pub password_hashes: HashMap<UserId, String>,
    pub attendance: Vec<AttendanceEntry>,
    pub leave_requests: Vec<LeaveRequest>,
    pub shifts: Vec<Shift>,
    pub assignments: Vec<ShiftAssignment>,
    pub shift_requests: Vec<ShiftChangeRequest>,
    pub notices: Vec<Notice>,
}

impl Records {
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.username.as_deref() == Some(username))
    }

    /// Whether any user is attached to `department` as department,
    /// sub-department or school.
    pub fn has_members(&self, department: &DepartmentId) -> bool {
        self.users.iter().any(|user| {
            [&user.department_id, &user.sub_department_id, &user.school_id]
                .into_iter()
                .any(|assigned| assigned.as_ref() == Some(department))
        })
    }
}

#[derive(Debug)]
pub struct Store {
    org: ArcSwap<OrgSnapshot>,
    settings: ArcSwap<Settings>,
    org_writer: Mutex<()>,
    settings_writer: Mutex<()>,
    records: RwLock<Records>,
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig, org: OrgSnapshot, settings: Settings, records: Records) -> Self {
        Self {
            org: ArcSwap::from_pointee(org),
            settings: ArcSwap::from_pointee(settings),
            org_writer: Mutex::new(()),
            settings_writer: Mutex::new(()),
            records: RwLock::new(records),
            config,
        }
    }

    /// A store holding the demo tenant.
    pub fn seeded(config: StoreConfig) -> anyhow::Result<Self> {
        let (org, settings, records) = seed::demo_tenant(config.password_hash_cost)?;
        Ok(Self::new(config, org, settings, records))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The current org snapshot. Hold on to it for the rest of the request.
    pub fn org(&self) -> Arc<OrgSnapshot> {
        self.org.load_full()
    }

    pub fn settings(&self) -> Arc<Settings> {
        self.settings.load_full()
    }

    /// Applies `edit` to a copy of the org snapshot and publishes it if the
    /// edit succeeds. Concurrent writers are serialized; readers keep
    /// whichever version they already loaded.
    pub async fn update_org<T, F>(&self, edit: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut OrgSnapshot) -> Result<T, AppError>,
    {
        self.simulate_latency().await;
        let _guard = self.org_writer.lock().await;

        let current = self.org.load_full();
        let mut next = (*current).clone();
        let output = edit(&mut next)?;
        next.version = current.version + 1;
        tracing::debug!(version = next.version, "Publishing org snapshot");
        self.org.store(Arc::new(next));

        Ok(output)
    }

    pub async fn update_settings<T, F>(&self, edit: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Settings) -> Result<T, AppError>,
    {
        self.simulate_latency().await;
        let _guard = self.settings_writer.lock().await;

        let mut next = (*self.settings.load_full()).clone();
        let output = edit(&mut next)?;
        self.settings.store(Arc::new(next));

        Ok(output)
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.simulate_latency().await;
        self.records.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.simulate_latency().await;
        self.records.write().await
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }
}
