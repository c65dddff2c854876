use chrono::Utc;
use tracing::{info, instrument};

use easwipe_access::{VisibilityScope, filter_visible, require_permission};
use easwipe_core::{AppError, permissions};
use easwipe_models::{
    AttendanceEntry, AttendanceId, AttendanceType, MarkAttendanceDto, Principal,
};

use crate::store::Store;

pub struct AttendanceService;

impl AttendanceService {
    /// Visible entries, newest first.
    #[instrument(skip(store))]
    pub async fn get_attendance(
        store: &Store,
        principal: &Principal,
    ) -> Result<Vec<AttendanceEntry>, AppError> {
        let org = store.org();
        let records = store.read().await;
        let mut entries = filter_visible(Some(principal), &records.attendance, &org.departments);
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    /// Marks the caller, or with `mark_attendance` any user in the caller's
    /// department closure. Entries are filed under the marked user's
    /// department.
    #[instrument(skip(store, dto))]
    pub async fn mark_attendance(
        store: &Store,
        principal: &Principal,
        dto: MarkAttendanceDto,
    ) -> Result<AttendanceEntry, AppError> {
        let org = store.org();
        let target_id = dto.user_id.unwrap_or_else(|| principal.id.clone());
        let for_self = target_id == principal.id;

        let kind = if for_self {
            dto.kind.unwrap_or(AttendanceType::SelfMarked)
        } else {
            require_permission(principal, &org.role_permissions, permissions::MARK_ATTENDANCE)?;
            match dto.kind {
                Some(AttendanceType::SelfMarked) => {
                    return Err(AppError::bad_request(anyhow::anyhow!(
                        "SELF entries can only be recorded by the user themselves"
                    )));
                }
                Some(kind) => kind,
                None => AttendanceType::Manual,
            }
        };

        let mut records = store.write().await;
        let target = records
            .user(&target_id)
            .filter(|user| {
                for_self || VisibilityScope::delegated(principal, &org.departments).permits(*user)
            })
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        let entry = AttendanceEntry {
            id: AttendanceId::generate(),
            user_id: target.id.clone(),
            user_name: target.name.clone(),
            department_id: target.department_id.clone(),
            timestamp: Utc::now(),
            kind,
            status: dto.status,
            marked_by: principal.id.clone(),
        };
        records.attendance.push(entry.clone());

        info!(user_id = %entry.user_id, marked_by = %principal.id, status = ?entry.status, "Attendance marked");
        Ok(entry)
    }
}
