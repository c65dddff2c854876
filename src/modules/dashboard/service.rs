use chrono::{NaiveDate, Utc};
use tracing::instrument;

use easwipe_access::{ApprovalKind, VisibilityScope, pending_approvals};
use easwipe_core::AppError;
use easwipe_models::{
    AttendanceStatus, DashboardSummary, Principal, RequestStatus, Role, RoleCount, ShiftMetrics,
};

use crate::store::Store;

pub struct DashboardService;

impl DashboardService {
    /// Counts over the records the caller can see, for the current UTC day.
    #[instrument(skip(store))]
    pub async fn get_summary(
        store: &Store,
        principal: &Principal,
    ) -> Result<DashboardSummary, AppError> {
        Self::summary_for_day(store, principal, Utc::now().date_naive()).await
    }

    pub async fn summary_for_day(
        store: &Store,
        principal: &Principal,
        today: NaiveDate,
    ) -> Result<DashboardSummary, AppError> {
        let org = store.org();
        let scope = VisibilityScope::for_principal(Some(principal), &org.departments);
        let records = store.read().await;

        let users = scope.apply(&records.users);
        let users_by_role = Role::ALL
            .into_iter()
            .map(|role| RoleCount {
                role,
                count: users.iter().filter(|u| u.role == role).count(),
            })
            .collect();

        let attendance_today = |status: AttendanceStatus| {
            records
                .attendance
                .iter()
                .filter(|e| scope.permits(*e))
                .filter(|e| e.timestamp.date_naive() == today && e.status == status)
                .count()
        };

        let pending_leave = records
            .leave_requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending && scope.permits(*r))
            .count();

        let pending_approvals = pending_approvals(
            ApprovalKind::Leave,
            principal,
            &records.leave_requests,
            &org.departments,
        )
        .len()
            + pending_approvals(
                ApprovalKind::ShiftSwap,
                principal,
                &records.shift_requests,
                &org.departments,
            )
            .len();

        let unread_notices = records
            .notices
            .iter()
            .filter(|n| !n.read_by.contains(&principal.id))
            .count();

        let shifts = ShiftMetrics {
            shifts: records.shifts.len(),
            assignments_today: records
                .assignments
                .iter()
                .filter(|a| a.date == today && scope.permits(*a))
                .count(),
            pending_requests: records
                .shift_requests
                .iter()
                .filter(|r| r.status == RequestStatus::Pending && scope.permits(*r))
                .count(),
        };

        Ok(DashboardSummary {
            total_users: users.len(),
            users_by_role,
            present_today: attendance_today(AttendanceStatus::Present),
            late_today: attendance_today(AttendanceStatus::Late),
            pending_leave,
            pending_approvals,
            unread_notices,
            shifts,
        })
    }
}
