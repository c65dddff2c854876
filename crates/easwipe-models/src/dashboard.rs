use serde::Serialize;
use utoipa::ToSchema;

use crate::users::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RoleCount {
    pub role: Role,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShiftMetrics {
    pub shifts: usize,
    pub assignments_today: usize,
    pub pending_requests: usize,
}

/// Counts over the records visible to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub total_users: usize,
    pub users_by_role: Vec<RoleCount>,
    pub present_today: usize,
    pub late_today: usize,
    pub pending_leave: usize,
    pub pending_approvals: usize,
    pub unread_notices: usize,
    pub shifts: ShiftMetrics,
}
