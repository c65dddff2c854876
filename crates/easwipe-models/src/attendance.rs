//! Attendance records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{AttendanceId, DepartmentId, UserId};
use crate::scoped::Scoped;

/// How an entry was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceType {
    #[serde(rename = "SELF")]
    SelfMarked,
    Manual,
    Gate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceEntry {
    pub id: AttendanceId,
    pub user_id: UserId,
    pub user_name: String,
    /// Department of the user at the time of marking.
    pub department_id: Option<DepartmentId>,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: AttendanceType,
    pub status: AttendanceStatus,
    pub marked_by: UserId,
}

impl Scoped for AttendanceEntry {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }

    fn department_id(&self) -> Option<&DepartmentId> {
        self.department_id.as_ref()
    }
}

/// Marks attendance. Without `user_id` the caller marks themselves.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct MarkAttendanceDto {
    pub user_id: Option<UserId>,
    pub status: AttendanceStatus,
    #[serde(rename = "type")]
    pub kind: Option<AttendanceType>,
}
