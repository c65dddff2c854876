//! Leave requests and balances.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::ids::{DepartmentId, LeaveRequestId, UserId};
use crate::scoped::Scoped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    Casual,
    Sick,
    Earned,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Casual, LeaveType::Sick, LeaveType::Earned];

    /// Days granted per year.
    pub fn annual_allowance(&self) -> u32 {
        match self {
            LeaveType::Casual => 12,
            LeaveType::Sick => 10,
            LeaveType::Earned => 15,
        }
    }
}

/// Status shared by leave and shift-change requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    pub id: LeaveRequestId,
    pub user_id: UserId,
    pub user_name: String,
    pub department_id: Option<DepartmentId>,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: RequestStatus,
    pub applied_at: DateTime<Utc>,
    pub decided_by: Option<UserId>,
}

impl LeaveRequest {
    /// Inclusive number of calendar days covered.
    pub fn days(&self) -> u32 {
        let span = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(span).unwrap_or(0)
    }
}

impl Scoped for LeaveRequest {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }

    fn department_id(&self) -> Option<&DepartmentId> {
        self.department_id.as_ref()
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_leave_dates"))]
pub struct ApplyLeaveDto {
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(length(min = 1, max = 1000, message = "Reason is required"))]
    pub reason: String,
}

fn validate_leave_dates(dto: &ApplyLeaveDto) -> Result<(), ValidationError> {
    if dto.end_date < dto.start_date {
        let mut error = ValidationError::new("date_range");
        error.message = Some("End date must not precede start date".into());
        return Err(error);
    }
    Ok(())
}

/// Approve or reject a pending request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DecisionDto {
    pub status: RequestStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LeaveBalance {
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub total: u32,
    pub used: u32,
}
