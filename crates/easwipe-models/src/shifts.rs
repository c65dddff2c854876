//! Shifts, the roster and shift-change requests.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::ids::{DepartmentId, ShiftAssignmentId, ShiftId, ShiftRequestId, UserId};
use crate::leave::RequestStatus;
use crate::scoped::Scoped;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Shift {
    pub id: ShiftId,
    pub name: String,
    #[schema(value_type = String, example = "08:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "14:00:00")]
    pub end_time: NaiveTime,
    pub color: String,
}

/// One user's shift on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShiftAssignment {
    pub id: ShiftAssignmentId,
    pub shift_id: ShiftId,
    pub user_id: UserId,
    pub user_name: String,
    pub department_id: Option<DepartmentId>,
    pub date: NaiveDate,
}

impl Scoped for ShiftAssignment {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }

    fn department_id(&self) -> Option<&DepartmentId> {
        self.department_id.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShiftChangeRequest {
    pub id: ShiftRequestId,
    pub user_id: UserId,
    pub user_name: String,
    pub department_id: Option<DepartmentId>,
    pub current_shift: String,
    pub requested_shift: String,
    pub date: NaiveDate,
    pub reason: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub decided_by: Option<UserId>,
}

impl Scoped for ShiftChangeRequest {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }

    fn department_id(&self) -> Option<&DepartmentId> {
        self.department_id.as_ref()
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_shift_window"))]
pub struct CreateShiftDto {
    #[validate(length(min = 1, max = 80, message = "Name must be between 1 and 80 characters"))]
    pub name: String,
    #[schema(value_type = String, example = "08:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "14:00:00")]
    pub end_time: NaiveTime,
    #[validate(length(min = 1, max = 32))]
    pub color: String,
}

fn validate_shift_window(dto: &CreateShiftDto) -> Result<(), ValidationError> {
    if dto.start_time == dto.end_time {
        let mut error = ValidationError::new("shift_window");
        error.message = Some("Shift must not start and end at the same time".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AssignShiftDto {
    pub shift_id: ShiftId,
    pub user_id: UserId,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateShiftRequestDto {
    #[validate(length(min = 1, max = 80))]
    pub current_shift: String,
    #[validate(length(min = 1, max = 80))]
    pub requested_shift: String,
    pub date: NaiveDate,
    #[validate(length(min = 1, max = 1000, message = "Reason is required"))]
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_window_must_not_be_empty() {
        let time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let dto = CreateShiftDto {
            name: "Broken".to_string(),
            start_time: time,
            end_time: time,
            color: "#000000".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_shift_times_parse_from_hh_mm_ss() {
        let shift: Shift = serde_json::from_str(
            r##"{"id":"sh1","name":"Morning Shift","start_time":"08:00:00","end_time":"14:00:00","color":"#4f46e5"}"##,
        )
        .unwrap();
        assert_eq!(shift.start_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }
}
