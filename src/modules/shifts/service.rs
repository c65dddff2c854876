//! Shift definitions, the roster and shift swap requests.

use chrono::Utc;
use tracing::{info, instrument};

use easwipe_access::{
    ApprovalKind, VisibilityScope, authorize_decision, filter_visible, pending_approvals,
};
use easwipe_core::AppError;
use easwipe_models::{
    AssignShiftDto, CreateShiftDto, CreateShiftRequestDto, Principal, RequestStatus, Shift,
    ShiftAssignment, ShiftAssignmentId, ShiftChangeRequest, ShiftId, ShiftRequestId,
};
use easwipe_observability::track_approval_decision;

use crate::modules::leave::service::{decision_outcome, ensure_decision};
use crate::store::Store;

pub struct ShiftService;

impl ShiftService {
    #[instrument(skip(store))]
    pub async fn get_shifts(store: &Store) -> Vec<Shift> {
        store.read().await.shifts.clone()
    }

    #[instrument(skip(store, dto), fields(name = %dto.name))]
    pub async fn create_shift(store: &Store, dto: CreateShiftDto) -> Result<Shift, AppError> {
        let mut records = store.write().await;
        if records
            .shifts
            .iter()
            .any(|shift| shift.name.eq_ignore_ascii_case(&dto.name))
        {
            return Err(AppError::conflict(anyhow::anyhow!(
                "A shift named {} already exists",
                dto.name
            )));
        }

        let shift = Shift {
            id: ShiftId::generate(),
            name: dto.name,
            start_time: dto.start_time,
            end_time: dto.end_time,
            color: dto.color,
        };
        records.shifts.push(shift.clone());

        info!(shift_id = %shift.id, "Shift created");
        Ok(shift)
    }

    /// Roster entries visible to the caller, by date.
    #[instrument(skip(store))]
    pub async fn get_roster(
        store: &Store,
        principal: &Principal,
    ) -> Result<Vec<ShiftAssignment>, AppError> {
        let org = store.org();
        let records = store.read().await;
        let mut roster = filter_visible(Some(principal), &records.assignments, &org.departments);
        roster.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(roster)
    }

    /// Puts a user on a shift for a day, replacing any assignment they
    /// already hold for that date.
    #[instrument(skip(store, dto))]
    pub async fn assign_shift(
        store: &Store,
        principal: &Principal,
        dto: AssignShiftDto,
    ) -> Result<ShiftAssignment, AppError> {
        let org = store.org();
        let mut records = store.write().await;

        if !records.shifts.iter().any(|shift| shift.id == dto.shift_id) {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Shift {} does not exist",
                dto.shift_id
            )));
        }

        let scope = VisibilityScope::delegated(principal, &org.departments);
        let user = records
            .user(&dto.user_id)
            .filter(|user| scope.permits(*user))
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        let assignment = ShiftAssignment {
            id: ShiftAssignmentId::generate(),
            shift_id: dto.shift_id,
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            department_id: user.department_id.clone(),
            date: dto.date,
        };

        records
            .assignments
            .retain(|a| !(a.user_id == assignment.user_id && a.date == assignment.date));
        records.assignments.push(assignment.clone());

        info!(
            assignment_id = %assignment.id,
            user_id = %assignment.user_id,
            date = %assignment.date,
            "Shift assigned"
        );
        Ok(assignment)
    }

    #[instrument(skip(store))]
    pub async fn get_shift_requests(
        store: &Store,
        principal: &Principal,
    ) -> Result<Vec<ShiftChangeRequest>, AppError> {
        let org = store.org();
        let records = store.read().await;
        Ok(newest_first(filter_visible(
            Some(principal),
            &records.shift_requests,
            &org.departments,
        )))
    }

    #[instrument(skip(store))]
    pub async fn get_shift_request_approvals(
        store: &Store,
        principal: &Principal,
    ) -> Result<Vec<ShiftChangeRequest>, AppError> {
        let org = store.org();
        let records = store.read().await;
        Ok(newest_first(pending_approvals(
            ApprovalKind::ShiftSwap,
            principal,
            &records.shift_requests,
            &org.departments,
        )))
    }

    #[instrument(skip(store, dto))]
    pub async fn create_shift_request(
        store: &Store,
        principal: &Principal,
        dto: CreateShiftRequestDto,
    ) -> Result<ShiftChangeRequest, AppError> {
        if dto.current_shift == dto.requested_shift {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Requested shift must differ from the current shift"
            )));
        }

        let mut records = store.write().await;
        let requester = records
            .user(&principal.id)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        let request = ShiftChangeRequest {
            id: ShiftRequestId::generate(),
            user_id: requester.id.clone(),
            user_name: requester.name.clone(),
            department_id: requester.department_id.clone(),
            current_shift: dto.current_shift,
            requested_shift: dto.requested_shift,
            date: dto.date,
            reason: dto.reason,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
            decided_by: None,
        };
        records.shift_requests.push(request.clone());

        info!(request_id = %request.id, "Shift change requested");
        Ok(request)
    }

    #[instrument(skip(store))]
    pub async fn decide_shift_request(
        store: &Store,
        principal: &Principal,
        id: &ShiftRequestId,
        status: RequestStatus,
    ) -> Result<ShiftChangeRequest, AppError> {
        ensure_decision(status)?;

        let org = store.org();
        let mut records = store.write().await;
        let request = records
            .shift_requests
            .iter_mut()
            .find(|request| &request.id == id)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Shift request not found")))?;

        authorize_decision(ApprovalKind::ShiftSwap, principal, &*request, &org.departments)?;

        request.status = status;
        request.decided_by = Some(principal.id.clone());
        let request = request.clone();
        drop(records);

        let outcome = decision_outcome(status);
        track_approval_decision(ApprovalKind::ShiftSwap.as_str(), outcome);
        info!(request_id = %id, decided_by = %principal.id, outcome, "Shift request decided");
        Ok(request)
    }
}

fn newest_first(mut requests: Vec<ShiftChangeRequest>) -> Vec<ShiftChangeRequest> {
    requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    requests
}
