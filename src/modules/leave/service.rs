//! Leave applications and their approval workflow.

use chrono::Utc;
use tracing::{info, instrument};

use easwipe_access::{ApprovalKind, authorize_decision, filter_visible, pending_approvals};
use easwipe_core::AppError;
use easwipe_models::{
    ApplyLeaveDto, LeaveBalance, LeaveRequest, LeaveRequestId, LeaveType, Principal,
    RequestStatus,
};
use easwipe_observability::track_approval_decision;

use crate::store::Store;

pub struct LeaveService;

impl LeaveService {
    #[instrument(skip(store))]
    pub async fn get_leave_requests(
        store: &Store,
        principal: &Principal,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        let org = store.org();
        let records = store.read().await;
        Ok(newest_first(filter_visible(
            Some(principal),
            &records.leave_requests,
            &org.departments,
        )))
    }

    #[instrument(skip(store))]
    pub async fn get_my_leave_requests(
        store: &Store,
        principal: &Principal,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        let records = store.read().await;
        Ok(newest_first(
            records
                .leave_requests
                .iter()
                .filter(|request| request.user_id == principal.id)
                .cloned()
                .collect(),
        ))
    }

    #[instrument(skip(store))]
    pub async fn get_leave_approvals(
        store: &Store,
        principal: &Principal,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        let org = store.org();
        let records = store.read().await;
        Ok(newest_first(pending_approvals(
            ApprovalKind::Leave,
            principal,
            &records.leave_requests,
            &org.departments,
        )))
    }

    #[instrument(skip(store, dto), fields(leave_type = ?dto.leave_type))]
    pub async fn apply_leave(
        store: &Store,
        principal: &Principal,
        dto: ApplyLeaveDto,
    ) -> Result<LeaveRequest, AppError> {
        let mut records = store.write().await;
        let applicant = records
            .user(&principal.id)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        let request = LeaveRequest {
            id: LeaveRequestId::generate(),
            user_id: applicant.id.clone(),
            user_name: applicant.name.clone(),
            department_id: applicant.department_id.clone(),
            leave_type: dto.leave_type,
            start_date: dto.start_date,
            end_date: dto.end_date,
            reason: dto.reason,
            status: RequestStatus::Pending,
            applied_at: Utc::now(),
            decided_by: None,
        };
        records.leave_requests.push(request.clone());

        info!(request_id = %request.id, days = request.days(), "Leave applied");
        Ok(request)
    }

    #[instrument(skip(store))]
    pub async fn decide_leave(
        store: &Store,
        principal: &Principal,
        id: &LeaveRequestId,
        status: RequestStatus,
    ) -> Result<LeaveRequest, AppError> {
        ensure_decision(status)?;

        let org = store.org();
        let mut records = store.write().await;
        let request = records
            .leave_requests
            .iter_mut()
            .find(|request| &request.id == id)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Leave request not found")))?;

        authorize_decision(ApprovalKind::Leave, principal, &*request, &org.departments)?;

        request.status = status;
        request.decided_by = Some(principal.id.clone());
        let request = request.clone();
        drop(records);

        let outcome = decision_outcome(status);
        track_approval_decision(ApprovalKind::Leave.as_str(), outcome);
        info!(request_id = %id, decided_by = %principal.id, outcome, "Leave request decided");
        Ok(request)
    }

    /// Allowance per leave type against approved days taken.
    #[instrument(skip(store))]
    pub async fn get_leave_balances(
        store: &Store,
        principal: &Principal,
    ) -> Result<Vec<LeaveBalance>, AppError> {
        let records = store.read().await;
        let approved: Vec<&LeaveRequest> = records
            .leave_requests
            .iter()
            .filter(|r| r.user_id == principal.id && r.status == RequestStatus::Approved)
            .collect();

        Ok(LeaveType::ALL
            .into_iter()
            .map(|leave_type| LeaveBalance {
                leave_type,
                total: leave_type.annual_allowance(),
                used: approved
                    .iter()
                    .filter(|r| r.leave_type == leave_type)
                    .map(|r| r.days())
                    .sum(),
            })
            .collect())
    }
}

/// A decision must move a request out of pending.
pub(crate) fn ensure_decision(status: RequestStatus) -> Result<(), AppError> {
    if status == RequestStatus::Pending {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Decision must be approved or rejected"
        )));
    }
    Ok(())
}

pub(crate) fn decision_outcome(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Approved => "approved",
        RequestStatus::Rejected => "rejected",
        RequestStatus::Pending => "pending",
    }
}

fn newest_first(mut requests: Vec<LeaveRequest>) -> Vec<LeaveRequest> {
    requests.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
    requests
}
