//! Who may decide pending leave and shift-swap requests.
//!
//! Approvals are gated by role and by the approver's delegated scope
//! (see [`VisibilityScope::delegated`]). Nobody decides their own request.

use easwipe_models::{
    Department, LeaveRequest, Principal, RequestStatus, Role, Scoped, ShiftChangeRequest,
};
use thiserror::Error;

use crate::filter::VisibilityScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalKind {
    Leave,
    ShiftSwap,
}

impl ApprovalKind {
    pub fn approver_roles(&self) -> &'static [Role] {
        match self {
            ApprovalKind::Leave => &[Role::Admin, Role::Teacher, Role::ResourcePerson],
            ApprovalKind::ShiftSwap => &[Role::Admin, Role::ResourcePerson],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalKind::Leave => "leave",
            ApprovalKind::ShiftSwap => "shift_swap",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApprovalDenied {
    #[error("Role {role} cannot decide {kind} requests")]
    RoleNotAllowed { role: Role, kind: &'static str },

    #[error("You cannot decide your own request")]
    OwnRequest,

    #[error("Request is outside your approval scope")]
    OutOfScope,

    #[error("Request has already been decided")]
    NotPending,
}

/// A request with an approval workflow.
pub trait Decidable: Scoped {
    fn status(&self) -> RequestStatus;
}

impl Decidable for LeaveRequest {
    fn status(&self) -> RequestStatus {
        self.status
    }
}

impl Decidable for ShiftChangeRequest {
    fn status(&self) -> RequestStatus {
        self.status
    }
}

pub fn can_approve(kind: ApprovalKind, role: Role) -> bool {
    kind.approver_roles().contains(&role)
}

/// Pending requests `principal` may decide, never including their own.
/// Empty for roles that cannot approve `kind`.
pub fn pending_approvals<T: Decidable + Clone>(
    kind: ApprovalKind,
    principal: &Principal,
    requests: &[T],
    departments: &[Department],
) -> Vec<T> {
    if !can_approve(kind, principal.role) {
        return Vec::new();
    }

    let scope = VisibilityScope::delegated(principal, departments);
    requests
        .iter()
        .filter(|request| request.status() == RequestStatus::Pending)
        .filter(|request| request.owner_id() != &principal.id)
        .filter(|request| scope.permits(*request))
        .cloned()
        .collect()
}

/// Checks that `principal` may approve or reject `request`.
pub fn authorize_decision<T: Decidable>(
    kind: ApprovalKind,
    principal: &Principal,
    request: &T,
    departments: &[Department],
) -> Result<(), ApprovalDenied> {
    if !can_approve(kind, principal.role) {
        return Err(ApprovalDenied::RoleNotAllowed {
            role: principal.role,
            kind: kind.as_str(),
        });
    }

    if request.owner_id() == &principal.id {
        return Err(ApprovalDenied::OwnRequest);
    }

    if !VisibilityScope::delegated(principal, departments).permits(request) {
        return Err(ApprovalDenied::OutOfScope);
    }

    if request.status() != RequestStatus::Pending {
        return Err(ApprovalDenied::NotPending);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use easwipe_models::{DepartmentId, LeaveRequestId, LeaveType, ShiftRequestId, UserId};

    fn departments() -> Vec<Department> {
        vec![
            Department::new("d1", "Primary Education"),
            Department::new("s1", "St. Mary High School").with_parent("d1"),
            Department::new("d2", "Secondary"),
        ]
    }

    fn leave(id: &str, user: &str, department: Option<&str>, status: RequestStatus) -> LeaveRequest {
        let day = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        LeaveRequest {
            id: LeaveRequestId::from(id),
            user_id: UserId::from(user),
            user_name: user.to_string(),
            department_id: department.map(DepartmentId::from),
            leave_type: LeaveType::Casual,
            start_date: day,
            end_date: day,
            reason: "Personal".to_string(),
            status,
            applied_at: Utc::now(),
            decided_by: None,
        }
    }

    fn swap(id: &str, user: &str, department: &str) -> ShiftChangeRequest {
        ShiftChangeRequest {
            id: ShiftRequestId::from(id),
            user_id: UserId::from(user),
            user_name: user.to_string(),
            department_id: Some(DepartmentId::from(department)),
            current_shift: "Morning Shift".to_string(),
            requested_shift: "Evening Shift".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
            reason: "Appointment".to_string(),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
            decided_by: None,
        }
    }

    fn requests() -> Vec<LeaveRequest> {
        vec![
            leave("l1", "u_rp", Some("d1"), RequestStatus::Pending),
            leave("l2", "u2", Some("s1"), RequestStatus::Pending),
            leave("l3", "u5", Some("d2"), RequestStatus::Pending),
            leave("l4", "u6", Some("s1"), RequestStatus::Approved),
            leave("l5", "u7", None, RequestStatus::Pending),
        ]
    }

    fn ids(requests: &[LeaveRequest]) -> Vec<&str> {
        requests.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_own_request_never_in_approvals() {
        let all = requests();
        for principal in [
            Principal::new("u_rp", Role::Admin),
            Principal::new("u_rp", Role::ResourcePerson).with_department("d1"),
            Principal::new("u_rp", Role::Teacher).with_department("d1"),
        ] {
            let pending = pending_approvals(ApprovalKind::Leave, &principal, &all, &departments());
            assert!(pending.iter().all(|r| r.user_id != principal.id));
        }
    }

    #[test]
    fn test_admin_sees_all_pending_except_own() {
        let admin = Principal::new("u_rp", Role::Admin);
        let pending = pending_approvals(ApprovalKind::Leave, &admin, &requests(), &departments());
        assert_eq!(ids(&pending), vec!["l2", "l3", "l5"]);
    }

    #[test]
    fn test_resource_person_approvals_follow_closure() {
        let rp = Principal::new("u_rp", Role::ResourcePerson).with_department("d1");
        let pending = pending_approvals(ApprovalKind::Leave, &rp, &requests(), &departments());
        assert_eq!(ids(&pending), vec!["l2"]);
    }

    #[test]
    fn test_teacher_approvals_follow_own_department() {
        let teacher = Principal::new("u9", Role::Teacher).with_department("s1");
        let pending = pending_approvals(ApprovalKind::Leave, &teacher, &requests(), &departments());
        assert_eq!(ids(&pending), vec!["l2"]);

        let detached = Principal::new("u9", Role::Teacher);
        assert!(pending_approvals(ApprovalKind::Leave, &detached, &requests(), &departments()).is_empty());
    }

    #[test]
    fn test_non_approver_roles_get_nothing() {
        for role in [Role::School, Role::Student, Role::Parent, Role::Unrecognized] {
            let principal = Principal::new("u9", role).with_department("d1");
            assert!(
                pending_approvals(ApprovalKind::Leave, &principal, &requests(), &departments())
                    .is_empty()
            );
        }
        let teacher = Principal::new("u9", Role::Teacher).with_department("d1");
        let swaps = vec![swap("sr1", "u2", "s1")];
        assert!(pending_approvals(ApprovalKind::ShiftSwap, &teacher, &swaps, &departments()).is_empty());
    }

    #[test]
    fn test_shift_swap_approvals() {
        let rp = Principal::new("u_rp", Role::ResourcePerson).with_department("d1");
        let swaps = vec![swap("sr1", "u2", "s1"), swap("sr2", "u_rp", "d1"), swap("sr3", "u5", "d2")];
        let pending = pending_approvals(ApprovalKind::ShiftSwap, &rp, &swaps, &departments());
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id.as_str(), "sr1");
    }

    #[test]
    fn test_authorize_decision_outcomes() {
        let depts = departments();
        let all = requests();
        let rp = Principal::new("u_rp", Role::ResourcePerson).with_department("d1");

        assert_eq!(authorize_decision(ApprovalKind::Leave, &rp, &all[1], &depts), Ok(()));
        assert_eq!(
            authorize_decision(ApprovalKind::Leave, &rp, &all[0], &depts),
            Err(ApprovalDenied::OwnRequest)
        );
        assert_eq!(
            authorize_decision(ApprovalKind::Leave, &rp, &all[2], &depts),
            Err(ApprovalDenied::OutOfScope)
        );
        assert_eq!(
            authorize_decision(ApprovalKind::Leave, &rp, &all[3], &depts),
            Err(ApprovalDenied::NotPending)
        );

        let student = Principal::new("u8", Role::Student).with_department("d1");
        assert_eq!(
            authorize_decision(ApprovalKind::Leave, &student, &all[1], &depts),
            Err(ApprovalDenied::RoleNotAllowed {
                role: Role::Student,
                kind: "leave"
            })
        );
    }

    #[test]
    fn test_admin_cannot_decide_own_request() {
        let admin = Principal::new("u1", Role::Admin);
        let own = leave("l9", "u1", None, RequestStatus::Pending);
        assert_eq!(
            authorize_decision(ApprovalKind::Leave, &admin, &own, &departments()),
            Err(ApprovalDenied::OwnRequest)
        );
    }
}
