//! # eaSwipe Access
//!
//! The authorization core of the campus API. Every service asks this crate
//! which records a principal may see and which actions it may take, instead
//! of branching on roles itself.
//!
//! - [`hierarchy`]: Department closure and tree integrity checks
//! - [`filter`]: Role-scoped visibility over any [`Scoped`](easwipe_models::Scoped) record
//! - [`policy`]: Permission table lookups and role gates
//! - [`approval`]: Who may decide pending leave and shift-swap requests
//!
//! All functions are pure and synchronous. Callers pass one consistent
//! snapshot of the department list per request.
//!
//! # Example
//!
//! ```ignore
//! use easwipe_access::{filter_visible, resolve_department_closure};
//!
//! let scope = resolve_department_closure(&DepartmentId::from("d1"), &departments);
//! let visible = filter_visible(Some(&principal), &leave_requests, &departments);
//! ```

pub mod approval;
pub mod filter;
pub mod hierarchy;
pub mod policy;

mod errors;

pub use approval::{
    ApprovalDenied, ApprovalKind, Decidable, authorize_decision, can_approve, pending_approvals,
};
pub use filter::{VisibilityScope, filter_visible};
pub use hierarchy::{
    DepartmentTree, HierarchyError, audit_departments, check_parent_assignment,
    dependent_children, ensure_deletable, resolve_department_closure,
};
pub use policy::{
    can_administer, can_manage_users, effective_permission_keys, has_permission, outranks,
    require_permission, role_rank,
};
