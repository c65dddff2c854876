//! Role-scoped visibility.
//!
//! One rule covers every listing (users, attendance, leave, shift requests,
//! roster): administrators see everything, a resource person sees their
//! department closure, and everyone else sees only their own records.
//! Unknown roles and resource persons without a department fall back to
//! self-only.

use std::collections::HashSet;

use easwipe_models::{Department, DepartmentId, Principal, Role, Scoped, UserId};

use crate::hierarchy::resolve_department_closure;

/// The set of records a principal may see, computed once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityScope {
    /// Every record.
    All,
    /// Records filed under one of these departments. Records without a
    /// department never match.
    Departments(HashSet<DepartmentId>),
    /// Records owned by this user.
    Owner(UserId),
}

impl VisibilityScope {
    /// The listing scope for `principal`. `None` is the system context.
    pub fn for_principal(principal: Option<&Principal>, departments: &[Department]) -> Self {
        let Some(principal) = principal else {
            return VisibilityScope::All;
        };

        match (principal.role, principal.department_id.as_ref()) {
            (Role::Admin, _) => VisibilityScope::All,
            (Role::ResourcePerson, Some(department)) => {
                VisibilityScope::Departments(resolve_department_closure(department, departments))
            }
            _ => VisibilityScope::Owner(principal.id.clone()),
        }
    }

    /// The scope a principal acts on behalf of others in: deciding requests
    /// and managing users. Administrators reach everything, anyone with a
    /// department reaches its closure, and anyone else reaches nobody.
    pub fn delegated(principal: &Principal, departments: &[Department]) -> Self {
        if principal.is_admin() {
            return VisibilityScope::All;
        }
        match &principal.department_id {
            Some(department) => {
                VisibilityScope::Departments(resolve_department_closure(department, departments))
            }
            None => VisibilityScope::Departments(HashSet::new()),
        }
    }

    pub fn permits<T: Scoped + ?Sized>(&self, record: &T) -> bool {
        match self {
            VisibilityScope::All => true,
            VisibilityScope::Departments(closure) => record
                .department_id()
                .is_some_and(|department| closure.contains(department)),
            VisibilityScope::Owner(owner) => record.owner_id() == owner,
        }
    }

    /// Whether a department id falls inside the scope. Owner scopes contain
    /// no departments.
    pub fn covers_department(&self, department: Option<&DepartmentId>) -> bool {
        match self {
            VisibilityScope::All => true,
            VisibilityScope::Departments(closure) => {
                department.is_some_and(|department| closure.contains(department))
            }
            VisibilityScope::Owner(_) => false,
        }
    }

    pub fn apply<T: Scoped + Clone>(&self, records: &[T]) -> Vec<T> {
        records
            .iter()
            .filter(|record| self.permits(*record))
            .cloned()
            .collect()
    }
}

/// The subset of `records` visible to `principal`, in their original order.
pub fn filter_visible<T: Scoped + Clone>(
    principal: Option<&Principal>,
    records: &[T],
    departments: &[Department],
) -> Vec<T> {
    VisibilityScope::for_principal(principal, departments).apply(records)
}
