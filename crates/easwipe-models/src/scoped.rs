use crate::ids::{DepartmentId, UserId};

/// A record the access layer can filter: it belongs to a user and, usually,
/// to a department in the org tree.
pub trait Scoped {
    /// The user who owns the record. For the user directory this is the user itself.
    fn owner_id(&self) -> &UserId;

    /// The department the record is filed under, if any.
    fn department_id(&self) -> Option<&DepartmentId>;
}

impl<T: Scoped + ?Sized> Scoped for &T {
    fn owner_id(&self) -> &UserId {
        (**self).owner_id()
    }

    fn department_id(&self) -> Option<&DepartmentId> {
        (**self).department_id()
    }
}
