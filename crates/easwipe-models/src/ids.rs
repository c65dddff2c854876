//! Strongly-typed ID newtypes for domain entities.
//!
//! Identifiers are opaque strings (`"d1"`, `"u_rp"`, `"l-3f2a..."`). Each entity
//! gets its own newtype so a `UserId` cannot be passed where a `DepartmentId`
//! is expected.
//!
//! # Example
//!
//! ```ignore
//! use easwipe_models::ids::{DepartmentId, UserId};
//!
//! let dept = DepartmentId::from("d1");
//! let fresh = UserId::generate();
//! assert!(fresh.as_str().starts_with("u-"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Macro to define a strongly-typed string ID newtype.
///
/// `$prefix` is prepended to freshly generated ids so they stay recognisable
/// next to the hand-written seed ids.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID.
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::new_v4().simple()))
            }

            /// Borrow the raw identifier.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Get the inner string value.
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for User entities.
    UserId, "u"
);

define_id!(
    /// Strongly-typed ID for Department entities. Schools are departments too.
    DepartmentId, "d"
);

define_id!(
    /// Strongly-typed ID for Designation entities.
    DesignationId, "des"
);

define_id!(
    /// Strongly-typed ID for attendance entries.
    AttendanceId, "a"
);

define_id!(
    /// Strongly-typed ID for leave requests.
    LeaveRequestId, "l"
);

define_id!(
    /// Strongly-typed ID for Shift definitions.
    ShiftId, "sh"
);

define_id!(
    /// Strongly-typed ID for roster assignments.
    ShiftAssignmentId, "sa"
);

define_id!(
    /// Strongly-typed ID for shift change requests.
    ShiftRequestId, "sr"
);

define_id!(
    /// Strongly-typed ID for notices.
    NoticeId, "n"
);
