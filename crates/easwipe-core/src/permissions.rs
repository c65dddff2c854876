//! Permission key constants for the eaSwipe API.
//!
//! Role permission tables store these keys; the access layer compares against
//! them instead of string literals scattered through the services.
//!
//! # Example
//!
//! ```ignore
//! use easwipe_core::permissions;
//! use easwipe_access::has_permission;
//!
//! if has_permission(principal.role, &snapshot.role_permissions, permissions::POST_NOTICE) {
//!     // Post the notice
//! }
//! ```

/// Wire form of the wildcard permission that grants every key.
pub const WILDCARD: &str = "all";

// =============================================================================
// Attendance permissions
// =============================================================================

/// Permission to view attendance records
pub const VIEW_ATTENDANCE: &str = "view_attendance";
/// Permission to mark attendance on behalf of other users
pub const MARK_ATTENDANCE: &str = "mark_attendance";

// =============================================================================
// Leave permissions
// =============================================================================

/// Permission to approve or reject leave requests
pub const APPROVE_LEAVE: &str = "approve_leave";
/// Permission to apply for leave
pub const APPLY_LEAVE: &str = "apply_leave";

// =============================================================================
// Shift permissions
// =============================================================================

/// Permission to define shifts and assign the roster
pub const MANAGE_SHIFTS: &str = "manage_shifts";

// =============================================================================
// Notice board permissions
// =============================================================================

/// Permission to post notices
pub const POST_NOTICE: &str = "post_notice";

// =============================================================================
// Reports permissions
// =============================================================================

/// Permission to view analytics
pub const VIEW_REPORTS: &str = "view_reports";

// =============================================================================
// Smart ID permissions
// =============================================================================

/// Permission to view one's own ID card
pub const VIEW_SELF_ID: &str = "view_self_id";
