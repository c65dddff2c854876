//! # eaSwipe Models
//!
//! Domain models and DTOs for the eaSwipe campus API.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed string identifiers
//! - [`users`]: Users, system roles and the requesting [`Principal`]
//! - [`departments`]: The department tree and designations
//! - [`roles`]: Permission sets and the role permission table
//! - [`attendance`], [`leave`], [`shifts`], [`notices`]: Campus records
//! - [`settings`]: Administrator-editable organisation settings
//! - [`dashboard`]: Scoped dashboard summary
//! - [`scoped`]: The [`Scoped`] trait shared by every record the access layer filters
//!
//! # Example
//!
//! ```ignore
//! use easwipe_models::{Department, DepartmentId, Principal, Role};
//!
//! let principal = Principal::new(UserId::from("u_rp"), Role::ResourcePerson)
//!     .with_department(DepartmentId::from("d1"));
//! ```

pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod departments;
pub mod ids;
pub mod leave;
pub mod notices;
pub mod roles;
pub mod scoped;
pub mod settings;
pub mod shifts;
pub mod users;

pub use attendance::{AttendanceEntry, AttendanceStatus, AttendanceType, MarkAttendanceDto};
pub use auth::{ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse};
pub use dashboard::{DashboardSummary, RoleCount, ShiftMetrics};
pub use departments::{
    ClosureResponse, Department, Designation, SaveDepartmentDto, SaveDesignationDto,
};
pub use ids::{
    AttendanceId, DepartmentId, DesignationId, LeaveRequestId, NoticeId, ShiftAssignmentId,
    ShiftId, ShiftRequestId, UserId,
};
pub use leave::{
    ApplyLeaveDto, DecisionDto, LeaveBalance, LeaveRequest, LeaveType, RequestStatus,
};
pub use notices::{CreateNoticeDto, Notice, NoticeType};
pub use roles::{AppPermission, Permission, RolePermissionConfig, default_role_permissions};
pub use scoped::Scoped;
pub use settings::{AppConfig, EmailConfig, IdFieldConfig, SecurityConfig, Settings};
pub use shifts::{
    AssignShiftDto, CreateShiftDto, CreateShiftRequestDto, Shift, ShiftAssignment,
    ShiftChangeRequest,
};
pub use users::{
    CreateUserDto, IdCard, Principal, ProfileResponse, Role, UpdateUserDto, User,
};
