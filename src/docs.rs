use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use easwipe_models::{
    AppConfig, AppPermission, ApplyLeaveDto, AssignShiftDto, AttendanceEntry, AttendanceStatus,
    AttendanceType, ClosureResponse, CreateNoticeDto, CreateShiftDto, CreateShiftRequestDto,
    CreateUserDto, DashboardSummary, DecisionDto, Department, Designation, EmailConfig,
    ForgotPasswordRequest, IdCard, IdFieldConfig, LeaveBalance, LeaveRequest, LeaveType,
    LoginRequest, LoginResponse, MarkAttendanceDto, MessageResponse, Notice, NoticeType,
    ProfileResponse, RequestStatus, Role, RoleCount, RolePermissionConfig, SaveDepartmentDto,
    SaveDesignationDto, SecurityConfig, Shift, ShiftAssignment, ShiftChangeRequest, ShiftMetrics,
    UpdateUserDto, User,
};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::forgot_password,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::departments::controller::get_departments,
        crate::modules::departments::controller::create_department,
        crate::modules::departments::controller::update_department,
        crate::modules::departments::controller::delete_department,
        crate::modules::departments::controller::get_department_closure,
        crate::modules::designations::controller::get_designations,
        crate::modules::designations::controller::create_designation,
        crate::modules::designations::controller::update_designation,
        crate::modules::designations::controller::delete_designation,
        crate::modules::attendance::controller::get_attendance,
        crate::modules::attendance::controller::mark_attendance,
        crate::modules::leave::controller::get_leave_requests,
        crate::modules::leave::controller::get_my_leave_requests,
        crate::modules::leave::controller::get_leave_approvals,
        crate::modules::leave::controller::apply_leave,
        crate::modules::leave::controller::decide_leave,
        crate::modules::leave::controller::get_leave_balances,
        crate::modules::shifts::controller::get_shifts,
        crate::modules::shifts::controller::create_shift,
        crate::modules::shifts::controller::get_roster,
        crate::modules::shifts::controller::assign_shift,
        crate::modules::shifts::controller::get_shift_requests,
        crate::modules::shifts::controller::get_shift_request_approvals,
        crate::modules::shifts::controller::create_shift_request,
        crate::modules::shifts::controller::decide_shift_request,
        crate::modules::notices::controller::get_notices,
        crate::modules::notices::controller::create_notice,
        crate::modules::notices::controller::mark_notice_read,
        crate::modules::settings::controller::get_role_permissions,
        crate::modules::settings::controller::update_role_permissions,
        crate::modules::settings::controller::get_permission_catalogue,
        crate::modules::settings::controller::get_app_config,
        crate::modules::settings::controller::update_app_config,
        crate::modules::settings::controller::get_email_config,
        crate::modules::settings::controller::update_email_config,
        crate::modules::settings::controller::get_security_config,
        crate::modules::settings::controller::update_security_config,
        crate::modules::settings::controller::get_id_card_config,
        crate::modules::settings::controller::update_id_card_config,
        crate::modules::dashboard::controller::get_dashboard,
        crate::modules::public::controller::get_id_card,
    ),
    components(
        schemas(
            Role,
            User,
            CreateUserDto,
            UpdateUserDto,
            ProfileResponse,
            IdCard,
            LoginRequest,
            LoginResponse,
            ForgotPasswordRequest,
            MessageResponse,
            ErrorResponse,
            Department,
            SaveDepartmentDto,
            ClosureResponse,
            Designation,
            SaveDesignationDto,
            AttendanceEntry,
            AttendanceType,
            AttendanceStatus,
            MarkAttendanceDto,
            LeaveRequest,
            LeaveType,
            RequestStatus,
            ApplyLeaveDto,
            DecisionDto,
            LeaveBalance,
            Shift,
            ShiftAssignment,
            ShiftChangeRequest,
            CreateShiftDto,
            AssignShiftDto,
            CreateShiftRequestDto,
            Notice,
            NoticeType,
            CreateNoticeDto,
            RolePermissionConfig,
            AppPermission,
            AppConfig,
            EmailConfig,
            SecurityConfig,
            IdFieldConfig,
            DashboardSummary,
            RoleCount,
            ShiftMetrics,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and password recovery"),
        (name = "Users", description = "User directory, filtered by role and department"),
        (name = "Departments", description = "The department tree"),
        (name = "Designations", description = "Job titles mapped onto system roles"),
        (name = "Attendance", description = "Attendance marking and history"),
        (name = "Leave", description = "Leave applications and approvals"),
        (name = "Shifts", description = "Shift definitions, roster and swap requests"),
        (name = "Notices", description = "Campus notice board"),
        (name = "Settings", description = "Role permissions and organisation settings"),
        (name = "Dashboard", description = "Scoped summary counts"),
        (name = "Public", description = "Unauthenticated ID card lookup")
    ),
    info(
        title = "eaSwipe API",
        version = "0.1.0",
        description = "Campus administration API: attendance, leave, shifts and notices scoped by a department hierarchy.",
        contact(
            name = "API Support",
            email = "support@easwipe.com"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
