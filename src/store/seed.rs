//! The demo tenant every fresh store starts with.

use std::collections::HashMap;

use chrono::{NaiveTime, Utc};

use easwipe_core::hash_password;
use easwipe_models::{
    Department, Designation, DepartmentId, DesignationId, Notice, NoticeId, NoticeType, Role,
    Settings, Shift, ShiftId, User, UserId,
};

use super::{OrgSnapshot, Records};

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "password";

struct DemoUser {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    role: Role,
    avatar: Option<&'static str>,
    username: &'static str,
    department: Option<&'static str>,
    school: Option<&'static str>,
    designation: Option<&'static str>,
}

const DEMO_USERS: [DemoUser; 5] = [
    DemoUser {
        id: "u1",
        name: "Campus Admin",
        email: "admin@easwipe.com",
        role: Role::Admin,
        avatar: Some("https://picsum.photos/100/100?random=1"),
        username: "admin",
        department: None,
        school: None,
        designation: None,
    },
    DemoUser {
        id: "u_rp",
        name: "Mr. Area Manager",
        email: "rp@easwipe.com",
        role: Role::ResourcePerson,
        avatar: Some("https://picsum.photos/100/100?random=10"),
        username: "areamgr",
        department: Some("d1"),
        school: None,
        designation: None,
    },
    DemoUser {
        id: "u_school",
        name: "St. Mary Principal",
        email: "school@easwipe.com",
        role: Role::School,
        avatar: Some("https://picsum.photos/100/100?random=11"),
        username: "stmary",
        department: Some("d1"),
        school: Some("s1"),
        designation: None,
    },
    DemoUser {
        id: "u2",
        name: "Dr. Sarah Wilson",
        email: "teacher@easwipe.com",
        role: Role::Teacher,
        avatar: Some("https://picsum.photos/100/100?random=2"),
        username: "sarahw",
        department: Some("d1"),
        school: Some("s1"),
        designation: Some("des1"),
    },
    DemoUser {
        id: "u_parent",
        name: "Parent of Alice",
        email: "parent@easwipe.com",
        role: Role::Parent,
        avatar: None,
        username: "alice_parent",
        department: None,
        school: None,
        designation: None,
    },
];

fn time(hour: u32) -> anyhow::Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| anyhow::anyhow!("invalid hour {hour}"))
}

pub(super) fn demo_tenant(hash_cost: u32) -> anyhow::Result<(OrgSnapshot, Settings, Records)> {
    let now = Utc::now();

    let org = OrgSnapshot {
        departments: vec![
            Department {
                head_ids: vec![UserId::from("u_rp")],
                ..Department::new("d1", "Primary Education")
            },
            Department::new("s1", "St. Mary High School").with_parent("d1"),
        ],
        designations: vec![Designation {
            id: DesignationId::from("des1"),
            name: "Professor".to_string(),
            role: Role::Teacher,
            department_id: Some(DepartmentId::from("d1")),
        }],
        ..OrgSnapshot::default()
    };

    // One hash serves every demo account.
    let password_hash = hash_password(DEMO_PASSWORD, hash_cost).map_err(|e| e.error)?;

    let users: Vec<User> = DEMO_USERS
        .iter()
        .map(|demo| User {
            id: UserId::from(demo.id),
            name: demo.name.to_string(),
            email: demo.email.to_string(),
            role: demo.role,
            avatar: demo.avatar.map(str::to_string),
            username: Some(demo.username.to_string()),
            department_id: demo.department.map(DepartmentId::from),
            sub_department_id: None,
            school_id: demo.school.map(DepartmentId::from),
            designation_id: demo.designation.map(DesignationId::from),
            blood_group: None,
            emergency_contact: None,
            id_number: None,
            phone: None,
            created_at: now,
        })
        .collect();

    let password_hashes: HashMap<UserId, String> = users
        .iter()
        .map(|user| (user.id.clone(), password_hash.clone()))
        .collect();

    let records = Records {
        users,
        password_hashes,
        shifts: vec![
            Shift {
                id: ShiftId::from("sh1"),
                name: "Morning Shift".to_string(),
                start_time: time(8)?,
                end_time: time(14)?,
                color: "#4f46e5".to_string(),
            },
            Shift {
                id: ShiftId::from("sh2"),
                name: "Evening Shift".to_string(),
                start_time: time(14)?,
                end_time: time(20)?,
                color: "#10b981".to_string(),
            },
        ],
        notices: vec![Notice {
            id: NoticeId::from("n1"),
            title: "Welcome to eaSwipe".to_string(),
            content: "Campus automation made simple.".to_string(),
            author_id: UserId::from("u1"),
            author_name: "Admin".to_string(),
            notice_type: NoticeType::Info,
            read_by: Vec::new(),
            created_at: now,
        }],
        ..Records::default()
    };

    Ok((org, Settings::default(), records))
}
