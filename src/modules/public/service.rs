use tracing::instrument;

use easwipe_core::AppError;
use easwipe_models::{IdCard, IdFieldConfig, User};

use crate::store::{OrgSnapshot, Store};

pub struct PublicService;

impl PublicService {
    /// The public card for `username`. Fields disabled in the ID card
    /// configuration are left empty.
    #[instrument(skip(store))]
    pub async fn get_id_card(store: &Store, username: &str) -> Result<IdCard, AppError> {
        let org = store.org();
        let settings = store.settings();
        let records = store.read().await;

        let user = records
            .user_by_username(username)
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("ID card not found")))?;

        Ok(build_id_card(user, &org, &settings.app.org_name, &settings.id_card))
    }
}

fn build_id_card(user: &User, org: &OrgSnapshot, organization: &str, fields: &IdFieldConfig) -> IdCard {
    let department = user
        .department_id
        .as_ref()
        .and_then(|id| org.departments.iter().find(|d| &d.id == id))
        .map(|d| d.name.clone());

    IdCard {
        organization: organization.to_string(),
        name: user.name.clone(),
        role: user.role,
        avatar: user.avatar.clone(),
        username: user.username.clone(),
        department: department.filter(|_| fields.show_department),
        blood_group: user.blood_group.clone().filter(|_| fields.show_blood_group),
        emergency_contact: user
            .emergency_contact
            .clone()
            .filter(|_| fields.show_emergency_contact),
        id_number: user.id_number.clone().filter(|_| fields.show_id_number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use easwipe_models::{Department, Role, UserId};

    fn user() -> User {
        User {
            id: UserId::from("u2"),
            name: "Dr. Sarah Wilson".to_string(),
            email: "teacher@easwipe.com".to_string(),
            role: Role::Teacher,
            avatar: None,
            username: Some("sarahw".to_string()),
            department_id: Some("d1".into()),
            sub_department_id: None,
            school_id: None,
            designation_id: None,
            blood_group: Some("O+".to_string()),
            emergency_contact: Some("+1 555 0100".to_string()),
            id_number: Some("EMP-0002".to_string()),
            phone: None,
            created_at: Utc::now(),
        }
    }

    fn org() -> OrgSnapshot {
        OrgSnapshot {
            departments: vec![Department::new("d1", "Primary Education")],
            ..OrgSnapshot::default()
        }
    }

    #[test]
    fn test_id_card_shows_enabled_fields() {
        let card = build_id_card(&user(), &org(), "eaSwipe Academy", &IdFieldConfig::default());
        assert_eq!(card.department.as_deref(), Some("Primary Education"));
        assert_eq!(card.blood_group.as_deref(), Some("O+"));
        assert_eq!(card.id_number.as_deref(), Some("EMP-0002"));
    }

    #[test]
    fn test_id_card_hides_disabled_fields() {
        let fields = IdFieldConfig {
            show_department: false,
            show_blood_group: false,
            show_emergency_contact: true,
            show_id_number: false,
        };
        let card = build_id_card(&user(), &org(), "eaSwipe Academy", &fields);
        assert_eq!(card.department, None);
        assert_eq!(card.blood_group, None);
        assert_eq!(card.id_number, None);
        assert_eq!(card.emergency_contact.as_deref(), Some("+1 555 0100"));
        assert_eq!(card.name, "Dr. Sarah Wilson");
    }
}
