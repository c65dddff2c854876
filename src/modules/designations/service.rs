use tracing::{info, instrument};

use easwipe_core::AppError;
use easwipe_models::{Designation, DesignationId, Role, SaveDesignationDto};

use crate::store::{OrgSnapshot, Store};

pub struct DesignationService;

impl DesignationService {
    #[instrument(skip(store))]
    pub async fn get_designations(store: &Store) -> Vec<Designation> {
        store.org().designations.clone()
    }

    #[instrument(skip(store, dto), fields(name = %dto.name))]
    pub async fn create_designation(
        store: &Store,
        dto: SaveDesignationDto,
    ) -> Result<Designation, AppError> {
        let designation = store
            .update_org(|org| {
                validate_designation(org, &dto)?;
                let designation = Designation {
                    id: DesignationId::generate(),
                    name: dto.name,
                    role: dto.role,
                    department_id: dto.department_id,
                };
                org.designations.push(designation.clone());
                Ok(designation)
            })
            .await?;

        info!(designation_id = %designation.id, "Designation created");
        Ok(designation)
    }

    #[instrument(skip(store, dto))]
    pub async fn update_designation(
        store: &Store,
        id: &DesignationId,
        dto: SaveDesignationDto,
    ) -> Result<Designation, AppError> {
        store
            .update_org(|org| {
                validate_designation(org, &dto)?;
                let designation = org
                    .designations
                    .iter_mut()
                    .find(|d| &d.id == id)
                    .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Designation not found")))?;
                designation.name = dto.name;
                designation.role = dto.role;
                designation.department_id = dto.department_id;
                Ok(designation.clone())
            })
            .await
    }

    /// Users holding the designation keep their role and lose the title.
    #[instrument(skip(store))]
    pub async fn delete_designation(store: &Store, id: &DesignationId) -> Result<(), AppError> {
        store
            .update_org(|org| {
                let before = org.designations.len();
                org.designations.retain(|d| &d.id != id);
                if org.designations.len() == before {
                    return Err(AppError::not_found(anyhow::anyhow!("Designation not found")));
                }
                Ok(())
            })
            .await?;

        let mut records = store.write().await;
        for user in records
            .users
            .iter_mut()
            .filter(|u| u.designation_id.as_ref() == Some(id))
        {
            user.designation_id = None;
        }

        info!(designation_id = %id, "Designation deleted");
        Ok(())
    }
}

fn validate_designation(org: &OrgSnapshot, dto: &SaveDesignationDto) -> Result<(), AppError> {
    if dto.role == Role::Unrecognized {
        return Err(AppError::bad_request(anyhow::anyhow!("Unknown role")));
    }
    if let Some(department) = &dto.department_id
        && !org.departments.iter().any(|d| &d.id == department)
    {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Department {} does not exist",
            department
        )));
    }
    Ok(())
}
