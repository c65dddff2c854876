//! Department tree maintenance.
//!
//! Every write goes through [`Store::update_org`], so the tree checks run
//! against the same snapshot that gets published.

use tracing::{info, instrument};

use easwipe_access::{check_parent_assignment, ensure_deletable, resolve_department_closure};
use easwipe_core::AppError;
use easwipe_models::{ClosureResponse, Department, DepartmentId, SaveDepartmentDto, UserId};
use easwipe_observability::track_department_change;

use crate::store::Store;

pub struct DepartmentService;

impl DepartmentService {
    #[instrument(skip(store))]
    pub async fn get_departments(store: &Store) -> Vec<Department> {
        store.org().departments.clone()
    }

    #[instrument(skip(store, dto), fields(name = %dto.name))]
    pub async fn create_department(store: &Store, dto: SaveDepartmentDto) -> Result<Department, AppError> {
        ensure_heads_exist(store, &dto.head_ids).await?;

        let department = store
            .update_org(|org| {
                let id = DepartmentId::generate();
                check_parent_assignment(&id, dto.parent_id.as_ref(), &org.departments)?;

                let department = Department {
                    id,
                    name: dto.name,
                    parent_id: dto.parent_id,
                    head_ids: dto.head_ids,
                };
                org.departments.push(department.clone());
                Ok(department)
            })
            .await?;

        track_department_change("create");
        info!(department_id = %department.id, "Department created");
        Ok(department)
    }

    #[instrument(skip(store, dto))]
    pub async fn update_department(
        store: &Store,
        id: &DepartmentId,
        dto: SaveDepartmentDto,
    ) -> Result<Department, AppError> {
        ensure_heads_exist(store, &dto.head_ids).await?;

        let department = store
            .update_org(|org| {
                check_parent_assignment(id, dto.parent_id.as_ref(), &org.departments)?;

                let department = org
                    .departments
                    .iter_mut()
                    .find(|d| &d.id == id)
                    .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Department not found")))?;
                department.name = dto.name;
                department.parent_id = dto.parent_id;
                department.head_ids = dto.head_ids;
                Ok(department.clone())
            })
            .await?;

        track_department_change("update");
        info!(department_id = %id, "Department updated");
        Ok(department)
    }

    #[instrument(skip(store))]
    pub async fn delete_department(store: &Store, id: &DepartmentId) -> Result<(), AppError> {
        // Held until the snapshot is published so no user is assigned meanwhile.
        let records = store.read().await;
        store
            .update_org(|org| {
                if !org.departments.iter().any(|d| &d.id == id) {
                    return Err(AppError::not_found(anyhow::anyhow!("Department not found")));
                }
                ensure_deletable(id, &org.departments)?;
                if records.has_members(id) {
                    return Err(AppError::conflict(anyhow::anyhow!(
                        "Department {} still has users assigned",
                        id
                    )));
                }

                org.departments.retain(|d| &d.id != id);
                for designation in org
                    .designations
                    .iter_mut()
                    .filter(|d| d.department_id.as_ref() == Some(id))
                {
                    designation.department_id = None;
                }
                Ok(())
            })
            .await?;
        drop(records);

        track_department_change("delete");
        info!(department_id = %id, "Department deleted");
        Ok(())
    }

    /// Unknown ids resolve to a closure holding only themselves.
    #[instrument(skip(store))]
    pub async fn get_closure(store: &Store, id: DepartmentId) -> ClosureResponse {
        let org = store.org();
        let mut department_ids: Vec<_> = resolve_department_closure(&id, &org.departments)
            .into_iter()
            .collect();
        department_ids.sort();

        ClosureResponse {
            root: id,
            department_ids,
        }
    }
}

async fn ensure_heads_exist(store: &Store, head_ids: &[UserId]) -> Result<(), AppError> {
    let records = store.read().await;
    match head_ids.iter().find(|id| records.user(id).is_none()) {
        Some(missing) => Err(AppError::bad_request(anyhow::anyhow!(
            "Department head {} does not exist",
            missing
        ))),
        None => Ok(()),
    }
}
