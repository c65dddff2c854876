use axum::{Router, routing::get, routing::put};

use crate::state::AppState;

use super::controller::{
    create_department, delete_department, get_department_closure, get_departments,
    update_department,
};

pub fn init_departments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_departments).post(create_department))
        .route("/{id}", put(update_department).delete(delete_department))
        .route("/{id}/closure", get(get_department_closure))
}
