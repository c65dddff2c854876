use axum::{Router, routing::get, routing::put};

use crate::state::AppState;

use super::controller::{create_designation, delete_designation, get_designations, update_designation};

pub fn init_designations_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_designations).post(create_designation))
        .route("/{id}", put(update_designation).delete(delete_designation))
}
