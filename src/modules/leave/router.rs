use axum::{Router, routing::get, routing::patch};

use crate::state::AppState;

use super::controller::{
    apply_leave, decide_leave, get_leave_approvals, get_leave_balances, get_leave_requests,
    get_my_leave_requests,
};

pub fn init_leave_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_leave_requests).post(apply_leave))
        .route("/mine", get(get_my_leave_requests))
        .route("/approvals", get(get_leave_approvals))
        .route("/balances", get(get_leave_balances))
        .route("/{id}", patch(decide_leave))
}
