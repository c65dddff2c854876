use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_id_card;

pub fn init_public_router() -> Router<AppState> {
    Router::new().route("/id-card/{username}", get(get_id_card))
}
