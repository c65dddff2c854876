use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use easwipe_core::AppError;
use easwipe_models::IdCard;

use crate::modules::public::service::PublicService;
use crate::state::AppState;

/// Public ID card lookup by username
#[utoipa::path(
    get,
    path = "/api/public/id-card/{username}",
    params(
        ("username" = String, Path, description = "Username printed on the card")
    ),
    responses(
        (status = 200, description = "ID card", body = IdCard),
        (status = 404, description = "No user with that username")
    ),
    tag = "Public"
)]
#[instrument(skip(state))]
pub async fn get_id_card(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<IdCard>, AppError> {
    let card = PublicService::get_id_card(&state.store, &username).await?;
    Ok(Json(card))
}
