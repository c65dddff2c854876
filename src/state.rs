use std::sync::Arc;

use easwipe_config::{CorsConfig, JwtConfig, StoreConfig};
use easwipe_observability::PrometheusHandle;

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    /// `None` when metrics are disabled.
    pub metrics_handle: Option<PrometheusHandle>,
}

pub fn init_app_state(metrics_handle: Option<PrometheusHandle>) -> anyhow::Result<AppState> {
    Ok(AppState {
        store: Arc::new(Store::seeded(StoreConfig::from_env())?),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        metrics_handle,
    })
}
