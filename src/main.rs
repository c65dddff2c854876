use dotenvy::dotenv;
use tracing::info;

use easwipe::router::init_router;
use easwipe::state::init_app_state;
use easwipe_config::ServerConfig;
use easwipe_observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let metrics_handle = init_metrics()?;
    let state = init_app_state(metrics_handle)?;
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(%address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);
    axum::serve(listener, app).await?;

    Ok(())
}
