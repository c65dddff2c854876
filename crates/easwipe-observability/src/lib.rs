//! eaSwipe Observability
//!
//! - Console and rolling JSON file logging via `tracing`
//! - Request logging middleware
//! - Prometheus metrics for HTTP traffic and campus workflows
//!
//! Metrics can be switched off at runtime with `OBSERVABILITY_ENABLED=false`;
//! logging is always on.
//!
//! # Examples
//!
//! ```no_run
//! use easwipe_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing()?;
//!     let metrics_handle = init_metrics()?;
//!     // ... application code ...
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod metrics;

pub use metrics_exporter_prometheus::PrometheusHandle;

pub use logging::{init_tracing, logging_middleware};
pub use metrics::{
    init_metrics, is_observability_enabled, metrics_middleware, track_approval_decision,
    track_department_change, track_login_failure, track_login_success, track_user_created,
};
