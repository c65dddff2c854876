//! # eaSwipe Config
//!
//! Process configuration for the eaSwipe API, loaded from environment variables:
//!
//! - [`jwt`]: JWT authentication configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listener address
//! - [`store`]: In-memory data store tuning
//!
//! Organisation settings that administrators edit at runtime (branding, SMTP,
//! security policy, role permissions) are not process configuration; they live
//! in the store's settings snapshot.
//!
//! # Example
//!
//! ```ignore
//! use easwipe_config::{CorsConfig, JwtConfig, ServerConfig, StoreConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;
pub mod store;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;
