//! # eaSwipe API
//!
//! A REST API built with Rust and Axum for campus administration: attendance,
//! leave, shift rosters and a notice board, all scoped by an organisational
//! department tree.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── easwipe-core/          # AppError, password hashing, permission keys
//! ├── easwipe-config/        # Environment-driven configuration
//! ├── easwipe-models/        # Domain models and DTOs
//! ├── easwipe-access/        # Department closure, visibility filter, approvals
//! ├── easwipe-auth/          # JWT claims and token handling
//! └── easwipe-observability/ # Tracing and Prometheus metrics
//! src/
//! ├── middleware/   # Auth extractors and role/permission gates
//! ├── modules/      # Feature modules (controller, service, router)
//! ├── store/        # In-memory store and demo tenant
//! └── bin/cli.rs    # Offline department tree tooling
//! ```
//!
//! ## Visibility
//!
//! | Role | Sees |
//! |------|------|
//! | Admin | everything |
//! | Resource person | records filed under their department and its descendants |
//! | Everyone else | their own records |
//!
//! Approvals and user management use the delegated scope: administrators
//! reach everything, anyone else reaches their department closure, and users
//! never decide their own requests.
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! cargo run --bin easwipe
//! ```
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod validator;

// Re-export workspace crates for convenience
pub use easwipe_access;
pub use easwipe_auth;
pub use easwipe_config;
pub use easwipe_core;
pub use easwipe_models;
