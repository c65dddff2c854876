//! # eaSwipe Auth
//!
//! JWT claims and token utilities for the eaSwipe campus API.
//!
//! - [`claims`]: Access token claims and their conversion into a [`Principal`](easwipe_models::Principal)
//! - [`jwt`]: Token creation and verification
//!
//! Access tokens carry the user's role and affiliations so a request can be
//! authorized without a directory lookup.
//!
//! # Example
//!
//! ```ignore
//! use easwipe_auth::{create_access_token, verify_token};
//! use easwipe_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(&user, &config)?;
//! let principal = verify_token(&token, &config)?.to_principal();
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
