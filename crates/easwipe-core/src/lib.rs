//! # eaSwipe Core
//!
//! Core types, errors, and utilities for the eaSwipe campus API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`permissions`]: Permission key constants consulted by the access layer
//! - [`password`]: Password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use easwipe_core::errors::AppError;
//! use easwipe_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Department not found"));
//! let hash = hash_password("secure_password", 12)?;
//! ```

pub mod errors;
pub mod password;
pub mod permissions;

pub use errors::AppError;
pub use password::{hash_password, verify_password};
