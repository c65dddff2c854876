use std::env;
use std::time::Duration;

/// Bcrypt cost used when no `PASSWORD_HASH_COST` is set.
pub const DEFAULT_PASSWORD_HASH_COST: u32 = 12;

/// Tuning for the in-memory data store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Artificial delay applied to every store call, mimicking a remote data service.
    pub latency: Duration,
    /// Bcrypt cost for seeded and newly created passwords.
    pub password_hash_cost: u32,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            latency: Duration::from_millis(
                env::var("STORE_LATENCY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0),
            ),
            password_hash_cost: env::var("PASSWORD_HASH_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|cost| (4..=31).contains(cost))
                .unwrap_or(DEFAULT_PASSWORD_HASH_COST),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency: Duration::ZERO,
            password_hash_cost: DEFAULT_PASSWORD_HASH_COST,
        }
    }
}
