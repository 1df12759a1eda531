//! Result store configuration.

use std::time::Duration;

use derive_builder::Builder;

/// Configuration for the ephemeral result store.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct StoreConfig {
    /// How long a stored result stays retrievable.
    #[builder(default = "Duration::from_secs(10 * 60)")] // 10 minutes
    pub ttl: Duration,

    /// How often the background sweep scans for expired records.
    #[builder(default = "Duration::from_secs(2 * 60)")] // 2 minutes
    pub sweep_interval: Duration,
}

impl StoreConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ttl) = self.ttl {
            if ttl.is_zero() {
                return Err("ttl must be non-zero".to_string());
            }
        }
        if let Some(interval) = self.sweep_interval {
            if interval.is_zero() {
                return Err("sweep interval must be non-zero".to_string());
            }
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            sweep_interval: Duration::from_secs(2 * 60),
        }
    }
}

impl StoreConfig {
    /// Create a new config builder.
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }
}
