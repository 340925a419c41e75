use std::time::Duration;

use serde::Deserialize;
use flakyrec_core::error::{RecordsError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            store: StoreSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RecordsError::UnsupportedVersion);
        }
        self.store.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Delay applied on the slow lookup path.
    #[serde(default = "default_slow_delay_ms")]
    pub slow_delay_ms: u64,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            slow_delay_ms: default_slow_delay_ms(),
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=60000).contains(&self.slow_delay_ms) {
            return Err(RecordsError::BadRequest(
                "store.slow_delay_ms must be between 1 and 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn slow_delay(&self) -> Duration {
        Duration::from_millis(self.slow_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Common `application` label put on every exported series.
    #[serde(default = "default_application")]
    pub application: String,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            application: default_application(),
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        if self.application.trim().is_empty() {
            return Err(RecordsError::BadRequest(
                "metrics.application must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_slow_delay_ms() -> u64 {
    500
}
fn default_application() -> String {
    "demoApplication".into()
}
