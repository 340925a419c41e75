//! Shared application state for the record service.
//!
//! Owns the store handle and the metrics registry; cloned into every handler.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::obs::ServiceMetrics;
use crate::store::{FaultDice, RecordRepository, RecordStore, ThreadRngDice};

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordRepository>,
    metrics: Arc<ServiceMetrics>,
}

impl AppState {
    /// Build state with the production dice.
    pub fn new(cfg: &ServiceConfig) -> Self {
        Self::with_dice(cfg, Arc::new(ThreadRngDice))
    }

    /// Build state around a seeded `RecordStore` rolling `dice`.
    pub fn with_dice(cfg: &ServiceConfig, dice: Arc<dyn FaultDice>) -> Self {
        let metrics = Arc::new(ServiceMetrics::new(cfg.metrics.application.clone()));
        let store = Arc::new(RecordStore::new(
            dice,
            metrics.clone(),
            cfg.store.slow_delay(),
        ));
        Self::with_store(store, metrics)
    }

    /// Build state around any repository implementation.
    pub fn with_store(store: Arc<dyn RecordRepository>, metrics: Arc<ServiceMetrics>) -> Self {
        Self { store, metrics }
    }

    pub fn store(&self) -> Arc<dyn RecordRepository> {
        Arc::clone(&self.store)
    }

    pub fn metrics(&self) -> Arc<ServiceMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }
}
