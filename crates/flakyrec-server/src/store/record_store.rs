use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use flakyrec_core::error::{RecordsError, Result};
use flakyrec_core::record::{seed_records, Record};

use crate::obs::MetricsSink;
use crate::store::FaultDice;

/// Operation names used as the `op` metric label.
pub const OP_FIND_BY_ID: &str = "findById";
pub const OP_SAVE: &str = "save";

const FAULT_SIDES: u32 = 6;
const SLOW_ROLL: u32 = 4;
const FAULT_ROLL: u32 = 5;

/// Record access used by the HTTP layer.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// `Ok(None)` for a missing id; `Err(StoreFault)` when the backend flakes.
    async fn find_by_id(&self, id: &str) -> Result<Option<Record>>;
    /// Store `name` under a freshly generated id.
    async fn save(&self, name: String) -> Result<Record>;
}

/// Unreliable in-memory store: `id -> Record`.
///
/// Every value's `id` equals its key. Entries are never removed.
pub struct RecordStore {
    records: DashMap<String, Record>,
    dice: Arc<dyn FaultDice>,
    metrics: Arc<dyn MetricsSink>,
    slow_delay: Duration,
}

impl RecordStore {
    /// Build a store holding the seed records.
    pub fn new(dice: Arc<dyn FaultDice>, metrics: Arc<dyn MetricsSink>, slow_delay: Duration) -> Self {
        let records = DashMap::new();
        for rec in seed_records() {
            records.insert(rec.id.clone(), rec);
        }
        metrics.store_size_changed(records.len() as i64);

        Self {
            records,
            dice,
            metrics,
            slow_delay,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    async fn lookup(&self, id: &str) -> Result<Option<Record>> {
        match self.dice.roll(FAULT_SIDES) {
            SLOW_ROLL => {
                tracing::debug!(id = %id, delay_ms = self.slow_delay.as_millis() as u64, "slow store, sleeping");
                tokio::time::sleep(self.slow_delay).await;
            }
            FAULT_ROLL => return Err(RecordsError::StoreFault),
            _ => {}
        }
        Ok(self.records.get(id).map(|r| r.value().clone()))
    }
}

#[async_trait]
impl RecordRepository for RecordStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Record>> {
        let started = Instant::now();
        let res = self.lookup(id).await;
        self.metrics
            .record_call(OP_FIND_BY_ID, res.is_err(), started.elapsed());
        res
    }

    async fn save(&self, name: String) -> Result<Record> {
        let started = Instant::now();
        let record = Record::new(Uuid::new_v4().to_string(), name);
        if self
            .records
            .insert(record.id.clone(), record.clone())
            .is_none()
        {
            self.metrics.store_size_changed(1);
        }
        self.metrics.record_call(OP_SAVE, false, started.elapsed());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obs::ServiceMetrics;
    use crate::store::ScriptedDice;

    const DELAY: Duration = Duration::from_millis(30);

    fn store_with(dice: ScriptedDice) -> (RecordStore, Arc<ServiceMetrics>) {
        let metrics = Arc::new(ServiceMetrics::new("test"));
        let store = RecordStore::new(Arc::new(dice), metrics.clone(), DELAY);
        (store, metrics)
    }

    #[tokio::test]
    async fn seeds_are_present() {
        let (store, metrics) = store_with(ScriptedDice::always(0));
        assert_eq!(store.len(), 3);
        assert_eq!(metrics.store_size.get(&[]), 3);

        let dune = store.find_by_id("1").await.unwrap().unwrap();
        assert_eq!(dune, Record::new("1", "Dune"));
    }

    #[tokio::test]
    async fn missing_id_is_none_not_error() {
        let (store, _) = store_with(ScriptedDice::always(0));
        assert!(store.find_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fault_roll_fails_before_lookup() {
        let (store, metrics) = store_with(ScriptedDice::new([FAULT_ROLL, FAULT_ROLL], 0));

        let err = store.find_by_id("1").await.unwrap_err();
        assert!(matches!(err, RecordsError::StoreFault));
        // unknown ids fault too: the roll comes first
        let err = store.find_by_id("unknown").await.unwrap_err();
        assert!(matches!(err, RecordsError::StoreFault));

        assert_eq!(store.len(), 3);
        assert_eq!(
            metrics
                .store_calls
                .get(&[("op", OP_FIND_BY_ID), ("result", "failure")]),
            2
        );
    }

    #[tokio::test]
    async fn slow_roll_delays_then_finds() {
        let (store, _) = store_with(ScriptedDice::new([SLOW_ROLL], 0));

        let started = Instant::now();
        let rec = store.find_by_id("2").await.unwrap();
        assert!(started.elapsed() >= DELAY);
        assert_eq!(rec.unwrap().name, "In The Mountains Of Madness");

        let started = Instant::now();
        store.find_by_id("2").await.unwrap();
        assert!(started.elapsed() < DELAY);
    }

    #[tokio::test]
    async fn other_rolls_look_up_immediately() {
        let (store, metrics) = store_with(ScriptedDice::new([0, 1, 2, 3], 0));
        for _ in 0..4 {
            assert!(store.find_by_id("3").await.unwrap().is_some());
        }
        assert_eq!(
            metrics
                .store_calls
                .get(&[("op", OP_FIND_BY_ID), ("result", "success")]),
            4
        );
        assert_eq!(metrics.store_duration.count(&[("op", OP_FIND_BY_ID)]), 4);
    }

    #[tokio::test]
    async fn save_generates_fresh_ids_and_grows_gauge() {
        let (store, metrics) = store_with(ScriptedDice::always(FAULT_ROLL));

        let a = store.save("Foundation".into()).await.unwrap();
        let b = store.save("Foundation".into()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(!["1", "2", "3"].contains(&a.id.as_str()));
        assert_eq!(a.name, "Foundation");
        assert!(store.contains(&a.id) && store.contains(&b.id));

        assert_eq!(store.len(), 5);
        assert_eq!(metrics.store_size.get(&[]), 5);
        assert_eq!(
            metrics.store_calls.get(&[("op", OP_SAVE), ("result", "success")]),
            2
        );
    }

    #[tokio::test]
    async fn lookups_never_change_contents() {
        let (store, metrics) = store_with(ScriptedDice::new([0, SLOW_ROLL, FAULT_ROLL, 0], 0));
        for id in ["1", "missing", "2", "3"] {
            let _ = store.find_by_id(id).await;
        }
        assert_eq!(store.len(), 3);
        assert_eq!(metrics.store_size.get(&[]), 3);
    }
}
