//! In-memory record store with injected latency and faults.
//!
//! - `RecordRepository`: the seam handlers call through
//! - `RecordStore`: DashMap-backed implementation, seeded at construction
//! - `FaultDice`: injectable uniform random source driving the fault branch

pub mod dice;
pub mod record_store;

pub use dice::{FaultDice, ScriptedDice, ThreadRngDice};
pub use record_store::{RecordRepository, RecordStore, OP_FIND_BY_ID, OP_SAVE};
