//! Record data model.

use serde::{Deserialize, Serialize};

/// Immutable id/name pair held by the store.
///
/// Wire shape: `{"id": "...", "name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub id: String,
    pub name: String,
}

impl Record {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Records present at process start.
pub fn seed_records() -> [Record; 3] {
    [
        Record::new("1", "Dune"),
        Record::new("2", "In The Mountains Of Madness"),
        Record::new("3", "Lord Of The Rings"),
    ]
}
