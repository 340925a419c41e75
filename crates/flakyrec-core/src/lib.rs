//! flakyrec core: transport-agnostic record type and error surface.
//!
//! This crate defines the data model and error taxonomy shared by the server,
//! its tests, and any client tooling. It carries no runtime or HTTP
//! dependencies so it can be reused in other contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `RecordsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod record;

/// Shared result type.
pub use error::{ClientCode, RecordsError, Result};
pub use record::{seed_records, Record};
