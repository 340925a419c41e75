//! flakyrec server library entry.
//!
//! This crate wires the record store, fault dice, metrics registry, config
//! loader, and HTTP handlers into a small service. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
