//! Top-level facade crate for flakyrec.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use flakyrec_core::*;
}

pub mod server {
    pub use flakyrec_server::*;
}
