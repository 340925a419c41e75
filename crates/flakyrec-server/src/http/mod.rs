//! HTTP surface: record handlers, error translation, response tracking.

pub mod error;
pub mod records;
pub mod track;

pub use error::ApiError;
