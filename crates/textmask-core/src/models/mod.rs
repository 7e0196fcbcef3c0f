//! Data models.

pub mod config;

pub use config::{FieldConfig, TextmaskConfig};
