//! Configuration management for jmerge.
//!
//! This crate provides types and a loader for the service's small
//! configuration surface: bind port, upload size limit, and the
//! page-display metadata shown on the upload form.

mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{Config, PageConfig};
