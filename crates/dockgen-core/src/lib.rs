//! Core types and project detection for dockgen.
//!
//! This crate decides how a Go project manages its dependencies
//! ([`DependencyMode`]), derives the import path and binary name
//! ([`BuildConfig`]), reads the optional `dockgen.toml` ([`DockgenConfig`]),
//! and defines the shared error types.

pub mod config;
pub mod error;
pub mod gomod;
pub mod mode;
pub mod project;

pub use config::{DockgenConfig, ImageConfig};
pub use error::{Error, Result};
pub use gomod::GoMod;
pub use mode::{DependencyMode, Markers};
pub use project::{BuildConfig, default_binary_name, import_path_from_dir};

/// Current working directory, the project every run inspects.
pub fn current_dir() -> Result<std::path::PathBuf> {
    std::env::current_dir().map_err(|e| Error::CurrentDir { source: e })
}
