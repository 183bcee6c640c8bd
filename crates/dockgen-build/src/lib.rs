//! Dockerfile rendering and output for dockgen.
//!
//! # Pipeline
//!
//! ```text
//! dockgen [--binaryname NAME]
//!   1. Detect      ── BuildConfig::detect(cwd)   (dockgen-core)
//!   2. Render      ── DockerfileGenerator::render() into a String
//!   3. Write       ── temp file + rename over ./Dockerfile
//! ```
//!
//! # Dependency block
//!
//! The build stage fetches dependencies according to [`DependencyMode`]:
//! - **LegacyLock**: install `dep`, copy `Gopkg.toml`/`Gopkg.lock`, `dep ensure -vendor-only`
//! - **ModuleManifest**: `go mod vendor`
//! - **None**: `go get -v ./...`
//!
//! [`DependencyMode`]: dockgen_core::DependencyMode

pub mod dockerfile;
pub mod output;

pub use dockerfile::DockerfileGenerator;
pub use output::{DOCKERFILE_NAME, WriteError, write_dockerfile};
