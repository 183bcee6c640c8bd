use std::fmt;
use std::path::Path;

/// Module manifest marker.
pub const GO_MOD: &str = "go.mod";
/// Legacy `dep` declaration file. Its presence alone selects legacy-lock mode.
pub const GOPKG_TOML: &str = "Gopkg.toml";
/// Legacy `dep` resolved lock, copied next to [`GOPKG_TOML`] at build time.
pub const GOPKG_LOCK: &str = "Gopkg.lock";

/// How the project pins its dependencies.
///
/// Resolved from the two marker flags with a fixed precedence:
/// legacy lock, then module manifest, then nothing.
///
/// # Examples
///
/// ```
/// use dockgen_core::DependencyMode;
///
/// assert_eq!(DependencyMode::resolve(true, true), DependencyMode::LegacyLock);
/// assert_eq!(DependencyMode::resolve(false, true), DependencyMode::ModuleManifest);
/// assert_eq!(DependencyMode::resolve(false, false), DependencyMode::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyMode {
    /// `Gopkg.toml` present: vendor with `dep ensure -vendor-only`.
    LegacyLock,
    /// `go.mod` present: vendor with `go mod vendor`.
    ModuleManifest,
    /// No markers: fetch everything with `go get`.
    None,
}

impl DependencyMode {
    pub fn resolve(uses_legacy_lock: bool, uses_module_manifest: bool) -> Self {
        if uses_legacy_lock {
            Self::LegacyLock
        } else if uses_module_manifest {
            Self::ModuleManifest
        } else {
            Self::None
        }
    }
}

impl fmt::Display for DependencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LegacyLock => "dep",
            Self::ModuleManifest => "go modules",
            Self::None => "go get",
        };
        f.write_str(name)
    }
}

/// Marker files observed in a project directory.
///
/// Each marker is probed exactly once; the same answer feeds both the
/// import path derivation and the [`BuildConfig`](crate::BuildConfig) flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Markers {
    pub go_mod: bool,
    pub gopkg_toml: bool,
}

impl Markers {
    pub fn probe(dir: &Path) -> crate::Result<Self> {
        let markers = Self {
            go_mod: probe_file(&dir.join(GO_MOD))?,
            gopkg_toml: probe_file(&dir.join(GOPKG_TOML))?,
        };
        tracing::debug!(
            dir = %dir.display(),
            go_mod = markers.go_mod,
            gopkg_toml = markers.gopkg_toml,
            "probed dependency markers"
        );
        Ok(markers)
    }
}

/// `Ok(false)` only for a genuinely missing file; any other I/O failure is an error.
fn probe_file(path: &Path) -> crate::Result<bool> {
    path.try_exists().map_err(|e| crate::Error::Probe {
        path: path.to_path_buf(),
        source: e,
    })
}
