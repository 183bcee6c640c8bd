//! Build configuration discovery for a Go project directory.

use std::path::{Component, Path};

use crate::gomod::GoMod;
use crate::mode::{DependencyMode, Markers};

/// Path component that marks a GOPATH-style workspace root.
pub const WORKSPACE_ROOT_SEGMENT: &str = "src";

/// Everything the Dockerfile template needs to know about the project.
///
/// Built once per run by [`BuildConfig::detect`]; the only input besides the
/// filesystem is the optional binary name override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Package path inside `/go/src` in the build container.
    pub import_path: String,
    /// `Gopkg.toml` is present.
    pub uses_legacy_lock: bool,
    /// `go.mod` is present.
    pub uses_module_manifest: bool,
    /// Name of the compiled binary, also its file name under `/bin`.
    pub binary_name: String,
    /// Package passed to `go build`. Same as `import_path`.
    pub entry_package: String,
}

impl BuildConfig {
    /// Inspect `project_dir` and build the configuration.
    ///
    /// With a `go.mod`, the import path is its module path. Without one, it is
    /// the part of `project_dir` below the last `src` component.
    ///
    /// # Errors
    ///
    /// - [`Error::Probe`](crate::Error::Probe) if a marker file cannot be checked
    /// - [`Error::GoModRead`](crate::Error::GoModRead) /
    ///   [`Error::MissingModuleDirective`](crate::Error::MissingModuleDirective)
    ///   for an unreadable or unusable `go.mod`
    /// - [`Error::EmptyImportPath`](crate::Error::EmptyImportPath) when run from `src` itself
    /// - [`Error::NonUtf8Path`](crate::Error::NonUtf8Path) for a directory path that is not UTF-8
    /// - [`Error::InvalidBinaryName`](crate::Error::InvalidBinaryName) when the override, or
    ///   the name derived from the import path, cannot be used as a file name
    pub fn detect(project_dir: &Path, binary_override: Option<&str>) -> crate::Result<Self> {
        let markers = Markers::probe(project_dir)?;

        let (import_path, default_binary) = if markers.go_mod {
            let go_mod = GoMod::read(project_dir)?;
            let binary = go_mod.binary_name().to_owned();
            (go_mod.module_path, binary)
        } else {
            let import_path = import_path_from_dir(project_dir)?;
            let binary = default_binary_name(&import_path).to_owned();
            (import_path, binary)
        };

        let binary_name = match binary_override {
            Some(name) => name,
            None => default_binary.as_str(),
        };
        let binary_name = validate_binary_name(binary_name)?.to_owned();

        let config = Self {
            entry_package: import_path.clone(),
            import_path,
            uses_legacy_lock: markers.gopkg_toml,
            uses_module_manifest: markers.go_mod,
            binary_name,
        };
        tracing::info!(
            import_path = %config.import_path,
            binary = %config.binary_name,
            mode = %config.dependency_mode(),
            "detected project"
        );
        Ok(config)
    }

    /// Dependency block to emit; legacy lock wins when both markers exist.
    pub fn dependency_mode(&self) -> DependencyMode {
        DependencyMode::resolve(self.uses_legacy_lock, self.uses_module_manifest)
    }
}

/// Import path for a GOPATH-style directory.
///
/// Takes the components after the last `src` component, joined with `/`.
/// Without any `src` component the whole path, minus its root, is used.
///
/// ```
/// use dockgen_core::import_path_from_dir;
/// use std::path::Path;
///
/// let path = import_path_from_dir(Path::new("/home/me/go/src/example.com/proj")).unwrap();
/// assert_eq!(path, "example.com/proj");
/// assert!(import_path_from_dir(Path::new("/home/me/go/src")).is_err());
/// ```
///
/// # Errors
///
/// - [`Error::EmptyImportPath`](crate::Error::EmptyImportPath) if nothing is left
/// - [`Error::NonUtf8Path`](crate::Error::NonUtf8Path) if a component is not UTF-8
pub fn import_path_from_dir(dir: &Path) -> crate::Result<String> {
    let segments = dir
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_str().ok_or_else(|| crate::Error::NonUtf8Path {
                dir: dir.to_path_buf(),
            })),
            _ => None,
        })
        .collect::<crate::Result<Vec<_>>>()?;

    let start = match segments.iter().rposition(|s| *s == WORKSPACE_ROOT_SEGMENT) {
        Some(idx) => idx + 1,
        None => 0,
    };

    let import_path = segments[start..].join("/");
    if import_path.is_empty() {
        return Err(crate::Error::EmptyImportPath {
            dir: dir.to_path_buf(),
        });
    }
    Ok(import_path)
}

/// Last segment of an import path.
pub fn default_binary_name(import_path: &str) -> &str {
    match import_path.rsplit_once('/') {
        Some((_, last)) => last,
        None => import_path,
    }
}

fn validate_binary_name(name: &str) -> crate::Result<&str> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name.contains(['/', '\\']) {
        "must not contain a path separator"
    } else if name.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(name);
    };
    Err(crate::Error::InvalidBinaryName {
        name: name.to_owned(),
        reason,
    })
}
