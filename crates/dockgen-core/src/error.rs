use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to determine the current working directory")]
    CurrentDir { source: std::io::Error },

    #[error("failed to check for {path}")]
    Probe {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Import path derivation ──
    #[error("failed to read module manifest {path}")]
    GoModRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no usable `module` directive found in {path}")]
    MissingModuleDirective { path: PathBuf },

    #[error(
        "cannot derive an import path from {dir}; run dockgen from a package directory below `src`"
    )]
    EmptyImportPath { dir: PathBuf },

    #[error("cannot derive an import path from {dir}: path is not valid UTF-8")]
    NonUtf8Path { dir: PathBuf },

    #[error("invalid binary name {name:?}: {reason}")]
    InvalidBinaryName { name: String, reason: &'static str },
}
