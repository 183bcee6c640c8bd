use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the generated file in the project directory.
pub const DOCKERFILE_NAME: &str = "Dockerfile";

/// Write `content` to `Dockerfile` in `project_dir`, replacing any existing file.
///
/// The content goes to a temporary file in the same directory first and is
/// renamed into place, so a failed write never leaves a truncated Dockerfile.
pub fn write_dockerfile(project_dir: &Path, content: &str) -> Result<PathBuf, WriteError> {
    let dockerfile_path = project_dir.join(DOCKERFILE_NAME);

    let mut tmp = tempfile::NamedTempFile::new_in(project_dir).map_err(|e| {
        WriteError::TempFile {
            dir: project_dir.to_path_buf(),
            source: e,
        }
    })?;

    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.flush())
        .and_then(|()| set_readable(tmp.as_file()))
        .map_err(|e| WriteError::Write {
            path: tmp.path().to_path_buf(),
            source: e,
        })?;

    tmp.persist(&dockerfile_path)
        .map_err(|e| WriteError::Persist {
            path: dockerfile_path.clone(),
            source: e.error,
        })?;

    tracing::info!(path = %dockerfile_path.display(), bytes = content.len(), "wrote Dockerfile");
    Ok(dockerfile_path)
}

/// Temp files are created owner-only; the Dockerfile should be world-readable.
#[cfg(unix)]
fn set_readable(file: &std::fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_readable(_file: &std::fs::File) -> std::io::Result<()> {
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create temporary file in {dir}")]
    TempFile {
        dir: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to replace {path}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}
