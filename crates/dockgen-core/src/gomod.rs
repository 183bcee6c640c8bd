//! Module path extraction from `go.mod`.
//!
//! Only the `module` directive is read; requirements, replacements and
//! toolchain lines are left to the Go toolchain inside the container.

use std::path::Path;

use crate::mode::GO_MOD;

/// The parts of a `go.mod` file that drive Dockerfile generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoMod {
    /// Module path from the `module` directive, e.g. `example.com/proj`.
    pub module_path: String,
}

impl GoMod {
    /// Read and parse `go.mod` in `project_dir`.
    ///
    /// # Errors
    ///
    /// - [`Error::GoModRead`](crate::Error::GoModRead) if the file cannot be read
    /// - [`Error::MissingModuleDirective`](crate::Error::MissingModuleDirective)
    ///   if no usable `module` line exists
    pub fn read(project_dir: &Path) -> crate::Result<Self> {
        let path = project_dir.join(GO_MOD);
        let content = std::fs::read_to_string(&path).map_err(|e| crate::Error::GoModRead {
            path: path.clone(),
            source: e,
        })?;

        let module_path = parse_module_path(&content)
            .ok_or(crate::Error::MissingModuleDirective { path: path.clone() })?;
        tracing::debug!(path = %path.display(), module = %module_path, "parsed go.mod");

        Ok(Self { module_path })
    }

    /// Binary name `go build` would pick for this module.
    ///
    /// ```
    /// use dockgen_core::GoMod;
    ///
    /// let m = GoMod { module_path: "github.com/acme/tool/v2".to_owned() };
    /// assert_eq!(m.binary_name(), "tool");
    /// ```
    pub fn binary_name(&self) -> &str {
        match self.module_path.rsplit_once('/') {
            Some((parent, last)) if is_major_version_suffix(last) => last_segment(parent),
            Some((_, last)) => last,
            None => &self.module_path,
        }
    }
}

/// Extract the module path from `go.mod` source text.
///
/// Accepts bare, double-quoted and backquoted paths, the parenthesized block
/// form, and ignores `//` comments.
pub fn parse_module_path(content: &str) -> Option<String> {
    let mut lines = content.lines().map(|line| strip_comment(line).trim());
    while let Some(line) = lines.next() {
        let Some(rest) = line.strip_prefix("module") else {
            continue;
        };
        // `modulefoo` is not a directive
        if !rest.starts_with(|c: char| c.is_whitespace() || c == '(') {
            continue;
        }
        return match rest.trim() {
            "(" => lines.find(|l| !l.is_empty()).and_then(module_path_value),
            value => module_path_value(value),
        };
    }
    None
}

fn module_path_value(raw: &str) -> Option<String> {
    let path = unquote(raw);
    let valid = !path.is_empty()
        && !path.contains(['(', ')', '"', '`'])
        && !path.contains(char::is_whitespace);
    valid.then(|| path.to_owned())
}

/// Cut the line at the first `//` that is not inside a quoted string.
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    for (idx, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '`' => quote = Some(c),
            None if line[idx..].starts_with("//") => return &line[..idx],
            None => {}
        }
    }
    line
}

fn unquote(s: &str) -> &str {
    for q in ['"', '`'] {
        if let Some(inner) = s.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

fn last_segment(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((_, last)) => last,
        None => path,
    }
}

fn is_major_version_suffix(segment: &str) -> bool {
    segment.strip_prefix('v').is_some_and(|n| {
        !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) && n != "0" && n != "1"
    })
}
