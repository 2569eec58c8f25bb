//! Host path to `file://` URI conversion.
//!
//! Paths may be POSIX absolute (`/a/b.py`), Windows absolute (`C:\a\b.py`)
//! or relative. Only a drive-qualified path gets the extra leading slash,
//! so both forms end up as `file:///...`. No percent-encoding is applied.

use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

static DRIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]:").expect("valid drive regex"));

/// Convert a path string into a SARIF artifact URI.
pub fn path_to_uri(path: &str) -> String {
    let mut p = path.replace('\\', "/");
    if DRIVE_RE.is_match(&p) {
        p.insert(0, '/');
    }
    format!("file://{}", p)
}

/// Resolve `path` against `cwd` and drop `.`/`..` components lexically.
///
/// Symlinks are not followed; `..` at the root stays at the root.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    let mut out = PathBuf::new();
    for comp in joined.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() refuses to remove a root or prefix
                if !matches!(
                    out.components().next_back(),
                    Some(Component::RootDir) | Some(Component::Prefix(_)) | None
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// URI for a path as reported by pylint, resolved against `cwd`.
pub fn file_uri(path: &str, cwd: &Path) -> String {
    let abs = absolutize(Path::new(path), cwd);
    path_to_uri(&abs.to_string_lossy())
}
