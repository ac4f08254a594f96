use std::path::{Path, PathBuf};

/// Resolve the directory every command operates on, as an absolute path.
///
/// `--root` / `MDSTAMP_ROOT` wins; otherwise the current directory. Project
/// detection reads the path's segments, so a relative root is made absolute
/// (symlinks resolved when the root exists).
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return std::fs::canonicalize(p).unwrap_or_else(|_| from_cwd(p));
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// `path` made absolute against the current directory.
pub fn from_cwd(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Join `path` onto `root` unless it is already absolute.
pub fn under_root(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
