use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const BACKUP_SUFFIX: &str = ".bak";

/// `cards.txt` -> `cards.txt.bak`, in the same directory.
pub fn default_backup_path(path: &Path) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("stack"));
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

/// Directory temporary files are created in, so the final rename stays on
/// one filesystem.
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
