//! Images directory and atomic whole-file writes.
//!
//! Bodies land in a `.part` sibling and are renamed onto the final path, so
//! a failed or interrupted download never leaves a partial image behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Temp-file path next to `final_path` (`foo.jpg` → `foo.jpg.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut name = final_path.as_os_str().to_os_string();
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Creates the images directory (and parents) if absent. Must run before
/// any download starts.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Writes `bytes` to `path` atomically: truncating binary write to the
/// `.part` sibling, then rename onto `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = temp_path(path);
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)
}
