//! Command helper utilities

use std::path::{Path, PathBuf};

use serde_json::Value;

use metadecode::Result;
use metadecode::error::fs::{io_error, read_failed};

/// Resolve a directory from an optional argument
///
/// If a path is provided, use it. Otherwise, resolve to the current directory.
pub fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Read a whole file, reporting the path on failure
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| read_failed(path.display().to_string(), e.to_string()))
}

/// Read a whole UTF-8 file, reporting the path on failure
pub fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| read_failed(path.display().to_string(), e.to_string()))
}

/// Print a value as pretty JSON on stdout
pub fn print_json(value: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| io_error(e.to_string()))?;
    println!("{json}");
    Ok(())
}
