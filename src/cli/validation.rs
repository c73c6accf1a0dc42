//! CLI argument validation functions
//!
//! Custom validation functions for CLI arguments that go beyond what clap
//! can validate automatically.

use std::fs;
use std::path::PathBuf;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("File does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read file '{}': {}", path_str, e)),
    }
}
