//! Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific log directory
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("picstash")
}

/// Log file name inside `get_log_dir()`
pub const LOG_FILE_NAME: &str = "picstash.log";
