//! Host filesystem access
//!
//! The gallery only ever reads: directory listings and image bytes.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One row of a host directory listing, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_file: bool,
    pub is_dir: bool,
    pub modified: Option<SystemTime>,
}

/// Read-only view of the host's storage
#[allow(async_fn_in_trait)]
pub trait HostFs {
    /// Root of the storage the gallery may browse
    fn storage_root(&self) -> &Path;

    /// List the immediate children of `path`
    async fn read_directory(&self, path: &Path) -> io::Result<Vec<RawEntry>>;
}

/// `HostFs` backed by the local filesystem
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl HostFs for LocalFs {
    fn storage_root(&self) -> &Path {
        &self.root
    }

    async fn read_directory(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        let mut reader = tokio::fs::read_dir(path).await?;
        let mut entries = Vec::new();

        while let Some(entry) = reader.next_entry().await? {
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            // Follow symlinks like a regular stat; dangling links become
            // neither file nor dir and are dropped during classification
            let metadata = match tokio::fs::metadata(&entry_path).await {
                Ok(m) => m,
                Err(e) => {
                    tracing::debug!("Skipping {:?}: {}", entry_path, e);
                    entries.push(RawEntry {
                        name,
                        path: entry_path,
                        is_file: false,
                        is_dir: false,
                        modified: None,
                    });
                    continue;
                }
            };

            entries.push(RawEntry {
                name,
                path: entry_path,
                is_file: metadata.is_file(),
                is_dir: metadata.is_dir(),
                modified: metadata.modified().ok(),
            });
        }

        Ok(entries)
    }
}
