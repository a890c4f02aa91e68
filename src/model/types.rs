//! Shared Types
//!
//! Data types used across the model, browser, and UI.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One grid entry: a folder to descend into or an image to view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEntry {
    Folder {
        name: String,
        path: PathBuf,
        modified: Option<SystemTime>,
    },
    Image {
        name: String,
        path: PathBuf,
        modified: Option<SystemTime>,
    },
}

impl DirectoryEntry {
    pub fn name(&self) -> &str {
        match self {
            DirectoryEntry::Folder { name, .. } | DirectoryEntry::Image { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DirectoryEntry::Folder { path, .. } | DirectoryEntry::Image { path, .. } => path,
        }
    }

    pub fn modified(&self) -> Option<SystemTime> {
        match self {
            DirectoryEntry::Folder { modified, .. } | DirectoryEntry::Image { modified, .. } => {
                *modified
            }
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, DirectoryEntry::Folder { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self, DirectoryEntry::Image { .. })
    }
}

/// Directory the browser is showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CurrentDirectory {
    /// The browser's start directory
    #[default]
    Root,
    /// A directory below the start directory, reached by navigation
    Path(PathBuf),
}

impl CurrentDirectory {
    /// Resolve to a concrete path given the start directory
    pub fn resolve<'a>(&'a self, root: &'a Path) -> &'a Path {
        match self {
            CurrentDirectory::Root => root,
            CurrentDirectory::Path(path) => path,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, CurrentDirectory::Root)
    }
}

/// Image chosen for the full-screen viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub path: PathBuf,
}

/// Blocking alert dialog (dismiss only, no retry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Root controller state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<'a> {
    Browsing,
    Viewing { path: &'a Path },
}

/// Vim command state for multi-key commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}
