//! Directory Browser
//!
//! Owns the navigation state. Every listing first asks the host for
//! storage access, then reads, classifies and sorts the directory.
//! Navigation only commits once the new listing has succeeded, so a
//! failed read leaves the previous directory and its (stale) entries in
//! place.

use std::path::{Path, PathBuf};

use crate::host::permissions::{self, AccessGrant};
use crate::host::{HostFs, PermissionHost};
use crate::logic;
use crate::logic::errors::BrowseError;
use crate::model::types::{CurrentDirectory, DirectoryEntry};
use crate::model::NavigationModel;
use crate::Platform;

/// Result of a navigation action that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// A directory was listed and is now current
    Listed,
    /// `go_back` at the root: nothing to ascend to
    AtRoot,
    /// An image was pressed and handed to the callback
    ImagePressed,
    /// Nothing at that index, or the path is not a folder of this listing
    Ignored,
}

pub struct DirectoryBrowser<F, P> {
    fs: F,
    permissions: P,
    platform: Platform,
    root: PathBuf,
    state: NavigationModel,
}

impl<F: HostFs, P: PermissionHost> DirectoryBrowser<F, P> {
    /// Browser rooted at the host's storage root
    pub fn new(fs: F, permissions: P, platform: Platform) -> Self {
        let root = fs.storage_root().to_path_buf();
        Self::with_root(fs, permissions, platform, root)
    }

    /// Browser rooted at a directory of the caller's choosing
    pub fn with_root(fs: F, permissions: P, platform: Platform, root: PathBuf) -> Self {
        Self {
            fs,
            permissions,
            platform,
            root,
            state: NavigationModel::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn host_fs(&self) -> &F {
        &self.fs
    }

    pub fn permission_host(&self) -> &P {
        &self.permissions
    }

    pub fn state(&self) -> &NavigationModel {
        &self.state
    }

    /// Selection and scroll are UI concerns the grid may adjust
    pub fn state_mut(&mut self) -> &mut NavigationModel {
        &mut self.state
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.state.entries
    }

    pub fn current(&self) -> &CurrentDirectory {
        &self.state.current
    }

    /// Concrete path of the directory being shown
    pub fn current_dir(&self) -> &Path {
        self.state.current.resolve(&self.root)
    }

    /// Ask the host for storage access; never cached
    pub async fn request_access(&self) -> AccessGrant {
        permissions::request_access(&self.permissions, self.platform).await
    }

    /// List `path`: folders plus jpg/jpeg/png files, newest first
    pub async fn list_directory(&self, path: &Path) -> Result<Vec<DirectoryEntry>, BrowseError> {
        if !self.request_access().await.is_granted() {
            tracing::info!("Storage access denied, not listing {:?}", path);
            return Err(BrowseError::AccessDenied);
        }

        let raw_entries = self.fs.read_directory(path).await.map_err(|source| {
            tracing::error!("Failed to read {:?}: {}", path, source);
            BrowseError::DirectoryUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let total = raw_entries.len();
        let mut entries: Vec<DirectoryEntry> = raw_entries
            .into_iter()
            .filter_map(logic::file::classify_entry)
            .collect();
        logic::sorting::sort_entries(&mut entries);

        tracing::debug!(
            "Listed {:?}: {} of {} entries kept",
            path,
            entries.len(),
            total
        );
        Ok(entries)
    }

    /// List the start directory
    pub async fn mount(&mut self) -> Result<NavOutcome, BrowseError> {
        self.load(CurrentDirectory::Root).await
    }

    /// Re-list the current directory
    pub async fn refresh(&mut self) -> Result<NavOutcome, BrowseError> {
        let current = self.state.current.clone();
        self.load(current).await
    }

    /// Descend into a folder of the current listing
    ///
    /// Paths that are not folders of the current listing are ignored.
    pub async fn enter_folder(&mut self, path: &Path) -> Result<NavOutcome, BrowseError> {
        let listed = self
            .state
            .entries
            .iter()
            .any(|entry| entry.is_folder() && entry.path() == path);
        if !listed {
            tracing::warn!("Refusing to enter unlisted path {:?}", path);
            return Ok(NavOutcome::Ignored);
        }

        let target = if path == self.root {
            CurrentDirectory::Root
        } else {
            CurrentDirectory::Path(path.to_path_buf())
        };
        self.load(target).await
    }

    /// Ascend one level; no-op at the root
    pub async fn go_back(&mut self) -> Result<NavOutcome, BrowseError> {
        let CurrentDirectory::Path(current) = &self.state.current else {
            return Ok(NavOutcome::AtRoot);
        };

        let target = match logic::path::parent_of(current) {
            Some(parent) if logic::path::is_strictly_within(&parent, &self.root) => {
                CurrentDirectory::Path(parent)
            }
            _ => CurrentDirectory::Root,
        };
        self.load(target).await
    }

    /// Press the entry at `index`: folders are entered, images go to
    /// `on_image_press`
    pub async fn press(
        &mut self,
        index: usize,
        on_image_press: impl FnOnce(PathBuf),
    ) -> Result<NavOutcome, BrowseError> {
        let Some(entry) = self.state.entries.get(index) else {
            return Ok(NavOutcome::Ignored);
        };

        match entry {
            DirectoryEntry::Image { path, .. } => {
                on_image_press(path.clone());
                Ok(NavOutcome::ImagePressed)
            }
            DirectoryEntry::Folder { path, .. } => {
                let path = path.clone();
                self.enter_folder(&path).await
            }
        }
    }

    async fn load(&mut self, target: CurrentDirectory) -> Result<NavOutcome, BrowseError> {
        let path = target.resolve(&self.root).to_path_buf();
        let entries = self.list_directory(&path).await?;
        tracing::debug!("Now showing {:?}", path);
        self.state.replace_entries(target, entries);
        Ok(NavOutcome::Listed)
    }
}
