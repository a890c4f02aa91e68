//! Navigation Model
//!
//! This sub-model contains all state owned by the directory browser:
//! the current directory, its entries, and the grid selection.

use super::types::{CurrentDirectory, DirectoryEntry};

/// Navigation state (current directory, listing, selection)
#[derive(Clone, Debug, Default)]
pub struct NavigationModel {
    /// Directory currently shown
    pub current: CurrentDirectory,

    /// Entries of the last successful listing
    pub entries: Vec<DirectoryEntry>,

    /// Selected grid cell
    pub selected_index: Option<usize>,

    /// First visible grid row
    pub scroll_offset: usize,

    /// Whether a listing has ever succeeded (false = grid never populated)
    pub loaded: bool,
}

impl NavigationModel {
    /// Create initial navigation model at the root
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected entry, if any
    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.selected_index.and_then(|idx| self.entries.get(idx))
    }

    /// Replace the listing after a successful read
    pub fn replace_entries(&mut self, current: CurrentDirectory, entries: Vec<DirectoryEntry>) {
        self.selected_index = if entries.is_empty() { None } else { Some(0) };
        self.scroll_offset = 0;
        self.current = current;
        self.entries = entries;
        self.loaded = true;
    }
}
