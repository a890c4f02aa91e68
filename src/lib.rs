//! PicStash Library
//!
//! Exposes the directory browser and its host seams for testing

pub mod browser;
pub mod host;
pub mod logic;
pub mod model;

pub use browser::{DirectoryBrowser, NavOutcome};
pub use logic::errors::BrowseError;
pub use model::types::{CurrentDirectory, DirectoryEntry, SelectedImage};

/// Header text shown above the grid
pub const APP_TITLE: &str = "PicStash";

/// Host platform, decides which storage permission must be requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Desktop,                       // No permission request at all
    Android { api_level: u32 },    // Media or storage permission depending on version
}

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Desktop => "desktop",
            Platform::Android { .. } => "android",
        }
    }
}
