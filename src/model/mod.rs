//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **NavigationModel**: Current directory, entries, grid selection
//!   (owned by the `DirectoryBrowser`)
//! - **UiModel**: Preferences, alert dialog, visual state
//!
//! The root `Model` holds the one piece of root-controller state: which
//! image, if any, is open in the full-screen viewer.

pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

use std::path::PathBuf;

/// Root application model
#[derive(Clone, Debug)]
pub struct Model {
    /// Image shown in the full-screen viewer (None = browsing)
    pub selected_image: Option<SelectedImage>,

    /// UI preferences and dialogs
    pub ui: UiModel,
}

impl Model {
    /// Create initial model in the browsing state
    pub fn new(vim_mode: bool) -> Self {
        Self {
            selected_image: None,
            ui: UiModel::new(vim_mode),
        }
    }

    /// Current root controller state
    pub fn mode(&self) -> Mode<'_> {
        match &self.selected_image {
            Some(image) => Mode::Viewing { path: &image.path },
            None => Mode::Browsing,
        }
    }

    /// Browsing -> Viewing
    pub fn on_image_press(&mut self, path: PathBuf) {
        tracing::debug!("Opening viewer for {:?}", path);
        self.selected_image = Some(SelectedImage { path });
    }

    /// Viewing -> Browsing
    pub fn on_viewer_close(&mut self) {
        if self.selected_image.take().is_some() {
            // Terminal graphics may linger after the overlay is gone
            self.ui.sixel_cleanup_frames = 1;
        }
    }
}
