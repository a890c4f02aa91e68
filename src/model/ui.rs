//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the alert dialog, and visual state.

use super::types::{Alert, VimCommandState};
use crate::logic::layout::{calculate_cell_size, CellSize, DEFAULT_GRID_MARGIN};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Whether image cells load thumbnails
    pub thumbnails_enabled: bool,

    // ============================================
    // DIALOGS
    // ============================================
    /// Blocking alert (permission denied, unreadable directory)
    pub alert: Option<Alert>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Grid cell size, computed once at startup
    pub cell_size: CellSize,

    /// Grid rows that fit on screen in the last frame
    pub grid_visible_rows: usize,

    /// Sixel cleanup counter (render white screen for N frames)
    pub sixel_cleanup_frames: u8,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            thumbnails_enabled: true,
            alert: None,
            cell_size: calculate_cell_size(80, DEFAULT_GRID_MARGIN),
            grid_visible_rows: 0,
            sixel_cleanup_frames: 0,
            should_quit: false,
        }
    }

    /// Check if a blocking dialog is showing
    pub fn has_modal(&self) -> bool {
        self.alert.is_some()
    }

    /// Show an alert, replacing any previous one
    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.alert = Some(Alert {
            title: title.into(),
            message: message.into(),
        });
    }

    /// Dismiss the alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
