//! Navigation methods
//!
//! Methods that drive the directory browser and turn its errors into
//! alerts:
//! - Mounting (first listing)
//! - Entering folders and opening images
//! - Going back and refreshing
//! - Moving the grid selection

use picstash::logic::navigation::{move_selection, GridMove};
use picstash::{BrowseError, NavOutcome};

use crate::App;

impl App {
    /// First listing of the start directory
    pub(crate) async fn mount_browser(&mut self) {
        let result = self.browser.mount().await;
        self.apply_browse_result(result);
    }

    /// Press the selected cell: enter a folder or open the viewer
    pub(crate) async fn open_selected(&mut self) {
        let Some(index) = self.browser.state().selected_index else {
            return;
        };

        let model = &mut self.model;
        let result = self
            .browser
            .press(index, |path| model.on_image_press(path))
            .await;

        if let Ok(NavOutcome::ImagePressed) = result {
            self.request_viewer_image();
        }
        self.apply_browse_result(result);
    }

    pub(crate) async fn go_back(&mut self) {
        let result = self.browser.go_back().await;
        self.apply_browse_result(result);
    }

    pub(crate) async fn refresh_directory(&mut self) {
        let result = self.browser.refresh().await;
        self.apply_browse_result(result);
    }

    pub(crate) fn move_grid_selection(&mut self, movement: GridMove) {
        let state = self.browser.state_mut();
        state.selected_index = move_selection(state.selected_index, state.entries.len(), movement);
    }

    /// Visible rows from the last frame (for page moves)
    pub(crate) fn page_rows(&self) -> usize {
        self.model.ui.grid_visible_rows.max(1)
    }

    fn apply_browse_result(&mut self, result: Result<NavOutcome, BrowseError>) {
        match result {
            Ok(NavOutcome::Listed) => {
                // New directory: old thumbnails are off screen for good
                self.thumbnail_map.clear();
                self.model.ui.sixel_cleanup_frames = 1;
            }
            Ok(NavOutcome::AtRoot) => {
                tracing::debug!("Already at {:?}", self.browser.root());
            }
            Ok(NavOutcome::ImagePressed) | Ok(NavOutcome::Ignored) => {}
            Err(err) => {
                let message = err.alert_message(self.browser.platform());
                self.model.ui.show_alert(err.alert_title(), message);
            }
        }
    }
}
