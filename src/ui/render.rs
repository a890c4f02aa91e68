use crate::App;
use picstash::logic::path::display_path;
use picstash::model::{Mode, NavigationModel};
use picstash::APP_TITLE;
use ratatui::Frame;

use super::{
    dialogs, grid, header, layout, legend,
    status_bar::{self, EntryCounts},
    viewer,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);

    let location = display_path(app.browser.current_dir(), app.browser.root());
    let at_root = app.browser.current().is_root();
    let platform = app.browser.platform();

    // Header
    header::render_header(f, layout_info.header_area, APP_TITLE, &location);

    // Grid (hidden behind the viewer while one is open)
    let viewing = matches!(app.model.mode(), Mode::Viewing { .. });
    if !viewing {
        let NavigationModel {
            entries,
            selected_index,
            scroll_offset,
            loaded,
            ..
        } = app.browser.state_mut();

        let view = grid::GridView {
            title: &location,
            entries,
            selected_index: *selected_index,
            loaded: *loaded,
            cell_size: app.model.ui.cell_size,
            icons: &app.icon_renderer,
        };
        let thumbnails = if app.model.ui.thumbnails_enabled {
            Some(&mut app.thumbnail_map)
        } else {
            None
        };
        app.model.ui.grid_visible_rows =
            grid::render_grid(f, layout_info.grid_area, &view, scroll_offset, thumbnails);
    }

    // Legend
    if let Some(legend_area) = layout_info.legend_area {
        legend::render_legend(f, legend_area, app.model.ui.vim_mode, at_root);
    }

    // Status bar
    let state = app.browser.state();
    let counts = EntryCounts {
        folders: state.entries.iter().filter(|e| e.is_folder()).count(),
        images: state.entries.iter().filter(|e| e.is_image()).count(),
    };
    let selected = state
        .selected_index
        .and_then(|idx| state.entries.get(idx).map(|entry| (idx, entry.name())));
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        counts,
        selected,
        platform.as_str(),
    );

    // Full-screen viewer
    if let Some(image) = &app.model.selected_image {
        let image_state = app.viewer_image.get_mut(&image.path);
        viewer::render_viewer(f, true, &image.path, image_state);
    }

    // Alert on top of everything
    if let Some(alert) = &app.model.ui.alert {
        dialogs::render_alert(f, alert);
    }
}
