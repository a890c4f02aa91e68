use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top header (title + current directory)
    pub header_area: Rect,
    /// Entry grid
    pub grid_area: Rect,
    /// Hotkey legend (if there's space)
    pub legend_area: Option<Rect>,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    // Drop the legend on short terminals so the grid keeps a full row
    let legend_height = if terminal_size.height >= 16 { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header (border, text, border)
            Constraint::Min(3),                // Grid
            Constraint::Length(legend_height), // Legend
            Constraint::Length(1),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        grid_area: chunks[1],
        legend_area: if legend_height > 0 { Some(chunks[2]) } else { None },
        status_area: chunks[3],
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
