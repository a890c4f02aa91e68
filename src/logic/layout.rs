//! Grid layout calculation logic
//!
//! Pure functions for sizing grid cells and keeping the selection on screen.

/// The grid always has three columns
pub const GRID_COLUMNS: usize = 3;

/// Default horizontal margin subtracted from each cell (in terminal cells)
pub const DEFAULT_GRID_MARGIN: u16 = 2;

/// Lines under each thumbnail for the name and modification time
pub const CAPTION_LINES: u16 = 2;

/// Size of one grid cell in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

/// Calculate the grid cell size from the screen width
///
/// Width is `(screen_width / 3) - margin`. Terminal cells are roughly
/// twice as tall as they are wide, so a square thumbnail needs half as
/// many rows as columns, plus the caption lines.
///
/// # Examples
/// ```
/// use picstash::logic::layout::{calculate_cell_size, CellSize};
///
/// // 120 columns: 40 per column, minus 2 margin
/// assert_eq!(calculate_cell_size(120, 2), CellSize { width: 38, height: 21 });
///
/// // Tiny terminal never produces a zero-sized cell
/// assert_eq!(calculate_cell_size(3, 5), CellSize { width: 1, height: 3 });
/// ```
pub fn calculate_cell_size(screen_width: u16, margin: u16) -> CellSize {
    let width = (screen_width / GRID_COLUMNS as u16)
        .saturating_sub(margin)
        .max(1);
    let thumb_rows = (width / 2).max(1);

    CellSize {
        width,
        height: thumb_rows + CAPTION_LINES,
    }
}

/// Number of grid rows needed for `item_count` entries
///
/// # Examples
/// ```
/// use picstash::logic::layout::row_count;
///
/// assert_eq!(row_count(0), 0);
/// assert_eq!(row_count(1), 1);
/// assert_eq!(row_count(3), 1);
/// assert_eq!(row_count(4), 2);
/// ```
pub fn row_count(item_count: usize) -> usize {
    item_count.div_ceil(GRID_COLUMNS)
}

/// Number of whole rows that fit in `area_height`
pub fn visible_row_count(area_height: u16, cell_height: u16) -> usize {
    if cell_height == 0 {
        return 0;
    }
    ((area_height / cell_height) as usize).max(1)
}

/// Calculate the first visible row so the selected row stays on screen
///
/// Scrolls the minimum amount: the offset only changes when the selection
/// moves above the first visible row or below the last one.
///
/// # Examples
/// ```
/// use picstash::logic::layout::calculate_scroll_offset;
///
/// // Selection visible: offset unchanged
/// assert_eq!(calculate_scroll_offset(Some(2), 1, 3), 1);
///
/// // Selection below window: scroll down just enough
/// assert_eq!(calculate_scroll_offset(Some(5), 1, 3), 3);
///
/// // Selection above window: scroll up to it
/// assert_eq!(calculate_scroll_offset(Some(0), 2, 3), 0);
/// ```
pub fn calculate_scroll_offset(
    selected_row: Option<usize>,
    current_offset: usize,
    visible_rows: usize,
) -> usize {
    let Some(row) = selected_row else {
        return 0;
    };
    if visible_rows == 0 {
        return row;
    }

    if row < current_offset {
        row
    } else if row >= current_offset + visible_rows {
        row + 1 - visible_rows
    } else {
        current_offset
    }
}

/// Range of entry indices drawn for a given scroll window
pub fn visible_index_range(
    scroll_offset: usize,
    visible_rows: usize,
    item_count: usize,
) -> std::ops::Range<usize> {
    let start = (scroll_offset * GRID_COLUMNS).min(item_count);
    let end = ((scroll_offset + visible_rows) * GRID_COLUMNS).min(item_count);
    start..end
}
