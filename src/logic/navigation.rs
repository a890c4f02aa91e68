//! Grid selection logic
//!
//! Pure functions for moving the selection around a three-column grid.
//! Movement clamps at the edges instead of wrapping.

use super::layout::GRID_COLUMNS;

/// Direction of a selection move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
    PageUp(usize),   // Number of visible rows
    PageDown(usize), // Number of visible rows
    First,
    Last,
}

/// Calculate the new selection index after a move
///
/// # Arguments
/// * `current` - Current selection index (None if no selection)
/// * `len` - Number of entries in the grid
/// * `movement` - The requested move
///
/// # Returns
/// * `Some(index)` - The new selection
/// * `None` - If the grid is empty
///
/// # Examples
/// ```
/// use picstash::logic::navigation::{move_selection, GridMove};
///
/// // Empty grid
/// assert_eq!(move_selection(None, 0, GridMove::Down), None);
///
/// // No selection yet: any move selects the first entry
/// assert_eq!(move_selection(None, 7, GridMove::Right), Some(0));
///
/// // Down moves one row (three entries)
/// assert_eq!(move_selection(Some(1), 7, GridMove::Down), Some(4));
///
/// // Down from the second-to-last row lands on the last entry
/// assert_eq!(move_selection(Some(5), 7, GridMove::Down), Some(6));
///
/// // Up from the first row stays put
/// assert_eq!(move_selection(Some(2), 7, GridMove::Up), Some(2));
/// ```
pub fn move_selection(current: Option<usize>, len: usize, movement: GridMove) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let Some(idx) = current.map(|i| i.min(last)) else {
        return Some(match movement {
            GridMove::Last => last,
            _ => 0,
        });
    };

    let next = match movement {
        GridMove::Left => idx.saturating_sub(1),
        GridMove::Right => (idx + 1).min(last),
        GridMove::Up => {
            if idx >= GRID_COLUMNS {
                idx - GRID_COLUMNS
            } else {
                idx
            }
        }
        GridMove::Down => {
            let row = idx / GRID_COLUMNS;
            let last_row = last / GRID_COLUMNS;
            if row < last_row {
                (idx + GRID_COLUMNS).min(last)
            } else {
                idx
            }
        }
        GridMove::PageUp(rows) => idx.saturating_sub(rows.max(1) * GRID_COLUMNS),
        GridMove::PageDown(rows) => (idx + rows.max(1) * GRID_COLUMNS).min(last),
        GridMove::First => 0,
        GridMove::Last => last,
    };

    Some(next)
}

/// Row of the grid an entry index sits in
pub fn row_of(index: usize) -> usize {
    index / GRID_COLUMNS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_right_clamp() {
        assert_eq!(move_selection(Some(0), 5, GridMove::Left), Some(0));
        assert_eq!(move_selection(Some(4), 5, GridMove::Right), Some(4));
        assert_eq!(move_selection(Some(2), 5, GridMove::Right), Some(3)); // Crosses rows
        assert_eq!(move_selection(Some(3), 5, GridMove::Left), Some(2));
    }

    #[test]
    fn test_up_down() {
        assert_eq!(move_selection(Some(4), 9, GridMove::Up), Some(1));
        assert_eq!(move_selection(Some(4), 9, GridMove::Down), Some(7));
        assert_eq!(move_selection(Some(7), 9, GridMove::Down), Some(7));
    }

    #[test]
    fn test_page_moves() {
        assert_eq!(move_selection(Some(0), 30, GridMove::PageDown(3)), Some(9));
        assert_eq!(move_selection(Some(28), 30, GridMove::PageDown(3)), Some(29));
        assert_eq!(move_selection(Some(10), 30, GridMove::PageUp(3)), Some(1));
        assert_eq!(move_selection(Some(2), 30, GridMove::PageUp(3)), Some(0));
        // Zero visible rows still moves one row
        assert_eq!(move_selection(Some(0), 30, GridMove::PageDown(0)), Some(3));
    }

    #[test]
    fn test_first_last() {
        assert_eq!(move_selection(Some(5), 8, GridMove::First), Some(0));
        assert_eq!(move_selection(Some(0), 8, GridMove::Last), Some(7));
        assert_eq!(move_selection(None, 8, GridMove::Last), Some(7));
    }

    #[test]
    fn test_stale_selection_is_clamped() {
        // Selection left over from a longer listing
        assert_eq!(move_selection(Some(40), 4, GridMove::Left), Some(2));
    }

    #[test]
    fn test_row_of() {
        assert_eq!(row_of(0), 0);
        assert_eq!(row_of(2), 0);
        assert_eq!(row_of(3), 1);
    }
}
