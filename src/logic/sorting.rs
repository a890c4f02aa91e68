//! Sorting comparison logic
//!
//! Pure functions for ordering directory entries in the grid.

use crate::model::types::DirectoryEntry;
use std::cmp::Ordering;

/// Compare two entries by modification time, newest first
///
/// # Sort Rules
/// - More recently modified entries come first
/// - Folders and images are compared the same way (no folders-first rule)
/// - If either side has no modification time the pair compares `Equal`,
///   leaving their relative order to the (stable) sort
/// - No name tie-breaking
pub fn compare_entries(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    match (a.modified(), b.modified()) {
        (Some(a_time), Some(b_time)) => b_time.cmp(&a_time),
        _ => Ordering::Equal,
    }
}

/// Sort entries in place, newest first
///
/// `compare_entries` is not a total order once undated entries are mixed
/// in, and `slice::sort_by` may panic on such comparators. Dated entries
/// are therefore stably sorted among themselves and written back into the
/// slots dated entries occupied; undated entries stay where they were.
pub fn sort_entries(entries: &mut Vec<DirectoryEntry>) {
    let dated_slots: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.modified().is_some())
        .map(|(idx, _)| idx)
        .collect();

    if dated_slots.is_empty() {
        return;
    }

    let mut dated: Vec<DirectoryEntry> = dated_slots
        .iter()
        .map(|&idx| entries[idx].clone())
        .collect();
    dated.sort_by(compare_entries);

    for (slot, entry) in dated_slots.into_iter().zip(dated) {
        entries[slot] = entry;
    }
}
