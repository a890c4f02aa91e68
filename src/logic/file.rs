//! File type detection and entry classification
//!
//! Pure functions for deciding which raw directory rows make it into the grid.

use crate::host::fs::RawEntry;
use crate::model::types::DirectoryEntry;

/// Extensions the gallery displays (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Check if a file name represents a displayable image based on extension
///
/// Supported formats: JPG/JPEG, PNG
///
/// # Examples
/// ```
/// use picstash::logic::file::is_image_file;
///
/// assert!(is_image_file("photo.jpg"));
/// assert!(is_image_file("IMAGE.PNG"));  // Case insensitive
/// assert!(is_image_file("scan.JpEg"));
/// assert!(!is_image_file("anim.gif"));
/// assert!(!is_image_file("notes.txt"));
/// assert!(!is_image_file("png"));       // Needs an actual extension
/// ```
pub fn is_image_file(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(candidate))
    })
}

/// Turn a raw host row into a grid entry
///
/// Directories become folders, image files become images, everything
/// else (other files, sockets, broken links) is dropped.
pub fn classify_entry(raw: RawEntry) -> Option<DirectoryEntry> {
    if raw.is_dir {
        return Some(DirectoryEntry::Folder {
            name: raw.name,
            path: raw.path,
            modified: raw.modified,
        });
    }

    if raw.is_file && is_image_file(&raw.name) {
        return Some(DirectoryEntry::Image {
            name: raw.name,
            path: raw.path,
            modified: raw.modified,
        });
    }

    None
}
