//! Path Utilities
//!
//! Parent computation for back navigation, display paths, and file URIs.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Compute the parent of a directory, dropping its last component
///
/// Trailing separators are ignored. Works on the raw `OsStr`, so names
/// that are not valid UTF-8 survive. Returns `None` when there is nothing
/// to drop (a bare name or the filesystem root).
///
/// # Example
/// ```
/// use picstash::logic::path::parent_of;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(parent_of(Path::new("/sdcard/Pictures/Vacation")), Some(PathBuf::from("/sdcard/Pictures")));
/// assert_eq!(parent_of(Path::new("/sdcard")), Some(PathBuf::from("/")));
/// assert_eq!(parent_of(Path::new("/")), None);
/// assert_eq!(parent_of(Path::new("Pictures")), None);
/// ```
pub fn parent_of(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Check whether `path` lies strictly below `root`
pub fn is_strictly_within(path: &Path, root: &Path) -> bool {
    path != root && path.starts_with(root)
}

/// Path shown in the header/status bar, relative to the browse root
///
/// # Example
/// ```
/// use picstash::logic::path::display_path;
/// use std::path::Path;
///
/// let root = Path::new("/home/me/Pictures");
/// assert_eq!(display_path(Path::new("/home/me/Pictures"), root), "Pictures");
/// assert_eq!(display_path(Path::new("/home/me/Pictures/2024/June"), root), "Pictures/2024/June");
/// assert_eq!(display_path(Path::new("/elsewhere"), root), "/elsewhere");
/// ```
pub fn display_path(path: &Path, root: &Path) -> String {
    let root_label = root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    match path.strip_prefix(root) {
        Ok(rest) if rest.as_os_str().is_empty() => root_label,
        Ok(rest) => {
            let separator = if root_label.ends_with(MAIN_SEPARATOR) { "" } else { "/" };
            format!("{}{}{}", root_label, separator, rest.display())
        }
        Err(_) => path.display().to_string(),
    }
}

/// Convert an image path into a `file://` URI
///
/// # Example
/// ```
/// use picstash::logic::path::to_file_uri;
/// use std::path::Path;
///
/// assert_eq!(to_file_uri(Path::new("/sdcard/Pictures/a.png")), "file:///sdcard/Pictures/a.png");
/// ```
pub fn to_file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}
