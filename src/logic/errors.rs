use std::path::PathBuf;
use thiserror::Error;

use crate::host::permissions::required_permission;
use crate::Platform;

/// Failures of a browse operation; both are shown to the user as an alert
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Storage permission was not granted, the directory was never read
    #[error("Cannot access storage without permission.")]
    AccessDenied,

    /// The host could not list the directory
    #[error("Cannot read {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BrowseError {
    /// Title of the alert dialog for this error
    pub fn alert_title(&self) -> &'static str {
        match self {
            BrowseError::AccessDenied => "Permission Denied",
            BrowseError::DirectoryUnreadable { .. } => "Cannot Read Directory",
        }
    }

    /// Body of the alert dialog
    ///
    /// A denial explains why the permission `platform` needs is wanted;
    /// an unreadable directory names the path and the root cause.
    pub fn alert_message(&self, platform: Platform) -> String {
        match self {
            BrowseError::AccessDenied => match required_permission(platform) {
                Some(kind) => format!(
                    "{}\n\n{}: {}",
                    self,
                    kind.rationale_title(),
                    kind.rationale_message()
                ),
                None => self.to_string(),
            },
            BrowseError::DirectoryUnreadable { path, .. } => {
                format!("{}\n\n{}", path.display(), format_error_message(self))
            }
        }
    }
}

/// Format error message for display - show the root cause
pub fn format_error_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}
