//! Host permission access
//!
//! Which permission is needed depends on the platform: media-images on
//! newer Android, generic storage read on older Android, nothing on
//! desktop.

use crate::Platform;
use std::io;
use std::path::PathBuf;

/// First Android API level with the granular media-images permission
pub const MEDIA_IMAGES_MIN_API_LEVEL: u32 = 33;

/// Permission the host is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionKind {
    MediaImages,
    ReadExternalStorage,
}

impl PermissionKind {
    /// Title of the host's request dialog
    pub fn rationale_title(&self) -> &'static str {
        match self {
            PermissionKind::MediaImages => "Permission to Access Media",
            PermissionKind::ReadExternalStorage => "Permission to Access Storage",
        }
    }

    /// Body of the host's request dialog
    pub fn rationale_message(&self) -> &'static str {
        match self {
            PermissionKind::MediaImages => {
                "This app needs access to your media to display images."
            }
            PermissionKind::ReadExternalStorage => {
                "This app needs access to your storage to display images."
            }
        }
    }
}

/// Outcome of an access request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGrant {
    Granted,
    Denied,
}

impl AccessGrant {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessGrant::Granted)
    }
}

/// Permission required on `platform`, if any
///
/// # Examples
/// ```
/// use picstash::Platform;
/// use picstash::host::permissions::{required_permission, PermissionKind};
///
/// assert_eq!(required_permission(Platform::Desktop), None);
/// assert_eq!(
///     required_permission(Platform::Android { api_level: 34 }),
///     Some(PermissionKind::MediaImages)
/// );
/// assert_eq!(
///     required_permission(Platform::Android { api_level: 30 }),
///     Some(PermissionKind::ReadExternalStorage)
/// );
/// ```
pub fn required_permission(platform: Platform) -> Option<PermissionKind> {
    match platform {
        Platform::Desktop => None,
        Platform::Android { api_level } if api_level >= MEDIA_IMAGES_MIN_API_LEVEL => {
            Some(PermissionKind::MediaImages)
        }
        Platform::Android { .. } => Some(PermissionKind::ReadExternalStorage),
    }
}

/// Host side of a permission request
#[allow(async_fn_in_trait)]
pub trait PermissionHost {
    async fn request_permission(&self, kind: PermissionKind) -> io::Result<AccessGrant>;
}

/// Grants access while the storage root can be listed
///
/// Revoking read access on the root (e.g. `chmod -r`) is picked up by the
/// next request.
#[derive(Debug, Clone)]
pub struct FsPermissionHost {
    root: PathBuf,
}

impl FsPermissionHost {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PermissionHost for FsPermissionHost {
    async fn request_permission(&self, kind: PermissionKind) -> io::Result<AccessGrant> {
        tracing::debug!("Requesting {:?} for {:?}", kind, self.root);

        match tokio::fs::read_dir(&self.root).await {
            Ok(_) => Ok(AccessGrant::Granted),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Ok(AccessGrant::Denied),
            Err(e) => Err(e),
        }
    }
}

/// Ask the host for whatever `platform` requires
///
/// Platforms without a permission model are granted without asking. A
/// failed request counts as a denial.
pub async fn request_access<P: PermissionHost>(host: &P, platform: Platform) -> AccessGrant {
    let Some(kind) = required_permission(platform) else {
        return AccessGrant::Granted;
    };

    match host.request_permission(kind).await {
        Ok(grant) => grant,
        Err(e) => {
            tracing::warn!("Permission request for {:?} failed: {}", kind, e);
            AccessGrant::Denied
        }
    }
}
