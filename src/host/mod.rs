//! Host Seams
//!
//! Traits for the two host capabilities the browser consumes, with
//! local-filesystem implementations:
//! - fs: Directory listing (`HostFs`, `LocalFs`)
//! - permissions: Storage access requests (`PermissionHost`, `FsPermissionHost`)

pub mod fs;
pub mod permissions;

pub use fs::{HostFs, LocalFs, RawEntry};
pub use permissions::{AccessGrant, FsPermissionHost, PermissionHost, PermissionKind};
