//! In-memory host shared by the integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use picstash::host::{AccessGrant, HostFs, PermissionHost, PermissionKind, RawEntry};

/// Directory tree held in memory, with a read counter
pub struct MemoryFs {
    root: PathBuf,
    dirs: HashMap<PathBuf, Vec<RawEntry>>,
    unreadable: RefCell<HashSet<PathBuf>>,
    pub reads: Cell<usize>,
}

impl MemoryFs {
    pub fn new(root: &str) -> Self {
        let mut dirs = HashMap::new();
        dirs.insert(PathBuf::from(root), Vec::new());
        Self {
            root: PathBuf::from(root),
            dirs,
            unreadable: RefCell::new(HashSet::new()),
            reads: Cell::new(0),
        }
    }

    /// Add a child to `parent`; folders also become listable
    pub fn add(&mut self, parent: &str, entry: RawEntry) {
        if entry.is_dir {
            self.dirs.entry(entry.path.clone()).or_default();
        }
        self.dirs.entry(PathBuf::from(parent)).or_default().push(entry);
    }

    /// Make every further read of `path` fail
    pub fn break_dir(&self, path: &str) {
        self.unreadable.borrow_mut().insert(PathBuf::from(path));
    }
}

impl HostFs for MemoryFs {
    fn storage_root(&self) -> &Path {
        &self.root
    }

    async fn read_directory(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        self.reads.set(self.reads.get() + 1);
        if self.unreadable.borrow().contains(path) {
            return Err(io::Error::new(io::ErrorKind::Other, "I/O error"));
        }
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))
    }
}

/// Permission host with a fixed answer, counting requests
pub struct FixedPermission {
    pub grant: AccessGrant,
    pub requests: Cell<usize>,
}

impl FixedPermission {
    pub fn granted() -> Self {
        Self {
            grant: AccessGrant::Granted,
            requests: Cell::new(0),
        }
    }

    pub fn denied() -> Self {
        Self {
            grant: AccessGrant::Denied,
            requests: Cell::new(0),
        }
    }
}

impl PermissionHost for FixedPermission {
    async fn request_permission(&self, _kind: PermissionKind) -> io::Result<AccessGrant> {
        self.requests.set(self.requests.get() + 1);
        Ok(self.grant)
    }
}

pub fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

fn raw(parent: &str, name: &str, is_dir: bool, modified: Option<SystemTime>) -> RawEntry {
    RawEntry {
        name: name.to_string(),
        path: Path::new(parent).join(name),
        is_file: !is_dir,
        is_dir,
        modified,
    }
}

pub fn file(parent: &str, name: &str, secs: u64) -> RawEntry {
    raw(parent, name, false, Some(at(secs)))
}

pub fn folder(parent: &str, name: &str, secs: u64) -> RawEntry {
    raw(parent, name, true, Some(at(secs)))
}

pub fn undated_file(parent: &str, name: &str) -> RawEntry {
    raw(parent, name, false, None)
}
