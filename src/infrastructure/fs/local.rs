//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use std::fs::File;
use std::io;
use std::path::Path;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;
        }
        // Opened separately so a failure names the side that failed
        let mut source = File::open(from).map_err(|e| FsError::from_io(from, e))?;
        let mut destination = File::create(to).map_err(|e| FsError::from_io(to, e))?;
        io::copy(&mut source, &mut destination)
            .map(|_| ())
            .map_err(|e| FsError::from_io(to, e))
    }
}
