use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::{FsnormError, FsnormResult, error::ErrorKind};

use super::FilePath;
use super::traits::{Pal, ReadSeek};

/* 📖 # Why use std::fs instead of async or other crates?

The probe is a strictly linear sequence of a handful of syscalls.
std::fs maps onto them one to one and never touches the names it is given,
which is exactly what an experiment about name handling needs.
*/

/// Concrete PAL implementation using the real filesystem via std::fs.
///
/// All file paths are resolved relative to a configured base directory.
#[derive(Debug)]
pub struct RealPal {
    base_dir: PathBuf,
}

impl RealPal {
    /// Create a new RealPal with the given base directory.
    ///
    /// # Arguments
    /// * `base_dir` - All paths will be resolved relative to this directory
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve a FilePath to a filesystem path below the base directory.
    fn resolve_path(&self, path: &FilePath) -> PathBuf {
        path.as_relative().to_path(&self.base_dir)
    }
}

impl Pal for RealPal {
    #[instrument(skip(self), fields(path = %path))]
    fn file_exists(&self, path: &FilePath) -> FsnormResult<bool> {
        let resolved = self.resolve_path(path);
        let exists = resolved.exists();
        debug!(exists, resolved = %resolved.display(), "checked file existence");
        Ok(exists)
    }

    #[instrument(skip(self), fields(path = %path))]
    fn create_directory(&self, path: &FilePath) -> FsnormResult<()> {
        let resolved = self.resolve_path(path);
        debug!(resolved = %resolved.display(), "creating directory");
        fs::create_dir(&resolved).map_err(|e| {
            debug!(error = %e, "failed to create directory");
            Box::new(FsnormError::new(ErrorKind::CreateDirectory {
                path: resolved,
                source: e,
            }))
        })?;
        debug!("directory created successfully");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %path))]
    fn create_file(&self, path: &FilePath) -> FsnormResult<Box<dyn Write>> {
        let resolved = self.resolve_path(path);
        debug!(resolved = %resolved.display(), "creating file");
        let file = fs::File::create(&resolved).map_err(|e| {
            debug!(error = %e, "failed to create file");
            Box::new(FsnormError::new(ErrorKind::WriteFile {
                path: resolved,
                source: e,
            }))
        })?;
        debug!("file created successfully");
        Ok(Box::new(file))
    }

    #[instrument(skip(self), fields(path = %path))]
    fn read_file(&self, path: &FilePath) -> FsnormResult<Box<dyn ReadSeek + 'static>> {
        let resolved = self.resolve_path(path);
        debug!(resolved = %resolved.display(), "opening file for reading");
        let file = fs::File::open(&resolved).map_err(|e| {
            debug!(error = %e, "failed to open file");
            Box::new(FsnormError::new(ErrorKind::ReadFile {
                path: resolved,
                source: e,
            }))
        })?;
        debug!("file opened successfully");
        Ok(Box::new(file))
    }

    #[instrument(skip(self), fields(path = %path))]
    fn list_directory(&self, path: &FilePath) -> FsnormResult<Vec<String>> {
        let resolved = self.resolve_path(path);
        debug!(resolved = %resolved.display(), "listing directory");
        let list_error = |e: std::io::Error| {
            debug!(error = %e, "failed to list directory");
            Box::new(FsnormError::new(ErrorKind::ListDirectory {
                path: resolved.clone(),
                source: e,
            }))
        };
        let mut names = Vec::new();
        for entry in fs::read_dir(&resolved).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        debug!(entry_count = names.len(), "directory listed successfully");
        Ok(names)
    }

    #[instrument(skip(self), fields(path = %path))]
    fn remove_directory_all(&self, path: &FilePath) -> FsnormResult<()> {
        let resolved = self.resolve_path(path);
        debug!(resolved = %resolved.display(), "removing directory and contents");
        fs::remove_dir_all(&resolved).map_err(|e| {
            debug!(error = %e, "failed to remove directory");
            Box::new(FsnormError::new(ErrorKind::RemoveDirectory {
                path: resolved,
                source: e,
            }))
        })?;
        debug!("directory removed successfully");
        Ok(())
    }
}
