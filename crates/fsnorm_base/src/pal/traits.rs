use std::io::{Read, Seek, Write};
use std::sync::Arc;

use crate::FsnormResult;
use crate::error::{ErrorKind, FsnormError};

use super::file_path::FilePath;

/* 📖 # What is the Platform Abstraction Layer (PAL)?

The PAL is the seam between the probe and the filesystem it interrogates:
- RealPal runs the operations against the host filesystem via std::fs
- MockPal keeps an in-memory directory tree whose name handling can be switched
  between preserving and normalizing, and which can fail any operation on demand

The probe only ever talks to `dyn Pal`, so both the normalizing and the
non-normalizing outcome, and every environment failure, are reachable in unit tests.
*/

/// Trait combining Read + Seek for file operations.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Platform Abstraction Layer (PAL) trait providing the filesystem operations the probe needs.
///
/// Each operation reports failures with its own [`ErrorKind`] variant.
pub trait Pal: std::fmt::Debug + Send + Sync + 'static {
    /// Check if a file or directory exists at the given path.
    fn file_exists(&self, path: &FilePath) -> FsnormResult<bool>;

    /// Create a single directory. Fails if it already exists or the parent is missing.
    fn create_directory(&self, path: &FilePath) -> FsnormResult<()>;

    /// Create a new file, overwriting if it exists.
    fn create_file(&self, path: &FilePath) -> FsnormResult<Box<dyn Write>>;

    /// Write `contents` to a file, replacing anything stored under that name.
    fn write_file(&self, path: &FilePath, contents: &[u8]) -> FsnormResult<()> {
        let mut writer = self.create_file(path)?;
        writer
            .write_all(contents)
            .and_then(|()| writer.flush())
            .map_err(|e| {
                Box::new(FsnormError::new(ErrorKind::WriteFile {
                    path: path.as_path().to_path_buf(),
                    source: e,
                }))
            })
    }

    /// Open a file for reading.
    fn read_file(&self, path: &FilePath) -> FsnormResult<Box<dyn ReadSeek + 'static>>;

    /// Read the entire file contents.
    fn read_file_to_bytes(&self, path: &FilePath) -> FsnormResult<Vec<u8>> {
        let mut reader = self.read_file(path)?;
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).map_err(|e| {
            Box::new(FsnormError::new(ErrorKind::ReadFile {
                path: path.as_path().to_path_buf(),
                source: e,
            }))
        })?;
        Ok(contents)
    }

    /// List the names of the entries directly inside a directory.
    ///
    /// Names are returned exactly as the filesystem reports them, in no particular order.
    /// Names that are not valid UTF-8 are converted lossily.
    fn list_directory(&self, path: &FilePath) -> FsnormResult<Vec<String>>;

    /// Remove a directory and all its contents.
    fn remove_directory_all(&self, path: &FilePath) -> FsnormResult<()>;
}

/// Handle to a PAL implementation, enabling shared ownership.
///
/// Internally wraps `Arc<dyn Pal>` for cheap cloning.
///
/// # Examples
///
/// ```no_run
/// use fsnorm_base::{RealPal, PalHandle};
///
/// let pal = PalHandle::new(RealPal::new(".".into()));
/// let pal_clone = pal.clone(); // Cheap clone, shares the same implementation
/// ```
#[derive(Debug, Clone)]
pub struct PalHandle(Arc<dyn Pal>);

impl PalHandle {
    /// Create a new PalHandle from a Pal implementation.
    pub fn new(pal: impl Pal + 'static) -> Self {
        Self(Arc::new(pal))
    }
}

impl std::ops::Deref for PalHandle {
    type Target = dyn Pal;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
