use std::collections::{HashMap, HashSet};
use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use unicode_normalization::UnicodeNormalization;

use crate::FsnormError;
use crate::FsnormResult;
use crate::error::ErrorKind;

use super::FilePath;
use super::traits::{Pal, ReadSeek};

/// How a simulated filesystem treats the bytes of the names it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameNormalization {
    /// Names are stored byte for byte; canonically equivalent names are distinct entries.
    #[default]
    Preserve,
    /// Names are stored and looked up in Unicode Normalization Form C.
    Nfc,
    /// Names are stored and looked up in Unicode Normalization Form D, like HFS+.
    Nfd,
}

impl NameNormalization {
    /// Returns the form under which `name` is stored and looked up.
    pub fn apply(self, name: &str) -> String {
        match self {
            NameNormalization::Preserve => name.to_string(),
            NameNormalization::Nfc => name.nfc().collect(),
            NameNormalization::Nfd => name.nfd().collect(),
        }
    }
}

/// A PAL operation that [`MockPal`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PalOperation {
    CreateDirectory,
    CreateFile,
    ListDirectory,
    ReadFile,
    RemoveDirectory,
}

/* 📖 # How does MockPal simulate a normalizing filesystem?

Every path passes through NameNormalization::apply before it touches the maps,
on writes and lookups alike. With Nfc or Nfd two canonically equivalent names
collapse onto one key, so the second write replaces the first and both names
read back the same bytes. With Preserve the keys stay distinct.

State sits behind Arc<Mutex<_>> so clones handed to a PalHandle share it with
the test that set it up.
*/

/// In-memory PAL implementation for testing.
///
/// # Examples
///
/// ```
/// use fsnorm_base::{FilePath, MockPal, NameNormalization, Pal};
///
/// let mock = MockPal::with_normalization(NameNormalization::Nfc);
/// mock.add_file(FilePath::from("o\u{0308}.txt"), b"content".to_vec());
/// let content = mock.read_file_to_bytes(&FilePath::from("\u{00F6}.txt")).unwrap();
/// assert_eq!(content, b"content");
/// ```
#[derive(Debug, Clone)]
pub struct MockPal {
    normalization: NameNormalization,
    files: Arc<Mutex<HashMap<FilePath, Vec<u8>>>>,
    directories: Arc<Mutex<HashSet<FilePath>>>,
    failures: Arc<Mutex<HashMap<PalOperation, usize>>>,
}

impl MockPal {
    /// Create a new empty MockPal that preserves names byte for byte.
    pub fn new() -> Self {
        Self::with_normalization(NameNormalization::Preserve)
    }

    /// Create a new empty MockPal that stores names in the given form.
    pub fn with_normalization(normalization: NameNormalization) -> Self {
        Self {
            normalization,
            files: Arc::new(Mutex::new(HashMap::new())),
            directories: Arc::new(Mutex::new(HashSet::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a file to the mock storage.
    pub fn add_file(&self, path: FilePath, content: Vec<u8>) {
        let key = self.key(&path);
        self.files.lock().unwrap().insert(key, content);
    }

    /// Add a directory to the mock storage.
    pub fn add_directory(&self, path: FilePath) {
        let key = self.key(&path);
        self.directories.lock().unwrap().insert(key);
    }

    /// Make every subsequent call of `operation` fail.
    pub fn fail_operation(&self, operation: PalOperation) {
        self.fail_operation_after(operation, 0);
    }

    /// Let `successes` more calls of `operation` through, then fail every call after them.
    pub fn fail_operation_after(&self, operation: PalOperation, successes: usize) {
        self.failures.lock().unwrap().insert(operation, successes);
    }

    /// Number of directories currently stored.
    pub fn directory_count(&self) -> usize {
        self.directories.lock().unwrap().len()
    }

    /// Number of files currently stored.
    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    fn key(&self, path: &FilePath) -> FilePath {
        FilePath::from(self.normalization.apply(path.as_str()))
    }

    fn injected_failure(&self, operation: PalOperation, path: &FilePath) -> FsnormResult<()> {
        let mut failures = self.failures.lock().unwrap();
        if let Some(remaining) = failures.get_mut(&operation) {
            if *remaining > 0 {
                *remaining -= 1;
                return Ok(());
            }
            let source = io::Error::other(format!("injected {:?} failure", operation));
            return Err(Box::new(FsnormError::new(error_kind(operation, path, source))));
        }
        Ok(())
    }

    fn directory_exists(&self, key: &FilePath) -> bool {
        key.as_str().is_empty() || self.directories.lock().unwrap().contains(key)
    }

    fn parent_exists(&self, key: &FilePath) -> bool {
        key.parent()
            .map(|parent| self.directory_exists(&parent))
            .unwrap_or(false)
    }
}

impl Default for MockPal {
    fn default() -> Self {
        Self::new()
    }
}

fn error_kind(operation: PalOperation, path: &FilePath, source: io::Error) -> ErrorKind {
    let path = path.as_path().to_path_buf();
    match operation {
        PalOperation::CreateDirectory => ErrorKind::CreateDirectory { path, source },
        PalOperation::CreateFile => ErrorKind::WriteFile { path, source },
        PalOperation::ListDirectory => ErrorKind::ListDirectory { path, source },
        PalOperation::ReadFile => ErrorKind::ReadFile { path, source },
        PalOperation::RemoveDirectory => ErrorKind::RemoveDirectory { path, source },
    }
}

fn mock_error(
    operation: PalOperation,
    path: &FilePath,
    kind: io::ErrorKind,
    message: &str,
) -> Box<FsnormError> {
    let source = io::Error::new(kind, format!("{}: {}", message, path));
    Box::new(FsnormError::new(error_kind(operation, path, source)))
}

impl Pal for MockPal {
    fn file_exists(&self, path: &FilePath) -> FsnormResult<bool> {
        let key = self.key(path);
        let is_file = self.files.lock().unwrap().contains_key(&key);
        Ok(is_file || self.directories.lock().unwrap().contains(&key))
    }

    fn create_directory(&self, path: &FilePath) -> FsnormResult<()> {
        self.injected_failure(PalOperation::CreateDirectory, path)?;
        let key = self.key(path);
        if !self.parent_exists(&key) {
            return Err(mock_error(
                PalOperation::CreateDirectory,
                path,
                io::ErrorKind::NotFound,
                "Parent directory not found",
            ));
        }
        let is_file = self.files.lock().unwrap().contains_key(&key);
        if is_file || !self.directories.lock().unwrap().insert(key) {
            return Err(mock_error(
                PalOperation::CreateDirectory,
                path,
                io::ErrorKind::AlreadyExists,
                "Entry already exists",
            ));
        }
        Ok(())
    }

    fn create_file(&self, path: &FilePath) -> FsnormResult<Box<dyn Write>> {
        self.injected_failure(PalOperation::CreateFile, path)?;
        let key = self.key(path);
        if !self.parent_exists(&key) {
            return Err(mock_error(
                PalOperation::CreateFile,
                path,
                io::ErrorKind::NotFound,
                "Parent directory not found",
            ));
        }
        // Return a writer that will store in the mock storage when dropped
        Ok(Box::new(MockFileWriter {
            key,
            files: Arc::clone(&self.files),
            buffer: Vec::new(),
        }))
    }

    fn read_file(&self, path: &FilePath) -> FsnormResult<Box<dyn ReadSeek + 'static>> {
        self.injected_failure(PalOperation::ReadFile, path)?;
        let key = self.key(path);
        let files = self.files.lock().unwrap();
        let content = files
            .get(&key)
            .ok_or_else(|| {
                mock_error(
                    PalOperation::ReadFile,
                    path,
                    io::ErrorKind::NotFound,
                    "File not found",
                )
            })?
            .clone();
        Ok(Box::new(Cursor::new(content)))
    }

    fn list_directory(&self, path: &FilePath) -> FsnormResult<Vec<String>> {
        self.injected_failure(PalOperation::ListDirectory, path)?;
        let key = self.key(path);
        if !self.directory_exists(&key) {
            return Err(mock_error(
                PalOperation::ListDirectory,
                path,
                io::ErrorKind::NotFound,
                "Directory not found",
            ));
        }
        let is_child = |entry: &FilePath| entry.parent().as_ref() == Some(&key);
        let directories = self.directories.lock().unwrap();
        let files = self.files.lock().unwrap();
        Ok(files
            .keys()
            .chain(directories.iter())
            .filter(|entry| is_child(*entry))
            .filter_map(|entry| entry.file_name().map(str::to_string))
            .collect())
    }

    fn remove_directory_all(&self, path: &FilePath) -> FsnormResult<()> {
        self.injected_failure(PalOperation::RemoveDirectory, path)?;
        let key = self.key(path);
        let mut directories = self.directories.lock().unwrap();
        if !directories.remove(&key) {
            return Err(mock_error(
                PalOperation::RemoveDirectory,
                path,
                io::ErrorKind::NotFound,
                "Directory not found",
            ));
        }
        let inside = |entry: &FilePath| entry.as_relative().starts_with(key.as_relative());
        directories.retain(|entry| !inside(entry));
        self.files.lock().unwrap().retain(|entry, _| !inside(entry));
        Ok(())
    }
}

/// Helper struct for writing files to MockPal.
struct MockFileWriter {
    key: FilePath,
    files: Arc<Mutex<HashMap<FilePath, Vec<u8>>>>,
    buffer: Vec<u8>,
}

impl Write for MockFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for MockFileWriter {
    fn drop(&mut self) {
        self.files
            .lock()
            .unwrap()
            .insert(self.key.clone(), std::mem::take(&mut self.buffer));
    }
}
