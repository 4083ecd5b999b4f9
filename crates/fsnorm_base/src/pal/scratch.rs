use tracing::{debug, error, instrument};

use crate::FsnormResult;

use super::FilePath;
use super::traits::PalHandle;

/* 📖 # Why a guard type for the probe directory?

The probe must never leave its directory behind, whichever step fails.
Tying removal to Drop covers every `?` in the probe without a cleanup call per
exit path. A failed removal is a leaked directory, so it is logged at error
level whatever the verbosity, but it never replaces the probe's own result.
*/

/// A uniquely named directory below the PAL root, removed recursively when dropped.
#[derive(Debug)]
pub struct ScratchDirectory {
    pal: PalHandle,
    path: FilePath,
}

impl ScratchDirectory {
    /// Prefix of every scratch directory name.
    pub const PREFIX: &'static str = ".fsnorm-";

    /// Create a fresh directory named `.fsnorm-<random id>`.
    ///
    /// Creation fails instead of reusing a directory that already exists.
    #[instrument(skip(pal))]
    pub fn acquire(pal: &PalHandle) -> FsnormResult<Self> {
        let path = FilePath::from(format!("{}{}", Self::PREFIX, nanoid::nanoid!(12)));
        pal.create_directory(&path)?;
        debug!(path = %path, "acquired scratch directory");
        Ok(Self {
            pal: pal.clone(),
            path,
        })
    }

    /// The directory's path relative to the PAL root.
    pub fn path(&self) -> &FilePath {
        &self.path
    }

    /// Path of an entry directly inside the directory.
    pub fn join(&self, name: &str) -> FilePath {
        self.path.join(name)
    }
}

impl Drop for ScratchDirectory {
    fn drop(&mut self) {
        match self.pal.remove_directory_all(&self.path) {
            Ok(()) => debug!(path = %self.path, "released scratch directory"),
            Err(e) => error!(path = %self.path, error = %e, "failed to remove scratch directory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::pal::{MockPal, Pal, PalOperation};

    #[test]
    fn test_acquire_creates_prefixed_directory() {
        let mock = MockPal::new();
        let pal = PalHandle::new(mock.clone());

        let scratch = ScratchDirectory::acquire(&pal).unwrap();

        assert!(scratch.path().as_str().starts_with(ScratchDirectory::PREFIX));
        assert!(mock.file_exists(scratch.path()).unwrap());
    }

    #[test]
    fn test_acquire_generates_unique_names() {
        let pal = PalHandle::new(MockPal::new());

        let first = ScratchDirectory::acquire(&pal).unwrap();
        let second = ScratchDirectory::acquire(&pal).unwrap();

        assert_ne!(first.path(), second.path());
    }

    #[test]
    fn test_drop_removes_directory_and_contents() {
        let mock = MockPal::new();
        let pal = PalHandle::new(mock.clone());

        let scratch = ScratchDirectory::acquire(&pal).unwrap();
        pal.write_file(&scratch.join("a.txt"), b"a").unwrap();
        let path = scratch.path().clone();
        drop(scratch);

        assert!(!mock.file_exists(&path).unwrap());
        assert_eq!(mock.file_count(), 0);
    }

    #[test]
    fn test_drop_survives_removal_failure() {
        let mock = MockPal::new();
        let pal = PalHandle::new(mock.clone());
        let scratch = ScratchDirectory::acquire(&pal).unwrap();
        let path = scratch.path().clone();
        mock.fail_operation(PalOperation::RemoveDirectory);

        drop(scratch);

        assert!(mock.file_exists(&path).unwrap());
    }

    #[test]
    fn test_acquire_failure_leaves_nothing_behind() {
        let mock = MockPal::new();
        mock.fail_operation(PalOperation::CreateDirectory);
        let pal = PalHandle::new(mock.clone());

        let error = ScratchDirectory::acquire(&pal).unwrap_err();

        assert!(matches!(error.kind(), ErrorKind::CreateDirectory { .. }));
        assert_eq!(mock.directory_count(), 0);
    }
}
