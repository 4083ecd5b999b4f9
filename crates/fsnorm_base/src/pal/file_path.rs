use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

/* 📖 # Why use RelativePathBuf for FilePath?

Every path the probe touches lives below the PAL's base directory (the working
directory for the CLI). Wrapping RelativePathBuf keeps absolute system paths out
of the probe and gives the same `/`-separated form on every platform.

RelativePathBuf stores the path as a String and never rewrites its characters,
so a decomposed name stays decomposed until it reaches the filesystem.
*/

/// Type-safe wrapper for file paths relative to the PAL base directory.
///
/// # Examples
///
/// ```
/// use fsnorm_base::FilePath;
///
/// let dir = FilePath::from(".fsnorm-abc");
/// let file = dir.join("\u{00F6}.txt");
/// assert_eq!(file.file_name(), Some("\u{00F6}.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilePath(RelativePathBuf);

impl FilePath {
    /// Returns the underlying RelativePathBuf as a reference.
    pub fn as_relative(&self) -> &RelativePath {
        &self.0
    }

    /// Returns the path as a `/`-separated string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Converts to a regular Path for use with std::fs operations.
    /// This returns the relative path portion without a base directory.
    pub fn as_path(&self) -> &Path {
        Path::new(self.as_str())
    }

    /// Appends a single name to this path.
    pub fn join(&self, name: impl AsRef<str>) -> FilePath {
        Self(self.0.join(name.as_ref()))
    }

    /// The final component of the path, if there is one.
    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name()
    }

    /// The path without its final component.
    pub fn parent(&self) -> Option<FilePath> {
        self.0.parent().map(FilePath::from)
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self(RelativePathBuf::from(s))
    }
}

impl From<String> for FilePath {
    fn from(s: String) -> Self {
        Self(RelativePathBuf::from(s))
    }
}

impl From<RelativePathBuf> for FilePath {
    fn from(p: RelativePathBuf) -> Self {
        Self(p)
    }
}

impl From<&RelativePath> for FilePath {
    fn from(p: &RelativePath) -> Self {
        Self(p.to_relative_path_buf())
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<RelativePath> for FilePath {
    fn as_ref(&self) -> &RelativePath {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path_from_str() {
        let path = FilePath::from("scratch/a.txt");
        assert_eq!(path.as_path(), Path::new("scratch/a.txt"));
    }

    #[test]
    fn test_file_path_from_string() {
        let path = FilePath::from(String::from("scratch/b.txt"));
        assert_eq!(path.as_str(), "scratch/b.txt");
    }

    #[test]
    fn test_join_and_file_name() {
        let path = FilePath::from("scratch").join("a.txt");
        assert_eq!(path, FilePath::from("scratch/a.txt"));
        assert_eq!(path.file_name(), Some("a.txt"));
        assert_eq!(path.parent(), Some(FilePath::from("scratch")));
    }

    #[test]
    fn test_join_keeps_decomposed_bytes() {
        let decomposed = "o\u{0308}.txt";
        let path = FilePath::from("scratch").join(decomposed);
        assert_eq!(path.file_name().unwrap().as_bytes(), decomposed.as_bytes());
        assert_ne!(path, FilePath::from("scratch").join("\u{00F6}.txt"));
    }

    #[test]
    fn test_file_path_display() {
        let path = FilePath::from("scratch/a.txt");
        assert_eq!(path.to_string(), "scratch/a.txt");
    }
}
