use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not use anyhow/eyre/thiserror etc?

- Better control over error handling
- No dependencies to compile and integrate
- Span traces from tracing-error are attached to every error
 */

/// Error variants that can occur in fsnorm operations.
///
/// Each filesystem operation the probe performs has its own variant, so an
/// environment failure can always be traced back to the step that caused it.
#[derive(Debug)]
pub enum ErrorKind {
    /// Creating a directory failed
    CreateDirectory { path: PathBuf, source: io::Error },

    /// Creating or writing a file failed
    WriteFile { path: PathBuf, source: io::Error },

    /// Enumerating the entries of a directory failed
    ListDirectory { path: PathBuf, source: io::Error },

    /// Opening or reading a file failed
    ReadFile { path: PathBuf, source: io::Error },

    /// Recursively removing a directory failed
    RemoveDirectory { path: PathBuf, source: io::Error },

    /// Catch-all for other errors with a message
    Message { message: String },
}

impl ErrorKind {
    /// The path the failed operation was working on, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ErrorKind::CreateDirectory { path, .. }
            | ErrorKind::WriteFile { path, .. }
            | ErrorKind::ListDirectory { path, .. }
            | ErrorKind::ReadFile { path, .. }
            | ErrorKind::RemoveDirectory { path, .. } => Some(path.as_path()),
            ErrorKind::Message { .. } => None,
        }
    }

    /// The underlying I/O error, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            ErrorKind::CreateDirectory { source, .. }
            | ErrorKind::WriteFile { source, .. }
            | ErrorKind::ListDirectory { source, .. }
            | ErrorKind::ReadFile { source, .. }
            | ErrorKind::RemoveDirectory { source, .. } => Some(source),
            ErrorKind::Message { .. } => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CreateDirectory { path, source } => {
                write!(f, "could not create directory {}: {}", path.display(), source)
            }
            ErrorKind::WriteFile { path, source } => {
                write!(f, "could not write file {}: {}", path.display(), source)
            }
            ErrorKind::ListDirectory { path, source } => {
                write!(f, "could not list directory {}: {}", path.display(), source)
            }
            ErrorKind::ReadFile { path, source } => {
                write!(f, "could not read file {}: {}", path.display(), source)
            }
            ErrorKind::RemoveDirectory { path, source } => {
                write!(f, "could not remove directory {}: {}", path.display(), source)
            }
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/* 📖 # Why separate ErrorKind and FsnormError?
ErrorKind holds the structural variant (which operation failed, on which path).
FsnormError wraps it with the runtime extras: context strings pushed during
propagation and the span trace captured at creation.
Callers pattern match on the kind, humans read the rest.
*/

/// Error type wrapping an [`ErrorKind`] with context and span trace.
pub struct FsnormError {
    kind: ErrorKind,
    context: Vec<String>,
    span_trace: SpanTrace,
}

impl FsnormError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            span_trace: SpanTrace::capture(),
        }
    }

    /// Creates a [`ErrorKind::Message`] error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    /// Context is displayed before the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Returns a reference to the underlying ErrorKind.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the context strings in the order they were attached.
    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        for (index, context) in self.context.iter().enumerate() {
            let branch = if index + 1 == self.context.len() { "└─" } else { "├─" };
            writeln!(f, "{branch} {context}")?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for FsnormError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for FsnormError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.kind
            .io_error()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

impl fmt::Display for FsnormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl fmt::Debug for FsnormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f)?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/* 📖 # Why use Box<FsnormError> in the result type?

Boxing the error reduces the size of the result type, making it more efficient to return in the common case.

*/

/// Standard result type for fsnorm operations.
pub type FsnormResult<T> = std::result::Result<T, Box<FsnormError>>;

/// Extension trait for attaching context to Results.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    fn context(self, context: impl Into<String>) -> FsnormResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> FsnormResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for FsnormResult<T> {
    fn context(self, context: impl Into<String>) -> FsnormResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> FsnormResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}

/// Creates a boxed [`ErrorKind::Message`] error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        Box::new($crate::FsnormError::message(format!($($arg)*)))
    };
}
