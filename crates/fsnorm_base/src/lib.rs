/* 📖 # Why have fsnorm_base as a separate crate?
fsnorm_base holds the error type, tracing setup and the filesystem abstraction.
The probe depends only on these abstractions, so it runs unchanged against the
real filesystem and against simulated ones in tests.
*/

pub mod error;
pub mod pal;
mod pal_tests;
pub mod tracing;

pub use error::{ErrorKind, FsnormError, FsnormResult, ResultExt};
pub use pal::{
    FilePath, MockPal, NameNormalization, Pal, PalHandle, PalOperation, ReadSeek, RealPal,
    ScratchDirectory,
};
