/* 📖 # What is the Platform Abstraction Layer?

The PAL provides a trait-based abstraction over the handful of filesystem
operations the probe performs. RealPal runs them against the host filesystem,
MockPal against an in-memory tree that can be told to normalize names.
ScratchDirectory builds the probe's scoped working directory on top of either.
*/

mod file_path;
pub mod mock;
pub mod real_pal;
pub mod scratch;
mod traits;

pub use file_path::FilePath;
pub use mock::{MockPal, NameNormalization, PalOperation};
pub use real_pal::RealPal;
pub use scratch::ScratchDirectory;
pub use traits::{Pal, PalHandle, ReadSeek};
