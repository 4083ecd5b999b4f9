/* 📖 # How does the probe decide whether names were normalized?

Two files go into a fresh directory: one named with the precomposed "ö", one with
"o" plus a combining diaeresis, each holding its own payload. Both are then read
back through the name they were written under.

If the filesystem kept them apart, each name returns its own payload. If it
treated the names as the same entry, the second write replaced the first and
both names return the same bytes. Comparing the two payloads is the whole
verdict; the directory listing is only collected for the verbose report.
*/

use tracing::{debug, instrument};

use fsnorm_base::{FsnormResult, PalHandle, ResultExt, ScratchDirectory};

use crate::diagnostics::Diagnostics;
use crate::names::{COMPOSED, DECOMPOSED};

/// Exit code for a filesystem that kept both names apart.
pub const EXIT_NOT_NORMALIZED: i32 = 0;
/// Exit code for a detected normalization and for environment errors alike.
pub const EXIT_FAILURE: i32 = 1;

/// Settings for a probe run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeOptions {
    /// Collect the diagnostic projection. Has no effect on the classification.
    pub verbose: bool,
}

/// Outcome of the experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The two names stayed distinct entries with distinct contents.
    NotNormalized,
    /// The two names resolved to the same entry.
    Normalized,
}

impl Classification {
    /// Classify from the bytes read back through each name.
    pub fn from_contents(composed: &[u8], decomposed: &[u8]) -> Self {
        if composed == decomposed {
            Classification::Normalized
        } else {
            Classification::NotNormalized
        }
    }

    /// `true` when the filesystem preserved both names.
    pub fn names_preserved(self) -> bool {
        self == Classification::NotNormalized
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Classification::NotNormalized => EXIT_NOT_NORMALIZED,
            Classification::Normalized => EXIT_FAILURE,
        }
    }

    /// The final line printed in verbose mode.
    pub fn message(self) -> &'static str {
        match self {
            Classification::NotNormalized => "Success: Unicode file names were not normalized",
            Classification::Normalized => "Failed: Unicode file names were normalized",
        }
    }
}

/// Result of a completed probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub classification: Classification,
    /// Present only when the run was verbose.
    pub diagnostics: Option<Diagnostics>,
}

/// Run the experiment in a scratch directory below the PAL root.
///
/// The scratch directory is removed before this function returns, on success and
/// on every error path. Errors are environment failures only; a normalizing
/// filesystem is reported through [`Classification::Normalized`].
///
/// # Examples
/// ```
/// use fsnorm_base::{MockPal, NameNormalization, PalHandle};
/// use fsnorm_probe::{Classification, ProbeOptions, run_probe};
///
/// let pal = PalHandle::new(MockPal::with_normalization(NameNormalization::Nfd));
/// let report = run_probe(&pal, ProbeOptions::default()).unwrap();
/// assert_eq!(report.classification, Classification::Normalized);
/// ```
#[instrument(skip(pal))]
pub fn run_probe(pal: &PalHandle, options: ProbeOptions) -> FsnormResult<ProbeReport> {
    let scratch =
        ScratchDirectory::acquire(pal).context("failed to create temporary directory")?;

    let composed_path = scratch.join(COMPOSED.name);
    pal.write_file(&composed_path, COMPOSED.content)
        .context("failed to write composed")?;

    let decomposed_path = scratch.join(DECOMPOSED.name);
    pal.write_file(&decomposed_path, DECOMPOSED.content)
        .context("failed to write decomposed")?;

    let mut entry_names = pal
        .list_directory(scratch.path())
        .with_context(|| format!("failed to list entries in directory {}", scratch.path()))?;
    entry_names.sort_unstable();
    debug!(entry_count = entry_names.len(), "listed scratch directory");

    let composed_content = pal
        .read_file_to_bytes(&composed_path)
        .context("failed to read composed")?;
    let decomposed_content = pal
        .read_file_to_bytes(&decomposed_path)
        .context("failed to read decomposed")?;

    let classification = Classification::from_contents(&composed_content, &decomposed_content);
    debug!(?classification, "probe finished");

    let diagnostics = options.verbose.then(|| Diagnostics {
        entry_names,
        composed_content,
        decomposed_content,
    });
    Ok(ProbeReport {
        classification,
        diagnostics,
    })
}
