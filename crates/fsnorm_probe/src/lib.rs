pub mod diagnostics;
pub mod names;
pub mod probe;
pub mod report;

pub use diagnostics::Diagnostics;
pub use names::{COMPOSED, DECOMPOSED, EXPECTED_ENTRY_COUNT, ProbeFile};
pub use probe::{
    Classification, EXIT_FAILURE, EXIT_NOT_NORMALIZED, ProbeOptions, ProbeReport, run_probe,
};
pub use report::{exit_code, render, run_and_report};
