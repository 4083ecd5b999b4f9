use std::io::{self, Write};

use tracing::warn;

use fsnorm_base::{FsnormResult, PalHandle};

use crate::probe::{EXIT_FAILURE, ProbeOptions, ProbeReport, run_probe};

/// Exit code for a probe result.
///
/// Environment errors and detected normalization share the failure code.
pub fn exit_code(result: &FsnormResult<ProbeReport>) -> i32 {
    match result {
        Ok(report) => report.classification.exit_code(),
        Err(_) => EXIT_FAILURE,
    }
}

/// Write the console output for a probe result. Quiet runs write nothing.
pub fn render(
    result: &FsnormResult<ProbeReport>,
    options: ProbeOptions,
    out: &mut dyn Write,
) -> io::Result<()> {
    if !options.verbose {
        return Ok(());
    }
    match result {
        Ok(report) => {
            if let Some(diagnostics) = &report.diagnostics {
                write!(out, "{}", diagnostics)?;
            }
            writeln!(out, "{}", report.classification.message())
        }
        Err(error) => writeln!(out, "{}", error),
    }
}

/// Run the probe, write its console output to `out` and return the process exit code.
pub fn run_and_report(pal: &PalHandle, options: ProbeOptions, out: &mut dyn Write) -> i32 {
    let result = run_probe(pal, options);
    if let Err(e) = render(&result, options, out).and_then(|()| out.flush()) {
        warn!(error = %e, "failed to write probe report");
    }
    exit_code(&result)
}
