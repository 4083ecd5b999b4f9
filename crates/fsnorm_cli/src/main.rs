/* 📖 # What does the fsnorm CLI do?

It runs the normalization probe once in the current directory and reports the
result through the exit code:

- 0: the filesystem kept "ö" (U+00F6) and "o" + U+0308 apart
- 1: the filesystem normalized the names, or the probe could not run

With `-v` the observations and a final verdict line go to stdout. Without it
nothing is printed except log output on stderr, which is limited to warnings
such as a scratch directory that could not be removed.
*/

use std::env;
use std::io;
use std::process;

use clap::Parser;

use fsnorm_base::tracing::init_tracing;
use fsnorm_base::{PalHandle, RealPal};
use fsnorm_probe::{EXIT_FAILURE, ProbeOptions, run_and_report};

/// Checks whether the filesystem under the current directory normalizes Unicode file names.
#[derive(Debug, Parser)]
#[command(name = "fsnorm")]
struct Cli {
    /// print verbose output
    #[arg(short = 'v')]
    verbose: bool,
}

impl From<&Cli> for ProbeOptions {
    fn from(cli: &Cli) -> Self {
        ProbeOptions {
            verbose: cli.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let options = ProbeOptions::from(&cli);

    if let Err(e) = init_tracing() {
        eprintln!("Warning: {}", e);
    }

    let current_dir = env::current_dir().unwrap_or_else(|e| {
        if options.verbose {
            println!("failed to determine current directory: {}", e);
        }
        process::exit(EXIT_FAILURE);
    });

    let pal = PalHandle::new(RealPal::new(current_dir));
    let code = run_and_report(&pal, options, &mut io::stdout().lock());
    process::exit(code);
}
