//! Runs the probe against the host filesystem inside a temporary directory.
//!
//! The host may or may not normalize names, so these tests assert properties that
//! hold either way rather than a particular classification.

use std::fs;
use std::path::Path;

use fsnorm_base::{ErrorKind, PalHandle, RealPal};
use fsnorm_probe::{Classification, ProbeOptions, run_and_report, run_probe};
use tempfile::TempDir;

const VERBOSE: ProbeOptions = ProbeOptions { verbose: true };

fn entries(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn real_pal(dir: &TempDir) -> PalHandle {
    PalHandle::new(RealPal::new(dir.path().to_path_buf()))
}

#[test]
fn probe_leaves_no_directory_behind() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bystander.txt"), "untouched").unwrap();

    run_probe(&real_pal(&temp_dir), VERBOSE).unwrap();

    assert_eq!(entries(temp_dir.path()), vec!["bystander.txt".to_string()]);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("bystander.txt")).unwrap(),
        "untouched"
    );
}

#[test]
fn classification_is_stable_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let pal = real_pal(&temp_dir);

    let first = run_probe(&pal, ProbeOptions::default()).unwrap();
    let second = run_probe(&pal, ProbeOptions::default()).unwrap();
    let third = run_probe(&pal, VERBOSE).unwrap();

    assert_eq!(first.classification, second.classification);
    assert_eq!(first.classification, third.classification);
    assert!(entries(temp_dir.path()).is_empty());
}

#[test]
fn preserved_names_show_two_entries() {
    let temp_dir = TempDir::new().unwrap();

    let report = run_probe(&real_pal(&temp_dir), VERBOSE).unwrap();
    let diagnostics = report.diagnostics.unwrap();

    match report.classification {
        Classification::NotNormalized => {
            assert_eq!(diagnostics.entry_count(), 2);
            assert_eq!(diagnostics.composed_content, b"composed");
            assert_eq!(diagnostics.decomposed_content, b"decomposed");
        }
        Classification::Normalized => {
            assert_eq!(diagnostics.composed_content, diagnostics.decomposed_content);
        }
    }
}

#[test]
fn exit_code_matches_classification() {
    let temp_dir = TempDir::new().unwrap();
    let pal = real_pal(&temp_dir);
    let expected = run_probe(&pal, ProbeOptions::default())
        .unwrap()
        .classification;

    let mut out = Vec::new();
    let code = run_and_report(&pal, VERBOSE, &mut out);
    let output = String::from_utf8(out).unwrap();

    assert_eq!(code, expected.exit_code());
    assert!(output.ends_with(&format!("{}\n", expected.message())));
}

#[test]
fn missing_working_directory_is_an_environment_error() {
    let temp_dir = TempDir::new().unwrap();
    let pal = PalHandle::new(RealPal::new(temp_dir.path().join("does-not-exist")));

    let error = run_probe(&pal, VERBOSE).unwrap_err();

    assert!(matches!(error.kind(), ErrorKind::CreateDirectory { .. }));
    assert!(entries(temp_dir.path()).is_empty());

    let mut out = Vec::new();
    assert_eq!(run_and_report(&pal, VERBOSE, &mut out), 1);
    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("failed to create temporary directory: "));
    assert!(!output.contains("Unicode file names"));
}
