//! File-level tests: manifest in, summary file out.

use flight_check::{FlightError, process_manifest};
use std::fs;

const VALID_MANIFEST: &str = "add route LON PAR 50 100 60\n\
                              add aircraft A320 2\n\
                              add general Alice 30\n\
                              add general Bob 40\n";

#[test]
fn manifest_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("flight.txt");
    let output_path = dir.path().join("summary.txt");

    fs::write(&input_path, VALID_MANIFEST).unwrap();

    let input = fs::read_to_string(&input_path).unwrap();
    let summary = process_manifest(&input).unwrap();
    fs::write(&output_path, &summary).unwrap();

    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "2 2 0 0 2 0 100 200 200 TRUE"
    );
}

#[test]
fn rerun_on_unmodified_input_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("flight.txt");
    let output_path = dir.path().join("summary.txt");

    fs::write(&input_path, VALID_MANIFEST).unwrap();

    for _ in 0..2 {
        let input = fs::read_to_string(&input_path).unwrap();
        let summary = process_manifest(&input).unwrap();
        fs::write(&output_path, &summary).unwrap();
    }

    let first = fs::read(&output_path).unwrap();

    let input = fs::read_to_string(&input_path).unwrap();
    let summary = process_manifest(&input).unwrap();
    fs::write(&output_path, &summary).unwrap();

    assert_eq!(fs::read(&output_path).unwrap(), first);
}

#[test]
fn invalid_manifest_produces_errors_and_no_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("flight.txt");

    fs::write(
        &input_path,
        "add route LON PAR abc 100 60\nadd aircraft A320 2\n",
    )
    .unwrap();

    let input = fs::read_to_string(&input_path).unwrap();
    let errors = process_manifest(&input).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], FlightError::Format { line: 1, .. }));
    assert_eq!(
        errors[0].to_string(),
        "Invalid instruction line (1). A route must meet the format 'add route origin destination cost-per-passenger(n) ticket-price(n) minimum-takeoff-load-percentage(n)'."
    );
}

#[test]
fn trailing_newline_does_not_add_a_phantom_line() {
    // `lines()` yields no empty final line for a newline-terminated file,
    // so the manifest above parses clean with and without the terminator.
    let with = process_manifest(VALID_MANIFEST).unwrap();
    let without = process_manifest(VALID_MANIFEST.trim_end()).unwrap();
    assert_eq!(with, without);
}
