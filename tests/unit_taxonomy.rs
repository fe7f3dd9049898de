// Unit tests for the taxonomy loader against real files on disk.
//
// The in-module tests cover RegistryBuilder row folding; these exercise
// load_taxonomy's file handling: line numbering in diagnostics, blank
// lines, and the concept-count histogram diagnostic.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use knit::error::PipelineError;
use knit::taxonomy::load_taxonomy;

fn write_table(rows: &[&str]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("features.tsv");
    let mut file = File::create(&path).unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    (dir, path)
}

fn row(concept: &str, feature: &str, category: &str) -> String {
    format!("{concept}\t{feature}\twc\tmaj\tmin\t{category}\tc6\tc7\tc8\tc9\tdist")
}

// ============================================================
// Happy path
// ============================================================

#[test]
fn loads_registry_and_vocabulary() {
    let (_dir, path) = write_table(&[
        &row("apple", "is_round", "visual"),
        &row("ball", "is_round", "visual"),
        &row("apple", "is_edible", "function"),
        &row("lemon", "is_sour", "taste"),
    ]);

    let (registry, concepts) = load_taxonomy(&path).unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(concepts.len(), 3);

    let round = registry.get("is_round").unwrap();
    assert!(round.concepts.contains("apple"));
    assert!(round.concepts.contains("ball"));
    assert_eq!(round.category_label, "visual");
    assert_eq!(round.distinguishing, "dist");
}

#[test]
fn extra_columns_are_tolerated() {
    let wide = format!("{}\textra1\textra2", row("apple", "is_round", "visual"));
    let (_dir, path) = write_table(&[&wide]);
    let (registry, _) = load_taxonomy(&path).unwrap();
    assert_eq!(registry.len(), 1);
}

#[test]
fn blank_lines_are_skipped() {
    let (_dir, path) = write_table(&[
        &row("apple", "is_round", "visual"),
        "",
        &row("ball", "is_round", "visual"),
    ]);
    let (registry, concepts) = load_taxonomy(&path).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(concepts.len(), 2);
}

// ============================================================
// Fatal parse errors
// ============================================================

#[test]
fn single_field_row_aborts_with_diagnostic() {
    let (_dir, path) = write_table(&[&row("apple", "is_round", "visual"), "just_one_field"]);

    let err = load_taxonomy(&path).unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Integrity(_))
        ),
        "Expected an integrity error, got: {err}"
    );
    // The diagnostic must point at the offending line.
    assert!(err.to_string().contains("row 2"), "Got: {err}");
}

#[test]
fn ten_field_row_is_still_too_short() {
    // One short of reaching the distinguishing column.
    let short = "a\tb\tc\td\te\tf\tg\th\ti\tj";
    let (_dir, path) = write_table(&[short]);
    assert!(load_taxonomy(&path).is_err());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.tsv");
    assert!(load_taxonomy(&path).is_err());
}

// ============================================================
// Diagnostics
// ============================================================

#[test]
fn histogram_reflects_taxonomy_shape() {
    let (_dir, path) = write_table(&[
        &row("apple", "is_round", "visual"),
        &row("ball", "is_round", "visual"),
        &row("lemon", "is_sour", "taste"),
    ]);

    let (registry, _) = load_taxonomy(&path).unwrap();
    let histogram = registry.concept_count_histogram();
    assert_eq!(histogram[&2], 1, "one feature with 2 concepts");
    assert_eq!(histogram[&1], 1, "one feature with 1 concept");
}
