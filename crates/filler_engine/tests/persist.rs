use std::fs;

use filler_core::{FillPlan, WordEntry};
use filler_engine::{check_output_dir, write_report, AtomicFileWriter, FillError, PersistError};
use tempfile::TempDir;

#[test]
fn missing_output_dir_is_rejected_not_created() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(check_output_dir(&new_dir).is_err());
    assert!(!new_dir.exists());
}

#[test]
fn stale_report_is_replaced_by_new_plan() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("fill_suggestion.json");
    fs::write(&target, r#"{"fillers":[],"counts":{"viejo":99}}"#).unwrap();
    let plan = FillPlan::build(&[WordEntry::new("Perro", "Animal")], 3);

    let written = write_report(&target, &plan.report()).unwrap();

    assert_eq!(written, target);
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(report["counts"], serde_json::json!({ "Animal": 1 }));
    assert_eq!(report["fillers"][1]["word"], "Animal extra 2");
    // No temp files are left next to the report.
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn writer_into_a_file_path_leaves_report_untouched() {
    let temp = TempDir::new().unwrap();
    let report_path = temp.path().join("fill_suggestion.json");
    fs::write(&report_path, "previous report").unwrap();
    let blocker = temp.path().join("tools");
    fs::write(&blocker, "not a directory").unwrap();

    let writer = AtomicFileWriter::new(blocker.clone());
    let result = writer.write("fill_suggestion.json", "{}");

    assert!(matches!(result, Err(PersistError::OutputDir(_))));
    assert_eq!(fs::read_to_string(&report_path).unwrap(), "previous report");
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
}

#[cfg(unix)]
#[test]
fn rewrite_keeps_existing_report_mode() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let target = temp.path().join("fill_suggestion.json");
    fs::write(&target, "{}").unwrap();
    fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();
    let plan = FillPlan::build(&[WordEntry::new("Mar", "Naturaleza")], 2);

    write_report(&target, &plan.report()).unwrap();

    let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}

#[cfg(unix)]
#[test]
fn new_report_is_not_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let target = temp.path().join("fill_suggestion.json");
    let plan = FillPlan::build(&[WordEntry::new("Mar", "Naturaleza")], 2);

    write_report(&target, &plan.report()).unwrap();

    // Same mode a plain `File::create` would get under the current umask.
    let reference = temp.path().join("reference");
    fs::File::create(&reference).unwrap();
    let expected = fs::metadata(&reference).unwrap().permissions().mode() & 0o777;
    let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, expected);
}

#[test]
fn report_is_indented_and_keeps_accents() {
    let temp = TempDir::new().unwrap();
    let plan = FillPlan::build(
        &[
            WordEntry::new("Cámara", "Electrónico"),
            WordEntry::new("Avión", "Transporte"),
        ],
        2,
    );

    let path = write_report(&temp.path().join("fill.json"), &plan.report()).unwrap();
    let text = fs::read_to_string(path).unwrap();

    assert!(text.starts_with("{\n  \"fillers\": [\n    {\n"));
    assert!(text.contains("\"word\": \"Electrónico extra 1\""));
    assert!(text.contains("\"Electrónico\": 1"));
    assert!(!text.contains("\\u"));
}

#[test]
fn report_into_missing_directory_is_file_access_error() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("missing").join("fill.json");
    let plan = FillPlan::build(&[WordEntry::new("Mar", "Naturaleza")], 2);

    let err = write_report(&target, &plan.report()).unwrap_err();

    assert!(matches!(err, FillError::Persist(_)));
    assert!(err.is_file_access());
    assert!(!target.exists());
    assert!(!temp.path().join("missing").exists());
}
