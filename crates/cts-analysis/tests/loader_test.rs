use std::io::Write;

use cts_analysis::dump::{dump_modified, load_dump};
use cts_core::errors::{CtsErrorCode, InputError};

#[test]
fn loads_dump_and_captures_mtime() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"cat": {{"tests": {{"t": {{}}}}}}}}"#).unwrap();

    let loaded = load_dump(file.path()).unwrap();
    assert_eq!(loaded.dump.categories.len(), 1);
    assert_eq!(loaded.modified, dump_modified(file.path()).unwrap());
}

#[test]
fn missing_dump_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dump(&dir.path().join("dump.json")).unwrap_err();
    assert!(matches!(err, InputError::DumpMissing { .. }));
    assert_eq!(err.error_code(), "INPUT_UNAVAILABLE");
}

#[test]
fn directory_in_place_of_dump_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = dump_modified(dir.path()).unwrap_err();
    assert!(matches!(err, InputError::DumpMissing { .. }));
}

#[test]
fn invalid_json_is_malformed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();
    let err = load_dump(file.path()).unwrap_err();
    assert!(matches!(err, InputError::Malformed { .. }));
    assert_eq!(err.error_code(), "INPUT_MALFORMED");
}

#[test]
fn wrong_value_type_is_malformed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"cat": {{"tests": {{"t": {{"properties": {{"is_disabled": "no"}}}}}}}}}}"#).unwrap();
    let err = load_dump(file.path()).unwrap_err();
    assert!(matches!(err, InputError::Malformed { .. }));
}
