//! Tests for the tracker error handling system.

use std::collections::HashSet;

use cts_core::errors::*;

#[test]
fn test_every_error_has_a_code() {
    let errors: Vec<Box<dyn Fn() -> &'static str>> = vec![
        Box::new(|| ConfigError::FileNotFound { path: "/tmp".into() }.error_code()),
        Box::new(|| InputError::SourceNotSpecified.error_code()),
        Box::new(|| {
            ReduceError::MissingField {
                record: "a::b".into(),
                field: "is_disabled",
            }
            .error_code()
        }),
        Box::new(|| StorageError::SqliteError { message: "busy".into() }.error_code()),
        Box::new(|| {
            RenderError::Draw {
                chart: "Tier_Migration".into(),
                message: "font".into(),
            }
            .error_code()
        }),
        Box::new(|| {
            SyncError::Spawn {
                command: "git pull".into(),
                message: "not found".into(),
            }
            .error_code()
        }),
    ];
    for code in errors {
        assert!(!code().is_empty());
    }
}

#[test]
fn test_from_conversions_into_pipeline_error() {
    let reduce = ReduceError::UnknownPlatform {
        record: "cat::test".into(),
        name: "Android".into(),
    };
    let pipeline: PipelineError = reduce.into();
    assert!(matches!(pipeline, PipelineError::Reduce(ReduceError::UnknownPlatform { .. })));

    let input = InputError::DumpMissing { path: "dump.json".into() };
    let pipeline: PipelineError = input.into();
    assert!(matches!(pipeline, PipelineError::Input(_)));

    let storage = StorageError::MigrationFailed { version: 1, message: "x".into() };
    let pipeline: PipelineError = storage.into();
    assert!(matches!(pipeline, PipelineError::Storage(_)));
}

#[test]
fn test_pipeline_error_forwards_subsystem_code() {
    let pipeline: PipelineError = ReduceError::UnknownPlatform {
        record: "cat::test".into(),
        name: "Android".into(),
    }
    .into();
    assert_eq!(pipeline.error_code(), "UNKNOWN_PLATFORM");
}

#[test]
fn test_unknown_platform_message() {
    let err = ReduceError::UnknownPlatform {
        record: "webgpu/api::buffer".into(),
        name: "Android".into(),
    };
    assert!(err.to_string().starts_with("Platform Android not recognized"));
    assert!(err.tagged().starts_with("[UNKNOWN_PLATFORM] Platform Android"));
}

#[test]
fn test_input_codes_separate_missing_from_malformed() {
    let missing = InputError::DumpMissing { path: "d".into() }.error_code();
    let malformed = InputError::Malformed {
        path: "d".into(),
        message: "eof".into(),
    }
    .error_code();
    let codes: HashSet<&str> = [missing, malformed].into_iter().collect();
    assert_eq!(codes.len(), 2);
}
