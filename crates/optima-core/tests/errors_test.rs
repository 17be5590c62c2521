//! Error display and code coverage.

use optima_core::errors::{
    BatchError, CollaboratorError, ConfigError, InputError, OptimaError, OptimaErrorCode,
    ParseError, StoreError,
};

#[test]
fn every_subsystem_converts_into_optima_error() {
    let errors: Vec<OptimaError> = vec![
        ConfigError::FileNotFound { path: "x".into() }.into(),
        InputError::BlankPrompt.into(),
        CollaboratorError::call_failed("solver", "timeout").into(),
        ParseError::NoJsonObject.into(),
        StoreError::TableNotFound { table: "runs".into() }.into(),
        BatchError::InvalidTransition {
            from: "flushed".into(),
            to: "solving".into(),
        }
        .into(),
    ];
    let codes: Vec<&str> = errors.iter().map(|e| e.error_code()).collect();
    assert_eq!(
        codes,
        [
            "CONFIG_ERROR",
            "INPUT_ERROR",
            "COLLABORATOR_ERROR",
            "PARSE_ERROR",
            "STORE_ERROR",
            "INVALID_TRANSITION",
        ]
    );
}

#[test]
fn messages_name_the_failing_part() {
    let err = CollaboratorError::call_failed("solver", "timeout");
    assert_eq!(err.to_string(), "solver call failed: timeout");
    assert_eq!(err.collaborator(), "solver");

    let err = InputError::MissingColumns {
        table: "problems".into(),
        missing: vec!["ccss".into(), "level".into()],
    };
    assert_eq!(
        err.to_string(),
        "source table problems is missing columns: ccss, level"
    );
}

#[test]
fn blank_texts_are_rejected_in_order() {
    assert_eq!(InputError::check_texts("  ", ""), Err(InputError::BlankProblem));
    assert_eq!(InputError::check_texts("2+2", "\n"), Err(InputError::BlankPrompt));
    assert_eq!(InputError::check_texts("2+2", "Solve."), Ok(()));
}
