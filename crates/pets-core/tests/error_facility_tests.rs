use pets_core::errors::{ExError, ExErrorKind, PetsError};

#[test]
fn test_not_found_verifiable_by_kind() {
    let ex_err: ExError = PetsError::PetNotFound { pet_id: 42 }.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.pet_id(), Some(42));
}

#[test]
fn test_invalid_weight_is_invalid_input() {
    let ex_err: ExError = PetsError::InvalidWeight {
        input: "abc".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex_err.op(), Some("parse_weight"));
    assert!(ex_err.message().contains("abc"));
}

#[test]
fn test_insert_failed_is_constraint_violation() {
    let ex_err: ExError = PetsError::InsertFailed.into();

    assert_eq!(ex_err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(ex_err.message(), "Error with saving pet");
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::ConstraintViolation, "ERR_CONSTRAINT_VIOLATION"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        (ExErrorKind::Concurrency, "ERR_CONCURRENCY"),
        (ExErrorKind::Config, "ERR_CONFIG"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
