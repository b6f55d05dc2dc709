//! Error handling for pets-store
//!
//! Wraps pets-core ExError with store-specific helpers

use pets_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// The connection mutex was poisoned by a panicking statement
pub fn lock_poisoned(operation: &str) -> ExError {
    ExError::new(ExErrorKind::Concurrency)
        .with_op(operation.to_string())
        .with_message("pet store connection lock poisoned")
}

/// A blocking storage task panicked or was cancelled
pub fn join_error(operation: &str, err: tokio::task::JoinError) -> ExError {
    ExError::new(ExErrorKind::Concurrency)
        .with_op(operation.to_string())
        .with_message(format!("storage task failed: {}", err))
}

/// Create a configuration error
pub fn config_error(err: ::config::ConfigError) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message(err.to_string())
}
