use crate::model::PetId;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and the CLI exit
/// path) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    NotFound,
    ConstraintViolation,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    Config,
    Concurrency,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context (operation name,
/// pet id) so failures can be logged and reported uniformly.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    pet_id: Option<PetId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            pet_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add pet ID context
    pub fn with_pet_id(mut self, id: PetId) -> Self {
        self.pet_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the pet ID context, if any
    pub fn pet_id(&self) -> Option<PetId> {
        self.pet_id
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(pet_id) = self.pet_id {
            write!(f, " (pet_id: {})", pet_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised by the model, the form rules and the CLI
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PetsError {
    /// No pet is stored under the given id
    #[error("Pet not found: {pet_id}")]
    PetNotFound { pet_id: PetId },

    /// Weight text is not a non-negative integer
    #[error("Invalid weight: {input:?} is not a non-negative whole number")]
    InvalidWeight { input: String },

    /// Gender label or stored code is not one of unknown/male/female
    #[error("Invalid gender: {input:?}")]
    InvalidGender { input: String },

    /// The store returned the insert failure sentinel
    #[error("Error with saving pet")]
    InsertFailed,

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<PetsError> for ExError {
    fn from(err: PetsError) -> Self {
        let message = err.to_string();
        match err {
            PetsError::PetNotFound { pet_id } => ExError::new(ExErrorKind::NotFound)
                .with_pet_id(pet_id)
                .with_message(message),

            PetsError::InvalidWeight { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_weight")
                .with_message(message),

            PetsError::InvalidGender { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_gender")
                .with_message(message),

            PetsError::InsertFailed => ExError::new(ExErrorKind::ConstraintViolation)
                .with_op("pet_insert")
                .with_message(message),

            PetsError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}
