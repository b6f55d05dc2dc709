//! Pets Core - shelter pet model and shared facilities
//!
//! This crate provides:
//! - The Pet Record value type and its gender encoding
//! - The pet form rules that turn raw editor input into a record
//! - The canonical error facility (`ExError`, `ExErrorKind`, `PetsError`)
//! - The structured logging facility and boundary macros

pub mod errors;
pub mod form;
pub mod logging_facility;
pub mod model;

// Macros expand to paths under this re-export so callers need no direct dependency
pub use pets_core_types as core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PetsError, Result};
pub use form::{FormTarget, PetForm};
pub use model::{Gender, PetId, PetRecord};
