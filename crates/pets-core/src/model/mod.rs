//! Domain model for shelter pets

pub mod gender;
pub mod pet;

pub use gender::Gender;
pub use pet::{PetId, PetRecord, UNKNOWN_BREED};
