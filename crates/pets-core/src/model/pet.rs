use serde::{Deserialize, Serialize};

use super::gender::Gender;

/// Store-assigned identifier of a pet row
pub type PetId = i64;

/// Text shown in place of a missing breed
pub const UNKNOWN_BREED: &str = "Unknown breed";

/// Pet Record - one shelter animal's stored attributes
///
/// A plain value: instances held by callers are disconnected snapshots of
/// the stored row and carry no link back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    /// Store-assigned id; `None` until the record has been inserted
    id: Option<PetId>,

    /// Pet name (expected by the editor, not enforced by the store)
    name: String,

    /// Optional breed
    breed: Option<String>,

    gender: Gender,

    /// Unit-less weight, 0 when unspecified
    weight: u32,
}

impl PetRecord {
    /// Create a new, unsaved record (no id yet)
    pub fn new(
        name: impl Into<String>,
        breed: Option<String>,
        gender: Gender,
        weight: u32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            breed,
            gender,
            weight,
        }
    }

    /// Reconstruct a record that already has a store-assigned id
    pub fn with_id(
        id: PetId,
        name: impl Into<String>,
        breed: Option<String>,
        gender: Gender,
        weight: u32,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, breed, gender, weight)
        }
    }

    pub fn id(&self) -> Option<PetId> {
        self.id
    }

    pub fn set_id(&mut self, id: PetId) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }

    pub fn set_breed(&mut self, breed: Option<String>) {
        self.breed = breed;
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
    }

    /// Breed for display, falling back to [`UNKNOWN_BREED`] when absent or empty
    pub fn breed_label(&self) -> &str {
        match self.breed.as_deref() {
            Some(breed) if !breed.is_empty() => breed,
            _ => UNKNOWN_BREED,
        }
    }
}
