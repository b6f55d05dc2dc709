//! Pet form rules
//!
//! Turns raw editor input into a [`PetRecord`]. The store itself performs
//! no validation, so every record built from user input goes through here.

use crate::errors::PetsError;
use crate::model::{Gender, PetId, PetRecord};

/// Whether a form submission creates a pet or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    New,
    Existing(PetId),
}

/// Raw editor input, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetForm {
    pub name: String,
    pub breed: String,
    pub weight: String,
    pub gender: Gender,
}

impl PetForm {
    /// Prefill a form from a stored record (edit mode)
    pub fn from_record(pet: &PetRecord) -> Self {
        Self {
            name: pet.name().to_string(),
            breed: pet.breed().unwrap_or_default().to_string(),
            weight: pet.weight().to_string(),
            gender: pet.gender(),
        }
    }

    /// True when every text field is blank and gender was left unknown
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.breed.trim().is_empty()
            && self.weight.trim().is_empty()
            && self.gender == Gender::Unknown
    }

    /// Build the record to persist
    ///
    /// Returns `Ok(None)` when a new-pet form was submitted blank; nothing
    /// should be saved in that case.
    ///
    /// # Errors
    ///
    /// Returns [`PetsError::InvalidWeight`] when the weight is not a
    /// non-negative whole number.
    pub fn submit(&self, target: FormTarget) -> Result<Option<PetRecord>, PetsError> {
        if target == FormTarget::New && self.is_blank() {
            return Ok(None);
        }

        let weight = parse_weight(&self.weight)?;
        let breed = match self.breed.trim() {
            "" => None,
            b => Some(b.to_string()),
        };

        let pet = match target {
            FormTarget::New => PetRecord::new(self.name.trim(), breed, self.gender, weight),
            FormTarget::Existing(id) => {
                PetRecord::with_id(id, self.name.trim(), breed, self.gender, weight)
            }
        };

        Ok(Some(pet))
    }
}

/// Blank weight means 0
fn parse_weight(raw: &str) -> Result<u32, PetsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u32>().map_err(|_| PetsError::InvalidWeight {
        input: raw.to_string(),
    })
}
