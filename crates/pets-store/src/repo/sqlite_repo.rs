//! SQLite statements over the `pet` table
//!
//! Each operation is one parametrized statement, so each is atomic on its own.

use crate::errors::{from_rusqlite, Result};
use crate::repo::INSERT_FAILED;
use pets_core::errors::PetsError;
use pets_core::model::{Gender, PetId, PetRecord};
use rusqlite::types::Type;
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row};

const INSERT_PET: &str = "INSERT INTO pet (name, breed, gender, weight) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_PET: &str = "UPDATE pet SET name = ?1, breed = ?2, gender = ?3, weight = ?4 WHERE id = ?5";
const DELETE_PET: &str = "DELETE FROM pet WHERE id = ?1";
const DELETE_ALL_PETS: &str = "DELETE FROM pet";
const SELECT_ALL_PETS: &str = "SELECT id, name, breed, gender, weight FROM pet ORDER BY id";
const SELECT_PET_BY_ID: &str = "SELECT id, name, breed, gender, weight FROM pet WHERE id = ?1";
const COUNT_PETS: &str = "SELECT COUNT(*) FROM pet";

/// Synchronous statement layer for pets
pub struct SqlitePetRepo;

impl SqlitePetRepo {
    /// Insert a pet and return the id SQLite assigned
    ///
    /// A constraint violation yields [`INSERT_FAILED`]; other failures are errors.
    pub fn insert_pet(conn: &Connection, pet: &PetRecord) -> Result<PetId> {
        let outcome = conn.execute(
            INSERT_PET,
            rusqlite::params![pet.name(), pet.breed(), pet.gender().code(), pet.weight()],
        );

        match outcome {
            Ok(_) => {
                let id = conn.last_insert_rowid();
                tracing::debug!(pet_id = id, "inserted pet row");
                Ok(id)
            }
            Err(rusqlite::Error::SqliteFailure(err, msg))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                tracing::debug!(reason = ?msg, "pet insert rejected by constraint");
                Ok(INSERT_FAILED)
            }
            Err(e) => Err(from_rusqlite(e)),
        }
    }

    /// Update the row matching the pet's id; a pet without an id matches nothing
    pub fn update_pet(conn: &Connection, pet: &PetRecord) -> Result<usize> {
        let Some(id) = pet.id() else {
            tracing::debug!("update skipped: pet has no id");
            return Ok(0);
        };

        let changed = conn
            .execute(
                UPDATE_PET,
                rusqlite::params![
                    pet.name(),
                    pet.breed(),
                    pet.gender().code(),
                    pet.weight(),
                    id
                ],
            )
            .map_err(from_rusqlite)?;

        tracing::debug!(pet_id = id, rows_affected = changed, "updated pet row");
        Ok(changed)
    }

    pub fn delete_pet(conn: &Connection, id: PetId) -> Result<usize> {
        let changed = conn.execute(DELETE_PET, [id]).map_err(from_rusqlite)?;
        tracing::debug!(pet_id = id, rows_affected = changed, "deleted pet row");
        Ok(changed)
    }

    pub fn delete_all_pets(conn: &Connection) -> Result<()> {
        let changed = conn.execute(DELETE_ALL_PETS, []).map_err(from_rusqlite)?;
        tracing::debug!(rows_affected = changed, "deleted all pet rows");
        Ok(())
    }

    pub fn load_all_pets(conn: &Connection) -> Result<Vec<PetRecord>> {
        let mut stmt = conn.prepare(SELECT_ALL_PETS).map_err(from_rusqlite)?;
        let pets = stmt
            .query_map([], pet_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(pets)
    }

    pub fn load_pet_by_id(conn: &Connection, id: PetId) -> Result<Option<PetRecord>> {
        conn.query_row(SELECT_PET_BY_ID, [id], pet_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    pub fn count_pets(conn: &Connection) -> Result<u64> {
        conn.query_row(COUNT_PETS, [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}

/// Map a `SELECT id, name, breed, gender, weight` row
fn pet_from_row(row: &Row<'_>) -> rusqlite::Result<PetRecord> {
    let id: PetId = row.get(0)?;
    let name: Option<String> = row.get(1)?;
    let breed: Option<String> = row.get(2)?;
    let gender_code: i64 = row.get(3)?;
    let weight: u32 = row.get(4)?;

    let gender = Gender::from_code(gender_code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Integer,
            Box::new(PetsError::InvalidGender {
                input: gender_code.to_string(),
            }),
        )
    })?;

    Ok(PetRecord::with_id(
        id,
        name.unwrap_or_default(),
        breed,
        gender,
        weight,
    ))
}
