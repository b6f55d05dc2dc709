//! Repository layer for the `pet` table
//!
//! `SqlitePetRepo` holds the hand-written statements; `PetRepository` is
//! the async contract callers program against.

pub mod sqlite_repo;

pub use sqlite_repo::SqlitePetRepo;

use async_trait::async_trait;
use pets_core::model::{PetId, PetRecord};

use crate::errors::Result;

/// Returned by insert when the row could not be written
pub const INSERT_FAILED: PetId = -1;

/// Create/read/update/delete access to stored pets
///
/// Expected outcomes (not found, rejected insert) are reported through
/// return values; `Err` is reserved for storage faults.
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Insert a pet, ignoring any id it carries
    ///
    /// Returns the newly assigned id, or [`INSERT_FAILED`] when a table
    /// constraint rejected the row.
    async fn insert(&self, pet: &PetRecord) -> Result<PetId>;

    /// Overwrite the stored pet with the same id
    ///
    /// Returns the number of rows changed: 0 when no pet has that id.
    async fn update(&self, pet: &PetRecord) -> Result<usize>;

    /// Delete one pet; returns 0 when no pet has that id
    async fn delete(&self, id: PetId) -> Result<usize>;

    /// Empty the table
    async fn delete_all(&self) -> Result<()>;

    /// Every stored pet in insertion order
    async fn load_all(&self) -> Result<Vec<PetRecord>>;

    async fn load_by_id(&self, id: PetId) -> Result<Option<PetRecord>>;
}
