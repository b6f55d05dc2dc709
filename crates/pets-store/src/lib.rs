//! Pets Store - persistence layer for shelter pets
//!
//! Provides:
//! - SQLite connection management and store configuration
//! - Schema migrations with checksums
//! - Hand-written statements over the `pet` table (`SqlitePetRepo`)
//! - The async `PetRepository` contract and its `PetStore` handle

pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod store;

// Re-export key types
pub use crate::config::{JournalMode, StoreConfig};
pub use errors::Result;
pub use repo::{PetRepository, SqlitePetRepo, INSERT_FAILED};
pub use store::{PetListWatch, PetStore};
