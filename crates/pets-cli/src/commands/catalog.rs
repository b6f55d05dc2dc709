//! Catalog-wide actions: delete-all and insert-dummy

use pets_core::{Gender, PetRecord, PetsError};
use pets_store::PetRepository;

pub async fn delete_all(repo: &dyn PetRepository) -> Result<(), Box<dyn std::error::Error>> {
    repo.delete_all().await?;
    println!("All pets deleted.");
    Ok(())
}

/// Sample pet used to populate an empty catalog
pub fn dummy_pet() -> PetRecord {
    PetRecord::new("Toto", Some("Terrier".to_string()), Gender::Male, 7)
}

pub async fn insert_dummy(repo: &dyn PetRepository) -> Result<(), Box<dyn std::error::Error>> {
    let id = repo.insert(&dummy_pet()).await?;
    if id < 0 {
        return Err(PetsError::InsertFailed.into());
    }
    println!("Pet saved with id: {}", id);
    Ok(())
}
