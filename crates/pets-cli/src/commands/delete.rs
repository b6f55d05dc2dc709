//! Delete command
//!
//! Usage: pets delete <ID>

use clap::Args;
use pets_core::{PetId, PetsError};
use pets_store::PetRepository;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: PetId,
}

pub async fn execute(
    args: DeleteArgs,
    repo: &dyn PetRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    if repo.delete(args.id).await? == 0 {
        return Err(PetsError::PetNotFound { pet_id: args.id }.into());
    }

    println!("Pet deleted.");
    Ok(())
}
