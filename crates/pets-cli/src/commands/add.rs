//! Add command
//!
//! Usage: pets add [--name N] [--breed B] [--gender G] [--weight W]

use clap::Args;
use pets_core::{FormTarget, Gender, PetForm, PetsError};
use pets_store::PetRepository;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub breed: String,

    /// unknown, male or female
    #[arg(long, default_value = "unknown")]
    pub gender: Gender,

    /// Whole number; blank means 0
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub weight: String,
}

pub async fn execute(
    args: AddArgs,
    repo: &dyn PetRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = PetForm {
        name: args.name,
        breed: args.breed,
        weight: args.weight,
        gender: args.gender,
    };

    let Some(pet) = form.submit(FormTarget::New)? else {
        println!("Nothing to save.");
        return Ok(());
    };

    let id = repo.insert(&pet).await?;
    if id < 0 {
        return Err(PetsError::InsertFailed.into());
    }

    println!("Pet saved with id: {}", id);
    Ok(())
}
