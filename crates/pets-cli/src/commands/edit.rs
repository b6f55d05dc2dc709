//! Edit command
//!
//! Usage: pets edit <ID> [--name N] [--breed B] [--gender G] [--weight W]
//!
//! Fields not given keep their stored value.

use clap::Args;
use pets_core::{FormTarget, Gender, PetForm, PetId, PetsError};
use pets_store::PetRepository;

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: PetId,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub breed: Option<String>,

    #[arg(long)]
    pub gender: Option<Gender>,

    #[arg(long, allow_hyphen_values = true)]
    pub weight: Option<String>,
}

pub async fn execute(
    args: EditArgs,
    repo: &dyn PetRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let not_found = PetsError::PetNotFound { pet_id: args.id };

    let stored = repo.load_by_id(args.id).await?.ok_or(not_found.clone())?;

    let mut form = PetForm::from_record(&stored);
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(breed) = args.breed {
        form.breed = breed;
    }
    if let Some(gender) = args.gender {
        form.gender = gender;
    }
    if let Some(weight) = args.weight {
        form.weight = weight;
    }

    let pet = form
        .submit(FormTarget::Existing(args.id))?
        .ok_or_else(|| PetsError::Internal {
            message: "edit form produced no record".to_string(),
        })?;

    // Zero rows means the pet was deleted after we loaded it
    if repo.update(&pet).await? == 0 {
        return Err(not_found.into());
    }

    println!("Pet updated.");
    Ok(())
}
