//! Show command
//!
//! Usage: pets show <ID> [--json]

use clap::Args;
use pets_core::{PetId, PetsError};
use pets_store::PetRepository;

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: PetId,

    #[arg(long)]
    pub json: bool,
}

pub async fn execute(
    args: ShowArgs,
    repo: &dyn PetRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let pet = repo
        .load_by_id(args.id)
        .await?
        .ok_or(PetsError::PetNotFound { pet_id: args.id })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&pet)?);
    } else {
        println!("id:     {}", args.id);
        println!("name:   {}", pet.name());
        println!("breed:  {}", pet.breed_label());
        println!("gender: {}", pet.gender());
        println!("weight: {}", pet.weight());
    }
    Ok(())
}
