//! List command
//!
//! Usage: pets list [--json]

use clap::Args;
use pets_store::PetRepository;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the list as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(
    args: ListArgs,
    repo: &dyn PetRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let pets = repo.load_all().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&pets)?);
        return Ok(());
    }

    if pets.is_empty() {
        println!("No pets in the shelter yet.");
        return Ok(());
    }

    for pet in &pets {
        println!(
            "#{} {} - {}",
            pet.id().unwrap_or_default(),
            pet.name(),
            pet.breed_label()
        );
    }
    Ok(())
}
