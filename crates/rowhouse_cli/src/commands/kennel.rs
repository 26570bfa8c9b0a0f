//! Kennel subcommands; dogs print as plain display lines.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use rusqlite::Connection;

use rowhouse_core::import::dog_import::import_dogs;
use rowhouse_core::{Dog, DogRepository, SqliteDogRepository};

#[derive(Subcommand)]
pub enum KennelAction {
    /// Register a dog, creating its breed on first sight.
    Add {
        name: String,
        age: i64,
        breed: String,
    },
    /// Print every dog with exactly the given name.
    Find { name: String },
    /// Replace a dog's fields and print the record(s) re-read by name.
    Update {
        id: i64,
        name: String,
        age: i64,
        breed: String,
    },
    /// Remove a dog by id.
    Rm { id: i64 },
    /// Load a Name,Age,Breed CSV export.
    Import { path: PathBuf },
}

pub fn run(conn: &Connection, action: KennelAction) -> Result<()> {
    let repo = SqliteDogRepository::new(conn);

    match action {
        KennelAction::Add { name, age, breed } => {
            let id = repo.add_dog(&Dog::new(name, age, breed))?;
            if let Some(dog) = repo.get_dog(id)? {
                println!("{dog}");
            }
        }
        KennelAction::Find { name } => {
            for dog in repo.find_dogs_by_name(&name)? {
                println!("{dog}");
            }
        }
        KennelAction::Update {
            id,
            name,
            age,
            breed,
        } => {
            for dog in repo.update_dog(id, &Dog::new(name, age, breed))? {
                println!("{dog}");
            }
        }
        KennelAction::Rm { id } => {
            let removed = repo.delete_dog(id)?;
            println!("removed {removed} dog(s)");
        }
        KennelAction::Import { path } => {
            let summary = import_dogs(conn, &path)?;
            println!("imported {} dogs from {}", summary.rows, path.display());
        }
    }

    Ok(())
}
