//! Dog repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `dogs` table with the breed dimension resolved
//!   on write and joined back on read.
//!
//! # Invariants
//! - Name matching is exact; breed resolution is case-insensitive via the
//!   dimension's collation.
//! - `update_dog` answers with a re-read of every dog carrying the
//!   replacement name, whether or not the targeted id existed.

use rusqlite::{params, Connection, Row};

use crate::model::dog::{Dog, DogId};
use crate::repo::lookup::{self, BREEDS};
use crate::repo::RepoResult;

const DOG_SELECT_SQL: &str = "SELECT
    d.id,
    d.name,
    d.age,
    b.name AS breed
FROM dogs d
    INNER JOIN breeds b ON d.breed_id = b.id";

/// Repository interface for kennel operations.
pub trait DogRepository {
    /// Inserts a dog, creating its breed row on first sight, and returns
    /// the store-assigned id.
    fn add_dog(&self, dog: &Dog) -> RepoResult<DogId>;
    /// Fetches one dog; absent ids yield `Ok(None)`.
    fn get_dog(&self, id: DogId) -> RepoResult<Option<Dog>>;
    /// Lists dogs whose name matches exactly, ordered by id.
    fn find_dogs_by_name(&self, name: &str) -> RepoResult<Vec<Dog>>;
    /// Overwrites the row at `id` with `replacement`, then re-reads by the
    /// replacement's name. An absent id changes nothing and the re-read
    /// still answers.
    fn update_dog(&self, id: DogId, replacement: &Dog) -> RepoResult<Vec<Dog>>;
    /// Deletes one dog, returning the affected-row count.
    fn delete_dog(&self, id: DogId) -> RepoResult<usize>;
}

/// SQLite-backed dog repository.
pub struct SqliteDogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DogRepository for SqliteDogRepository<'_> {
    fn add_dog(&self, dog: &Dog) -> RepoResult<DogId> {
        dog.validate()?;

        let breed_id = lookup::id_or_insert(self.conn, &BREEDS, &dog.breed)?;
        self.conn.execute(
            "INSERT INTO dogs (name, age, breed_id) VALUES (?1, ?2, ?3);",
            params![dog.name.as_str(), dog.age, breed_id],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_dog(&self, id: DogId) -> RepoResult<Option<Dog>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DOG_SELECT_SQL} WHERE d.id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_dog_row(row)?));
        }

        Ok(None)
    }

    fn find_dogs_by_name(&self, name: &str) -> RepoResult<Vec<Dog>> {
        let mut stmt = self.conn.prepare(&format!(
            "{DOG_SELECT_SQL} WHERE d.name = ?1 ORDER BY d.id ASC;"
        ))?;

        let mut rows = stmt.query(params![name])?;
        let mut dogs = Vec::new();
        while let Some(row) = rows.next()? {
            dogs.push(parse_dog_row(row)?);
        }

        Ok(dogs)
    }

    fn update_dog(&self, id: DogId, replacement: &Dog) -> RepoResult<Vec<Dog>> {
        replacement.validate()?;

        let breed_id = lookup::id_or_insert(self.conn, &BREEDS, &replacement.breed)?;
        self.conn.execute(
            "UPDATE dogs SET name = ?1, age = ?2, breed_id = ?3 WHERE id = ?4;",
            params![replacement.name.as_str(), replacement.age, breed_id, id],
        )?;

        self.find_dogs_by_name(&replacement.name)
    }

    fn delete_dog(&self, id: DogId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM dogs WHERE id = ?1;", params![id])?;

        Ok(changed)
    }
}

fn parse_dog_row(row: &Row<'_>) -> RepoResult<Dog> {
    Ok(Dog {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        age: row.get("age")?,
        breed: row.get("breed")?,
    })
}
