//! Lookup-or-create access to name-keyed dimension tables.
//!
//! # Responsibility
//! - Resolve a dimension name to its surrogate id, inserting the row on
//!   first sight.
//!
//! # Invariants
//! - No transaction wraps the check-then-insert pair; the case-insensitive
//!   UNIQUE constraint on the name column backs the race instead. A loser
//!   of the race surfaces the constraint violation as `Persistence`.
//! - Matching is case-insensitive because the columns carry
//!   `COLLATE NOCASE`; the first spelling seen is the one stored.

use rusqlite::{Connection, OptionalExtension};

use crate::model::require_text;
use crate::repo::RepoResult;

/// Surrogate key of a dimension row.
pub type DimId = i64;

/// One name-keyed dimension table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimTable {
    pub table: &'static str,
    pub id_column: &'static str,
    pub name_column: &'static str,
}

/// Breed dimension of the kennel store.
pub const BREEDS: DimTable = DimTable {
    table: "breeds",
    id_column: "id",
    name_column: "name",
};

/// Genre dimension of the arcade store.
pub const GENRES: DimTable = DimTable {
    table: "genre",
    id_column: "genre_id",
    name_column: "genre_name",
};

/// Publisher dimension of the arcade store.
pub const PUBLISHERS: DimTable = DimTable {
    table: "publisher",
    id_column: "publisher_id",
    name_column: "publisher_name",
};

/// Platform dimension of the arcade store.
pub const PLATFORMS: DimTable = DimTable {
    table: "platform",
    id_column: "platform_id",
    name_column: "platform_name",
};

/// Returns the id of the dimension row named `name`, if present.
pub fn id_by_name(conn: &Connection, dim: &DimTable, name: &str) -> RepoResult<Option<DimId>> {
    let sql = format!(
        "SELECT {id} FROM {table} WHERE {name_col} = ?1;",
        id = dim.id_column,
        table = dim.table,
        name_col = dim.name_column,
    );
    let found = conn
        .query_row(&sql, [name], |row| row.get::<_, DimId>(0))
        .optional()?;
    Ok(found)
}

/// Returns the id for `name`, inserting the dimension row on first sight.
pub fn id_or_insert(conn: &Connection, dim: &DimTable, name: &str) -> RepoResult<DimId> {
    require_text(dim.name_column, name)?;

    if let Some(id) = id_by_name(conn, dim, name)? {
        return Ok(id);
    }

    let sql = format!(
        "INSERT INTO {table} ({name_col}) VALUES (?1);",
        table = dim.table,
        name_col = dim.name_column,
    );
    conn.execute(&sql, [name])?;
    Ok(conn.last_insert_rowid())
}

/// Counts rows in the dimension table.
pub fn count(conn: &Connection, dim: &DimTable) -> RepoResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {};", dim.table);
    let total = conn.query_row(&sql, [], |row| row.get::<_, i64>(0))?;
    Ok(total)
}
