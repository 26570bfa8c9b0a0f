//! Fixed schema registry and executor.
//!
//! # Responsibility
//! - Register each store's DDL batch and apply them in one pass.
//!
//! # Invariants
//! - DDL batches are idempotent; applying them to an up-to-date file is a
//!   no-op.
//! - All batches apply inside a single transaction, so a half-created
//!   store is never observable.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct StoreSchema {
    store: &'static str,
    sql: &'static str,
}

const SCHEMAS: &[StoreSchema] = &[
    StoreSchema {
        store: "tasks",
        sql: include_str!("sql/tasks.sql"),
    },
    StoreSchema {
        store: "kennel",
        sql: include_str!("sql/kennel.sql"),
    },
    StoreSchema {
        store: "arcade",
        sql: include_str!("sql/arcade.sql"),
    },
    StoreSchema {
        store: "storefront",
        sql: include_str!("sql/storefront.sql"),
    },
];

/// Names of the stores this build knows how to lay down.
pub fn store_names() -> impl Iterator<Item = &'static str> {
    SCHEMAS.iter().map(|schema| schema.store)
}

/// Creates any missing tables for every store on the provided connection.
pub fn apply_schema(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    for schema in SCHEMAS {
        tx.execute_batch(schema.sql).map_err(|err| DbError::Schema {
            store: schema.store,
            source: err,
        })?;
    }
    tx.commit()?;

    Ok(())
}
