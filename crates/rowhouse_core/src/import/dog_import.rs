//! Kennel CSV loader.
//!
//! Expects `Name,Age,Breed` columns; breeds go through lookup-or-create
//! so repeated breed names collapse onto one dimension row.

use std::path::Path;
use std::time::Instant;

use log::{error, info};
use rusqlite::{params, Connection};

use crate::import::csvfile::CsvReader;
use crate::import::{required_i64, ImportError, ImportSummary};
use crate::repo::lookup::{self, BREEDS};

/// Imports a kennel export, one dog row per CSV data row.
pub fn import_dogs(
    conn: &Connection,
    path: impl AsRef<Path>,
) -> Result<ImportSummary, ImportError> {
    let started_at = Instant::now();
    info!("event=import module=import store=kennel status=start");

    match run(conn, path.as_ref()) {
        Ok(summary) => {
            info!(
                "event=import module=import store=kennel status=ok rows={} duration_ms={}",
                summary.rows,
                started_at.elapsed().as_millis()
            );
            Ok(summary)
        }
        Err(err) => {
            error!(
                "event=import module=import store=kennel status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn run(conn: &Connection, path: &Path) -> Result<ImportSummary, ImportError> {
    let mut reader = CsvReader::open(path)?;
    let name_col = reader.column("Name")?;
    let age_col = reader.column("Age")?;
    let breed_col = reader.column("Breed")?;

    let mut rows = 0u64;
    while let Some(record) = reader.next_row()? {
        let line = reader.line();
        let age = required_i64(line, "Age", &record[age_col])?;
        let breed_id = lookup::id_or_insert(conn, &BREEDS, &record[breed_col])?;

        conn.execute(
            "INSERT INTO dogs (name, age, breed_id) VALUES (?1, ?2, ?3);",
            params![record[name_col].as_str(), age, breed_id],
        )?;
        rows += 1;
    }

    Ok(ImportSummary { rows })
}
