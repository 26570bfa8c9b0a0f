//! Arcade CSV loader for the game sales export.
//!
//! # Invariants
//! - Each data row produces one `game` row and one `game_sales` row.
//! - Dimension names resolve through a per-run cache backed by
//!   lookup-or-create, so a known name costs no query after first sight.
//! - `N/A` in the year or any sales column becomes NULL.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use log::{error, info};
use rusqlite::{params, Connection};

use crate::import::csvfile::CsvReader;
use crate::import::{optional_f64, optional_i64, ImportError, ImportSummary};
use crate::repo::lookup::{self, DimId, DimTable, GENRES, PLATFORMS, PUBLISHERS};
use crate::repo::RepoResult;

/// Row count of the reference game sales export, for progress display.
pub const GAME_CSV_EXPECTED_ROWS: u64 = 16598;

/// Imports a game sales export without progress reporting.
pub fn import_games(
    conn: &Connection,
    path: impl AsRef<Path>,
) -> Result<ImportSummary, ImportError> {
    import_games_with_progress(conn, path, &mut |_| {})
}

/// Imports a game sales export, invoking `on_row` with the 1-based count
/// of rows consumed after each row lands.
pub fn import_games_with_progress(
    conn: &Connection,
    path: impl AsRef<Path>,
    on_row: &mut dyn FnMut(u64),
) -> Result<ImportSummary, ImportError> {
    let started_at = Instant::now();
    info!("event=import module=import store=arcade status=start");

    match run(conn, path.as_ref(), on_row) {
        Ok(summary) => {
            info!(
                "event=import module=import store=arcade status=ok rows={} duration_ms={}",
                summary.rows,
                started_at.elapsed().as_millis()
            );
            Ok(summary)
        }
        Err(err) => {
            error!(
                "event=import module=import store=arcade status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn run(
    conn: &Connection,
    path: &Path,
    on_row: &mut dyn FnMut(u64),
) -> Result<ImportSummary, ImportError> {
    let mut reader = CsvReader::open(path)?;
    let name_col = reader.column("Name")?;
    let platform_col = reader.column("Platform")?;
    let year_col = reader.column("Year")?;
    let genre_col = reader.column("Genre")?;
    let publisher_col = reader.column("Publisher")?;
    let na_col = reader.column("NA_Sales")?;
    let eu_col = reader.column("EU_Sales")?;
    let jp_col = reader.column("JP_Sales")?;
    let other_col = reader.column("Other_Sales")?;
    let global_col = reader.column("Global_Sales")?;

    let mut platforms: HashMap<String, DimId> = HashMap::new();
    let mut publishers: HashMap<String, DimId> = HashMap::new();
    let mut genres: HashMap<String, DimId> = HashMap::new();

    let mut rows = 0u64;
    while let Some(record) = reader.next_row()? {
        let line = reader.line();

        let platform_id = resolve_cached(conn, &PLATFORMS, &mut platforms, &record[platform_col])?;
        let publisher_id =
            resolve_cached(conn, &PUBLISHERS, &mut publishers, &record[publisher_col])?;
        let genre_id = resolve_cached(conn, &GENRES, &mut genres, &record[genre_col])?;
        let release_year = optional_i64(line, "Year", &record[year_col])?;

        conn.execute(
            "INSERT INTO game (game_name, platform_id, publisher_id, genre_id, release_year)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                record[name_col].as_str(),
                platform_id,
                publisher_id,
                genre_id,
                release_year,
            ],
        )?;
        let game_id = conn.last_insert_rowid();

        conn.execute(
            "INSERT INTO game_sales
                (game_id, na_sales, eu_sales, jp_sales, other_sales, global_sales)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                game_id,
                optional_f64(line, "NA_Sales", &record[na_col])?,
                optional_f64(line, "EU_Sales", &record[eu_col])?,
                optional_f64(line, "JP_Sales", &record[jp_col])?,
                optional_f64(line, "Other_Sales", &record[other_col])?,
                optional_f64(line, "Global_Sales", &record[global_col])?,
            ],
        )?;

        rows += 1;
        on_row(rows);
    }

    Ok(ImportSummary { rows })
}

fn resolve_cached(
    conn: &Connection,
    dim: &DimTable,
    cache: &mut HashMap<String, DimId>,
    name: &str,
) -> RepoResult<DimId> {
    if let Some(id) = cache.get(name) {
        return Ok(*id);
    }

    let id = lookup::id_or_insert(conn, dim, name)?;
    cache.insert(name.to_string(), id);
    Ok(id)
}
