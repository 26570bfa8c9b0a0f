//! Aggregate reports over the arcade store.
//!
//! # Invariants
//! - Every query walks `game_sales` into `game`, so a game with no sales
//!   row never shows up in a report.
//! - Optional filters bind in declaration order; an omitted filter becomes
//!   `IS NOT NULL` on the same column.

use std::fmt::{Display, Formatter};

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};
use serde::Serialize;

use crate::repo::RepoResult;

/// One row of [`top_sellers`]: a game and its global sales in millions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopSeller {
    pub game_name: String,
    /// `None` when the source data had no global figure for the game.
    pub global_sales: Option<f64>,
}

impl Display for TopSeller {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.global_sales {
            Some(sales) => write!(f, "{}  {sales:.2}", self.game_name),
            None => write!(f, "{}  n/a", self.game_name),
        }
    }
}

/// One row of [`genre_counts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre_name: String,
    pub count: i64,
}

impl Display for GenreCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  {}", self.genre_name, self.count)
    }
}

/// One row of [`platform_sales`]: summed global sales per platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformSales {
    pub platform_name: String,
    /// Rounded to two decimals; `None` when every summed figure was null.
    pub total_sales: Option<f64>,
}

impl Display for PlatformSales {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.total_sales {
            Some(sales) => write!(f, "{}  {sales:.2}", self.platform_name),
            None => write!(f, "{}  n/a", self.platform_name),
        }
    }
}

/// One row of [`releases_per_year`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub release_year: i64,
    pub releases: i64,
}

impl Display for YearCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  {}", self.release_year, self.releases)
    }
}

/// Returns the `k` games with the highest global sales, best first.
pub fn top_sellers(conn: &Connection, k: u32) -> RepoResult<Vec<TopSeller>> {
    let mut stmt = conn.prepare(
        "SELECT g.game_name, s.global_sales
         FROM game_sales s
             INNER JOIN game g ON s.game_id = g.game_id
         ORDER BY s.global_sales DESC, g.game_name ASC
         LIMIT ?1;",
    )?;

    let mut rows = stmt.query(params![k])?;
    let mut sellers = Vec::new();
    while let Some(row) = rows.next()? {
        sellers.push(TopSeller {
            game_name: row.get("game_name")?,
            global_sales: row.get("global_sales")?,
        });
    }

    Ok(sellers)
}

/// Counts recorded games per genre, most populous first.
///
/// With `genre` given, the result narrows to that one genre; otherwise
/// every genre with at least one sales row appears.
pub fn genre_counts(conn: &Connection, genre: Option<&str>) -> RepoResult<Vec<GenreCount>> {
    let mut sql = String::from(
        "SELECT ge.genre_name, COUNT(*) AS count
         FROM game_sales s
             INNER JOIN game g ON s.game_id = g.game_id
             INNER JOIN genre ge ON g.genre_id = ge.genre_id
         WHERE ge.genre_name ",
    );
    let mut bind_values: Vec<Value> = Vec::new();

    match genre {
        Some(name) => {
            sql.push_str("= ?");
            bind_values.push(Value::Text(name.to_string()));
        }
        None => sql.push_str("IS NOT NULL"),
    }

    sql.push_str(
        " GROUP BY ge.genre_name
          ORDER BY count DESC, ge.genre_name ASC;",
    );

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(bind_values))?;
    let mut counts = Vec::new();
    while let Some(row) = rows.next()? {
        counts.push(GenreCount {
            genre_name: row.get("genre_name")?,
            count: row.get("count")?,
        });
    }

    Ok(counts)
}

/// Sums global sales per platform, alphabetical by platform.
///
/// Both filters are independent; either one omitted degrades to an
/// `IS NOT NULL` guard on its column. `year` binds before `platform`.
pub fn platform_sales(
    conn: &Connection,
    platform: Option<&str>,
    year: Option<i64>,
) -> RepoResult<Vec<PlatformSales>> {
    let mut sql = String::from(
        "SELECT p.platform_name, ROUND(SUM(s.global_sales), 2) AS all_global_sales
         FROM game_sales s
             INNER JOIN game g ON s.game_id = g.game_id
             INNER JOIN platform p ON p.platform_id = g.platform_id
         WHERE g.release_year ",
    );
    let mut bind_values: Vec<Value> = Vec::new();

    match year {
        Some(value) => {
            sql.push_str("= ?");
            bind_values.push(Value::Integer(value));
        }
        None => sql.push_str("IS NOT NULL"),
    }

    sql.push_str(" AND p.platform_name ");
    match platform {
        Some(name) => {
            sql.push_str("= ?");
            bind_values.push(Value::Text(name.to_string()));
        }
        None => sql.push_str("IS NOT NULL"),
    }

    sql.push_str(
        " GROUP BY p.platform_name
          ORDER BY p.platform_name ASC;",
    );

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(bind_values))?;
    let mut totals = Vec::new();
    while let Some(row) = rows.next()? {
        totals.push(PlatformSales {
            platform_name: row.get("platform_name")?,
            total_sales: row.get("all_global_sales")?,
        });
    }

    Ok(totals)
}

/// Counts releases per year, oldest year first.
///
/// Rows with an unknown release year never count. With `publisher` given,
/// the result narrows to that publisher's releases.
pub fn releases_per_year(conn: &Connection, publisher: Option<&str>) -> RepoResult<Vec<YearCount>> {
    let mut sql = String::from(
        "SELECT g.release_year, COUNT(*) AS game_releases
         FROM game_sales s
             INNER JOIN game g ON s.game_id = g.game_id
             INNER JOIN publisher p ON p.publisher_id = g.publisher_id
         WHERE g.release_year IS NOT NULL AND p.publisher_name ",
    );
    let mut bind_values: Vec<Value> = Vec::new();

    match publisher {
        Some(name) => {
            sql.push_str("= ?");
            bind_values.push(Value::Text(name.to_string()));
        }
        None => sql.push_str("IS NOT NULL"),
    }

    sql.push_str(
        " GROUP BY g.release_year
          ORDER BY g.release_year ASC;",
    );

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(bind_values))?;
    let mut years = Vec::new();
    while let Some(row) = rows.next()? {
        years.push(YearCount {
            release_year: row.get("release_year")?,
            releases: row.get("game_releases")?,
        });
    }

    Ok(years)
}
