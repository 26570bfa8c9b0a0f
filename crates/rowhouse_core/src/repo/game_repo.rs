//! Game repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide catalog writes and reads over the `game` fact table with all
//!   three dimensions resolved on write and joined back on read.
//!
//! # Invariants
//! - `create_game` resolves platform, publisher and genre through
//!   lookup-or-create; dimensions are never duplicated for a known name.
//! - Sales rows reference an existing game; figures stay nullable.

use rusqlite::{params, Connection, Row};

use crate::model::game::{Game, GameId, SalesFigures};
use crate::repo::lookup::{self, GENRES, PLATFORMS, PUBLISHERS};
use crate::repo::{escape_like, RepoResult};

const GAME_SELECT_SQL: &str = "SELECT
    g.game_id,
    g.game_name,
    pl.platform_name,
    pb.publisher_name,
    ge.genre_name,
    g.release_year
FROM game g
    INNER JOIN platform pl ON g.platform_id = pl.platform_id
    INNER JOIN publisher pb ON g.publisher_id = pb.publisher_id
    INNER JOIN genre ge ON g.genre_id = ge.genre_id";

/// Repository interface for arcade catalog operations.
pub trait GameRepository {
    /// Inserts a game, creating missing dimension rows, and returns the
    /// store-assigned id.
    fn create_game(&self, game: &Game) -> RepoResult<GameId>;
    /// Fetches one game; absent ids yield `Ok(None)`.
    fn get_game(&self, id: GameId) -> RepoResult<Option<Game>>;
    /// Lists games whose name contains `needle` anywhere, ordered by id.
    fn find_games(&self, needle: &str) -> RepoResult<Vec<Game>>;
    /// Attaches a sales row to a game and returns the sales row id.
    fn insert_sales(&self, game_id: GameId, sales: &SalesFigures) -> RepoResult<i64>;
    /// Fetches the sales row for a game, if any.
    fn get_sales(&self, game_id: GameId) -> RepoResult<Option<SalesFigures>>;
}

/// SQLite-backed game repository.
pub struct SqliteGameRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGameRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl GameRepository for SqliteGameRepository<'_> {
    fn create_game(&self, game: &Game) -> RepoResult<GameId> {
        game.validate()?;

        let platform_id = lookup::id_or_insert(self.conn, &PLATFORMS, &game.platform)?;
        let publisher_id = lookup::id_or_insert(self.conn, &PUBLISHERS, &game.publisher)?;
        let genre_id = lookup::id_or_insert(self.conn, &GENRES, &game.genre)?;

        self.conn.execute(
            "INSERT INTO game (game_name, platform_id, publisher_id, genre_id, release_year)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                game.name.as_str(),
                platform_id,
                publisher_id,
                genre_id,
                game.release_year,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_game(&self, id: GameId) -> RepoResult<Option<Game>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GAME_SELECT_SQL} WHERE g.game_id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_game_row(row)?));
        }

        Ok(None)
    }

    fn find_games(&self, needle: &str) -> RepoResult<Vec<Game>> {
        let mut stmt = self.conn.prepare(&format!(
            "{GAME_SELECT_SQL} WHERE g.game_name LIKE ?1 ESCAPE '\\' ORDER BY g.game_id ASC;"
        ))?;

        let pattern = format!("%{}%", escape_like(needle));
        let mut rows = stmt.query(params![pattern])?;
        let mut games = Vec::new();
        while let Some(row) = rows.next()? {
            games.push(parse_game_row(row)?);
        }

        Ok(games)
    }

    fn insert_sales(&self, game_id: GameId, sales: &SalesFigures) -> RepoResult<i64> {
        self.conn.execute(
            "INSERT INTO game_sales
                (game_id, na_sales, eu_sales, jp_sales, other_sales, global_sales)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                game_id,
                sales.na_sales,
                sales.eu_sales,
                sales.jp_sales,
                sales.other_sales,
                sales.global_sales,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_sales(&self, game_id: GameId) -> RepoResult<Option<SalesFigures>> {
        let mut stmt = self.conn.prepare(
            "SELECT na_sales, eu_sales, jp_sales, other_sales, global_sales
             FROM game_sales WHERE game_id = ?1 ORDER BY sales_id ASC;",
        )?;

        let mut rows = stmt.query(params![game_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(SalesFigures {
                na_sales: row.get("na_sales")?,
                eu_sales: row.get("eu_sales")?,
                jp_sales: row.get("jp_sales")?,
                other_sales: row.get("other_sales")?,
                global_sales: row.get("global_sales")?,
            }));
        }

        Ok(None)
    }
}

fn parse_game_row(row: &Row<'_>) -> RepoResult<Game> {
    Ok(Game {
        id: Some(row.get("game_id")?),
        name: row.get("game_name")?,
        platform: row.get("platform_name")?,
        publisher: row.get("publisher_name")?,
        genre: row.get("genre_name")?,
        release_year: row.get("release_year")?,
    })
}
