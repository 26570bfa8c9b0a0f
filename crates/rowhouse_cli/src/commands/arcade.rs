//! Arcade subcommands: bulk import plus the four sales reports.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use indicatif::{ProgressBar, ProgressStyle};
use rusqlite::Connection;

use rowhouse_core::import::game_import::{import_games_with_progress, GAME_CSV_EXPECTED_ROWS};
use rowhouse_core::report::game_report::{
    genre_counts, platform_sales, releases_per_year, top_sellers,
};

#[derive(Subcommand)]
pub enum ArcadeAction {
    /// Load a game sales CSV export with a progress bar.
    Import { path: PathBuf },
    /// Print the best-selling games by global sales.
    Top {
        /// How many games to print.
        #[arg(long, default_value_t = 10)]
        count: u32,
    },
    /// Print how many recorded games each genre has.
    Genres {
        /// Narrow the report to one genre.
        #[arg(long)]
        genre: Option<String>,
    },
    /// Print summed global sales per platform.
    Platforms {
        /// Narrow the report to one platform.
        #[arg(long)]
        platform: Option<String>,
        /// Narrow the report to one release year.
        #[arg(long)]
        year: Option<i64>,
    },
    /// Print how many games came out each year.
    Years {
        /// Narrow the report to one publisher.
        #[arg(long)]
        publisher: Option<String>,
    },
}

pub fn run(conn: &Connection, action: ArcadeAction) -> Result<()> {
    match action {
        ArcadeAction::Import { path } => {
            // The bar length is the reference export's row count; a shorter
            // or longer file still finishes cleanly.
            let bar = ProgressBar::new(GAME_CSV_EXPECTED_ROWS);
            bar.set_style(ProgressStyle::with_template(
                "{bar:40.cyan/blue} {pos}/{len} rows",
            )?);

            let summary =
                import_games_with_progress(conn, &path, &mut |rows| bar.set_position(rows))?;
            bar.finish_and_clear();
            println!("imported {} games from {}", summary.rows, path.display());
        }
        ArcadeAction::Top { count } => {
            for row in top_sellers(conn, count)? {
                println!("{row}");
            }
        }
        ArcadeAction::Genres { genre } => {
            for row in genre_counts(conn, genre.as_deref())? {
                println!("{row}");
            }
        }
        ArcadeAction::Platforms { platform, year } => {
            for row in platform_sales(conn, platform.as_deref(), year)? {
                println!("{row}");
            }
        }
        ArcadeAction::Years { publisher } => {
            for row in releases_per_year(conn, publisher.as_deref())? {
                println!("{row}");
            }
        }
    }

    Ok(())
}
