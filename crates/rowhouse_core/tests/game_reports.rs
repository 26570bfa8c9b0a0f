use rusqlite::Connection;

use rowhouse_core::db::open_db_in_memory;
use rowhouse_core::report::game_report::{
    genre_counts, platform_sales, releases_per_year, top_sellers, GenreCount, YearCount,
};
use rowhouse_core::{Game, GameRepository, SalesFigures, SqliteGameRepository};

#[test]
fn top_sellers_orders_by_global_sales_and_honors_limit() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let top = top_sellers(&conn, 3).unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].game_name, "Wii Sports");
    assert_eq!(top[0].global_sales, Some(82.74));
    assert_eq!(top[1].game_name, "Super Mario Bros.");
    assert_eq!(top[2].game_name, "Mario Kart Wii");
}

#[test]
fn top_sellers_puts_unknown_global_sales_last() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let top = top_sellers(&conn, 100).unwrap();
    assert_eq!(top.len(), 7);
    assert_eq!(top[6].game_name, "Budget Golf");
    assert_eq!(top[6].global_sales, None);
    assert!(!top.iter().any(|row| row.game_name == "Phantom Entry"));
}

#[test]
fn top_sellers_breaks_ties_by_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGameRepository::new(&conn);

    for name in ["Beta Quest", "Alpha Quest"] {
        let id = repo
            .create_game(&Game::new(name, "PC", "Valve", "Adventure", Some(2001)))
            .unwrap();
        repo.insert_sales(
            id,
            &SalesFigures {
                global_sales: Some(10.0),
                ..Default::default()
            },
        )
        .unwrap();
    }

    let top = top_sellers(&conn, 10).unwrap();
    assert_eq!(top[0].game_name, "Alpha Quest");
    assert_eq!(top[1].game_name, "Beta Quest");
}

#[test]
fn genre_counts_without_filter_covers_every_recorded_genre() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let counts = genre_counts(&conn, None).unwrap();
    let expected = vec![
        GenreCount { genre_name: "Sports".to_string(), count: 3 },
        GenreCount { genre_name: "Action".to_string(), count: 1 },
        GenreCount { genre_name: "Platform".to_string(), count: 1 },
        GenreCount { genre_name: "Racing".to_string(), count: 1 },
        GenreCount { genre_name: "Shooter".to_string(), count: 1 },
    ];
    assert_eq!(counts, expected);
}

#[test]
fn genre_counts_with_filter_narrows_to_one_genre() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let counts = genre_counts(&conn, Some("Sports")).unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].genre_name, "Sports");
    assert_eq!(counts[0].count, 3);

    assert!(genre_counts(&conn, Some("Strategy")).unwrap().is_empty());
}

#[test]
fn games_without_sales_rows_stay_out_of_reports() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let counts = genre_counts(&conn, None).unwrap();
    assert!(!counts.iter().any(|row| row.genre_name == "Mystery"));

    let years = releases_per_year(&conn, None).unwrap();
    assert!(!years.iter().any(|row| row.release_year == 1999));
}

#[test]
fn platform_sales_without_filters_sums_every_platform() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let totals = platform_sales(&conn, None, None).unwrap();
    assert_eq!(totals.len(), 4);
    assert_eq!(totals[0].platform_name, "NES");
    assert_eq!(totals[0].total_sales, Some(40.24));
    assert_eq!(totals[1].platform_name, "PS2");
    assert_eq!(totals[1].total_sales, None);
    assert_eq!(totals[2].platform_name, "PS3");
    assert_eq!(totals[2].total_sales, Some(21.25));
    assert_eq!(totals[3].platform_name, "Wii");
    assert_eq!(totals[3].total_sales, Some(151.49));
}

#[test]
fn platform_sales_filters_by_platform_alone() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let totals = platform_sales(&conn, Some("Wii"), None).unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].platform_name, "Wii");
    assert_eq!(totals[0].total_sales, Some(151.49));
}

#[test]
fn platform_sales_filters_by_year_alone() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let totals = platform_sales(&conn, None, Some(2013)).unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].platform_name, "PS2");
    assert_eq!(totals[0].total_sales, None);
    assert_eq!(totals[1].platform_name, "PS3");
    assert_eq!(totals[1].total_sales, Some(21.25));
}

#[test]
fn platform_sales_applies_both_filters_together() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let totals = platform_sales(&conn, Some("Wii"), Some(2006)).unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].total_sales, Some(82.74));
}

#[test]
fn platform_sales_skips_games_with_unknown_year() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    // The one PC game with sales has no release year.
    assert!(platform_sales(&conn, Some("PC"), None).unwrap().is_empty());
}

#[test]
fn releases_per_year_counts_known_years_in_order() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let years = releases_per_year(&conn, None).unwrap();
    let expected = vec![
        YearCount { release_year: 1985, releases: 1 },
        YearCount { release_year: 2006, releases: 1 },
        YearCount { release_year: 2008, releases: 1 },
        YearCount { release_year: 2009, releases: 1 },
        YearCount { release_year: 2013, releases: 2 },
    ];
    assert_eq!(years, expected);
}

#[test]
fn releases_per_year_narrows_to_one_publisher() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let years = releases_per_year(&conn, Some("Nintendo")).unwrap();
    assert_eq!(years.len(), 4);
    assert!(years.iter().all(|row| row.releases == 1));

    assert!(releases_per_year(&conn, Some("Atari")).unwrap().is_empty());
}

#[test]
fn report_rows_format_for_plain_listing() {
    let conn = open_db_in_memory().unwrap();
    seed_catalog(&conn);

    let top = top_sellers(&conn, 1).unwrap();
    assert_eq!(top[0].to_string(), "Wii Sports  82.74");

    let totals = platform_sales(&conn, None, None).unwrap();
    assert_eq!(totals[1].to_string(), "PS2  n/a");
}

/// Seven games with sales rows plus one catalogued game that never sold.
fn seed_catalog(conn: &Connection) {
    let repo = SqliteGameRepository::new(conn);

    let rows: [(&str, &str, &str, &str, Option<i64>, Option<f64>); 7] = [
        ("Wii Sports", "Wii", "Nintendo", "Sports", Some(2006), Some(82.74)),
        ("Super Mario Bros.", "NES", "Nintendo", "Platform", Some(1985), Some(40.24)),
        ("Mario Kart Wii", "Wii", "Nintendo", "Racing", Some(2008), Some(35.75)),
        ("Wii Sports Resort", "Wii", "Nintendo", "Sports", Some(2009), Some(33.0)),
        ("Grand Theft Auto V", "PS3", "Take-Two Interactive", "Action", Some(2013), Some(21.25)),
        ("Duke Nukem Forever", "PC", "Take-Two Interactive", "Shooter", None, Some(1.5)),
        ("Budget Golf", "PS2", "Take-Two Interactive", "Sports", Some(2013), None),
    ];
    for (name, platform, publisher, genre, year, global) in rows {
        let id = repo
            .create_game(&Game::new(name, platform, publisher, genre, year))
            .unwrap();
        repo.insert_sales(
            id,
            &SalesFigures {
                global_sales: global,
                ..Default::default()
            },
        )
        .unwrap();
    }

    repo.create_game(&Game::new("Phantom Entry", "PC", "Valve", "Mystery", Some(1999)))
        .unwrap();
}
