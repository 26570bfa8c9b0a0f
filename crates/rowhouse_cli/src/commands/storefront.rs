//! Storefront subcommands: order import plus the two join reports.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use rusqlite::Connection;

use rowhouse_core::import::order_import::import_orders;
use rowhouse_core::report::order_report::{items_in_order, order_ids, orders_containing_product};

#[derive(Subcommand)]
pub enum StorefrontAction {
    /// Load a denormalized order CSV export.
    Import { path: PathBuf },
    /// Print an order's items; with no id, walk every order.
    Order { id: Option<i64> },
    /// Print every order containing a product.
    Product { id: i64 },
}

pub fn run(conn: &Connection, action: StorefrontAction) -> Result<()> {
    match action {
        StorefrontAction::Import { path } => {
            let summary = import_orders(conn, &path)?;
            println!("imported {} order rows from {}", summary.rows, path.display());
        }
        StorefrontAction::Order { id: Some(id) } => {
            for line in items_in_order(conn, id)? {
                println!("{line}");
            }
        }
        StorefrontAction::Order { id: None } => {
            for id in order_ids(conn)? {
                for line in items_in_order(conn, id)? {
                    println!("{line}");
                }
            }
        }
        StorefrontAction::Product { id } => {
            for row in orders_containing_product(conn, id)? {
                println!("{row}");
            }
        }
    }

    Ok(())
}
