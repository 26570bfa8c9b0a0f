//! Storefront CSV loader for the denormalized order export.
//!
//! # Invariants
//! - Ids come from the export; every insert is `INSERT OR IGNORE`, so a
//!   row repeated across the file (or a re-run of the same file) collapses
//!   onto the first occurrence.
//! - `order_date` arrives as `MM-DD-YYYY` and lands as ISO-8601 text.

use std::path::Path;
use std::time::Instant;

use log::{error, info};
use rusqlite::{params, Connection};

use crate::import::csvfile::CsvReader;
use crate::import::{date_mdy, required_f64, required_i64, ImportError, ImportSummary};
use crate::model::order::{Company, Customer, Order, OrderItem, Product};

/// Imports a storefront order export, one pass over all five tables.
pub fn import_orders(
    conn: &Connection,
    path: impl AsRef<Path>,
) -> Result<ImportSummary, ImportError> {
    let started_at = Instant::now();
    info!("event=import module=import store=storefront status=start");

    match run(conn, path.as_ref()) {
        Ok(summary) => {
            info!(
                "event=import module=import store=storefront status=ok rows={} duration_ms={}",
                summary.rows,
                started_at.elapsed().as_millis()
            );
            Ok(summary)
        }
        Err(err) => {
            error!(
                "event=import module=import store=storefront status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn run(conn: &Connection, path: &Path) -> Result<ImportSummary, ImportError> {
    let mut reader = CsvReader::open(path)?;
    let customer_id_col = reader.column("customer_id")?;
    let first_name_col = reader.column("first_name")?;
    let last_name_col = reader.column("last_name")?;
    let email_col = reader.column("customer_email")?;
    let company_id_col = reader.column("company_id")?;
    let company_name_col = reader.column("company_name")?;
    let phone_col = reader.column("phone_number")?;
    let item_id_col = reader.column("item_id")?;
    let item_name_col = reader.column("item_name")?;
    let price_col = reader.column("item_price_usd")?;
    let order_id_col = reader.column("order_id")?;
    let order_date_col = reader.column("order_date")?;

    let mut rows = 0u64;
    while let Some(record) = reader.next_row()? {
        let line = reader.line();

        let customer = Customer {
            id: required_i64(line, "customer_id", &record[customer_id_col])?,
            first_name: record[first_name_col].clone(),
            last_name: record[last_name_col].clone(),
            email: record[email_col].clone(),
        };
        let company = Company {
            id: required_i64(line, "company_id", &record[company_id_col])?,
            name: record[company_name_col].clone(),
            phone: record[phone_col].clone(),
        };
        let product = Product {
            id: required_i64(line, "item_id", &record[item_id_col])?,
            name: record[item_name_col].clone(),
            price: required_f64(line, "item_price_usd", &record[price_col])?,
            company_id: company.id,
        };
        let order = Order {
            id: required_i64(line, "order_id", &record[order_id_col])?,
            customer_id: customer.id,
            date: date_mdy(line, "order_date", &record[order_date_col])?,
        };
        let item = OrderItem {
            order_id: order.id,
            product_id: product.id,
        };

        insert_customer(conn, &customer)?;
        insert_company(conn, &company)?;
        insert_product(conn, &product)?;
        insert_order(conn, &order)?;
        insert_order_item(conn, &item)?;

        rows += 1;
    }

    Ok(ImportSummary { rows })
}

fn insert_customer(conn: &Connection, customer: &Customer) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO customers (customer_id, first_name, last_name, email_address)
         VALUES (?1, ?2, ?3, ?4);",
        params![
            customer.id,
            customer.first_name,
            customer.last_name,
            customer.email,
        ],
    )?;
    Ok(())
}

fn insert_company(conn: &Connection, company: &Company) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO companies (company_id, name, phone_number)
         VALUES (?1, ?2, ?3);",
        params![company.id, company.name, company.phone],
    )?;
    Ok(())
}

fn insert_product(conn: &Connection, product: &Product) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO products (product_id, name, price, company_id)
         VALUES (?1, ?2, ?3, ?4);",
        params![product.id, product.name, product.price, product.company_id],
    )?;
    Ok(())
}

fn insert_order(conn: &Connection, order: &Order) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO orders (order_id, customer_id, order_date)
         VALUES (?1, ?2, ?3);",
        params![order.id, order.customer_id, order.date],
    )?;
    Ok(())
}

fn insert_order_item(conn: &Connection, item: &OrderItem) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO ordered_products (order_id, product_id)
         VALUES (?1, ?2);",
        params![item.order_id, item.product_id],
    )?;
    Ok(())
}
