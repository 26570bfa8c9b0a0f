//! Join reports over the storefront store.
//!
//! Both reports pivot on the `ordered_products` link table and carry the
//! buyer alongside each row.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use serde::Serialize;

use crate::repo::RepoResult;

/// One line item of an order, as reported by [`items_in_order`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub order_id: i64,
    pub order_date: NaiveDate,
    pub product_name: String,
    pub price: f64,
    pub first_name: String,
    pub last_name: String,
}

impl Display for OrderLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "order #{} ({}): {} at {:.2} USD for {} {}",
            self.order_id,
            self.order_date,
            self.product_name,
            self.price,
            self.first_name,
            self.last_name
        )
    }
}

/// One order containing a given product, as reported by
/// [`orders_containing_product`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductOrder {
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    pub order_id: i64,
    pub order_date: NaiveDate,
    pub first_name: String,
    pub last_name: String,
}

impl Display for ProductOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "product #{} {} ({:.2} USD) in order #{} ({}) for {} {}",
            self.product_id,
            self.product_name,
            self.price,
            self.order_id,
            self.order_date,
            self.first_name,
            self.last_name
        )
    }
}

/// Lists every item in one order together with the buyer.
///
/// An unknown `order_id` yields an empty list.
pub fn items_in_order(conn: &Connection, order_id: i64) -> RepoResult<Vec<OrderLine>> {
    let mut stmt = conn.prepare(
        "SELECT ordered_products.order_id, orders.order_date,
                products.name, products.price,
                customers.first_name, customers.last_name
         FROM ordered_products
             INNER JOIN orders
                 ON ordered_products.order_id = orders.order_id
             INNER JOIN products
                 ON ordered_products.product_id = products.product_id
             INNER JOIN customers
                 ON orders.customer_id = customers.customer_id
         WHERE ordered_products.order_id = ?1
         ORDER BY products.product_id ASC;",
    )?;

    let mut rows = stmt.query(params![order_id])?;
    let mut lines = Vec::new();
    while let Some(row) = rows.next()? {
        lines.push(OrderLine {
            order_id: row.get("order_id")?,
            order_date: row.get("order_date")?,
            product_name: row.get("name")?,
            price: row.get("price")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
        });
    }

    Ok(lines)
}

/// Lists every order that contains the given product, with the buyer.
///
/// An unknown `product_id` yields an empty list.
pub fn orders_containing_product(
    conn: &Connection,
    product_id: i64,
) -> RepoResult<Vec<ProductOrder>> {
    let mut stmt = conn.prepare(
        "SELECT ordered_products.product_id, products.name, products.price,
                orders.order_id, orders.order_date,
                customers.first_name, customers.last_name
         FROM ordered_products
             INNER JOIN orders
                 ON orders.order_id = ordered_products.order_id
             INNER JOIN products
                 ON products.product_id = ordered_products.product_id
             INNER JOIN customers
                 ON customers.customer_id = orders.customer_id
         WHERE ordered_products.product_id = ?1
         ORDER BY orders.order_id ASC;",
    )?;

    let mut rows = stmt.query(params![product_id])?;
    let mut orders = Vec::new();
    while let Some(row) = rows.next()? {
        orders.push(ProductOrder {
            product_id: row.get("product_id")?,
            product_name: row.get("name")?,
            price: row.get("price")?,
            order_id: row.get("order_id")?,
            order_date: row.get("order_date")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
        });
    }

    Ok(orders)
}

/// Orders placed in storefront, available to drive per-order reporting.
pub fn order_ids(conn: &Connection) -> RepoResult<Vec<i64>> {
    let mut stmt = conn.prepare("SELECT order_id FROM orders ORDER BY order_id ASC;")?;
    let mut rows = stmt.query([])?;
    let mut ids = Vec::new();
    while let Some(row) = rows.next()? {
        ids.push(row.get(0)?);
    }

    Ok(ids)
}
