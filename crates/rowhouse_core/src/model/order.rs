//! Storefront rows: customers, companies, products, orders and line items.
//!
//! These arrive fully formed from the order export, ids included, so the
//! shapes here are plain data carriers with mandatory keys. The import path
//! writes them with `INSERT OR IGNORE`; repeated rows in the export collapse
//! onto the first occurrence.

use chrono::NaiveDate;
use serde::Serialize;

/// A buyer identified by the export's own customer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Unique per customer in the store.
    pub email: String,
}

/// A vendor company; `phone` is unique in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

/// A sellable item tied to the company that supplies it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price in USD.
    pub price: f64,
    pub company_id: i64,
}

/// One placed order; line items live in [`OrderItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub date: NaiveDate,
}

/// Order/product link row; one per distinct product in an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub order_id: i64,
    pub product_id: i64,
}
