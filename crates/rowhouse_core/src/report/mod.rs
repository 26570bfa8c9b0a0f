//! Read-only report drivers over the arcade and storefront stores.
//!
//! # Responsibility
//! - Run fixed aggregate and join queries and hand back typed rows.
//!
//! # Invariants
//! - Omitted optional filters degrade to `IS NOT NULL` on the same column,
//!   so the query shape never changes with filter presence.
//! - Result ordering is deterministic; ties break on a stable column.
//! - Reports never mutate; a filter matching nothing yields an empty list.

pub mod game_report;
pub mod order_report;
