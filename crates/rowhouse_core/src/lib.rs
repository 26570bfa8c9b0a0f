//! Record and repository core for the rowhouse stores.
//! This crate is the single source of truth for store invariants.

pub mod api;
pub mod db;
pub mod import;
pub mod logging;
pub mod model;
pub mod repo;
pub mod report;

pub use api::{ApiStatus, TaskIdEnvelope, TaskListEnvelope};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::dog::{Dog, DogId};
pub use model::game::{Game, GameId, SalesFigures};
pub use model::order::{Company, Customer, Order, OrderItem, Product};
pub use model::task::{Task, TaskId};
pub use model::InvalidValue;
pub use repo::dog_repo::{DogRepository, SqliteDogRepository};
pub use repo::game_repo::{GameRepository, SqliteGameRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
