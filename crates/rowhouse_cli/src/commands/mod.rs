//! One module per store; each exposes its clap action enum and a `run`
//! that borrows the shared connection for the length of the command.

pub mod arcade;
pub mod kennel;
pub mod storefront;
pub mod tasks;
