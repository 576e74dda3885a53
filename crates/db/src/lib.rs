//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the ledger tables
//! - Repository abstractions for account resolution and journal writes
//! - The idempotent schema bootstrapper
//! - [`LedgerPoster`], the composed posting entry point

pub mod bootstrap;
pub mod entities;
pub mod migration;
pub mod posting;
pub mod repositories;

pub use posting::{LedgerPoster, PostOutcome};
pub use repositories::{AccountResolver, JournalRepository, NewJournalEntry};

use opsledger_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(&config.url);
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);
    Database::connect(options).await
}
