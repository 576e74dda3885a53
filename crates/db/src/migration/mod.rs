//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration. The ledger DDL is
//! written with `IF NOT EXISTS` guards so the same statements can also be
//! replayed by the runtime schema bootstrapper.

pub use sea_orm_migration::prelude::*;

mod m20260210_000001_ledger;

pub(crate) use m20260210_000001_ledger::LEDGER_SQL;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260210_000001_ledger::Migration)]
    }
}
