//! Idempotent runtime schema bootstrap.
//!
//! Deployments that never ran migrations still get a working ledger: the
//! first posting attempt probes for the ledger tables and replays the DDL
//! when they are missing. The DDL uses `IF NOT EXISTS` guards throughout,
//! so concurrent bootstrappers converge on the same schema.

use opsledger_core::LedgerError;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::migration::LEDGER_SQL;
use crate::repositories::AccountResolver;

static SCHEMA_READY: OnceCell<()> = OnceCell::const_new();

/// Ensures the ledger schema and default accounts exist, at most once per
/// process.
///
/// A failed attempt does not latch: the next caller retries.
///
/// # Errors
///
/// Returns [`LedgerError::SchemaMissing`] if the tables are still absent
/// after replaying the DDL, or [`LedgerError::Database`] on query failure.
pub async fn ensure_schema_once(db: &DatabaseConnection) -> Result<(), LedgerError> {
    SCHEMA_READY
        .get_or_try_init(|| ensure_schema(db))
        .await
        .map(|&()| ())
}

/// Probes for the ledger tables, creating them and the default chart of
/// accounts when missing.
///
/// # Errors
///
/// Returns [`LedgerError::SchemaMissing`] if the tables are still absent
/// after replaying the DDL, or [`LedgerError::Database`] on query failure.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), LedgerError> {
    if probe(db).await {
        return seed_defaults(db).await;
    }

    warn!("ledger tables missing, replaying schema DDL");

    // A concurrent bootstrapper may race the CREATE statements. The guards
    // make the replay idempotent, so a failure here only matters if the
    // re-probe also fails.
    if let Err(err) = db.execute_unprepared(LEDGER_SQL).await {
        warn!(error = %err, "schema DDL replay reported an error, re-probing");
    }

    if !probe(db).await {
        return Err(LedgerError::SchemaMissing);
    }

    info!("ledger schema created");
    seed_defaults(db).await
}

async fn probe(db: &DatabaseConnection) -> bool {
    db.execute_unprepared("SELECT 1 FROM journal_entry_lines LIMIT 1")
        .await
        .is_ok()
        && db
            .execute_unprepared("SELECT 1 FROM accounts LIMIT 1")
            .await
            .is_ok()
}

async fn seed_defaults(db: &DatabaseConnection) -> Result<(), LedgerError> {
    AccountResolver::new(db.clone()).ensure_defaults().await
}
