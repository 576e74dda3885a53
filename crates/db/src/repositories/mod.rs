//! Repository layer for ledger persistence.

pub mod account;
pub mod journal;

pub use account::AccountResolver;
pub use journal::{JournalRepository, NewJournalEntry};

use opsledger_core::LedgerError;
use sea_orm::DbErr;

/// Converts a database error into the domain error type.
///
/// Constraint violations are classified by the callers that can name the
/// violated constraint; everything else becomes [`LedgerError::Database`].
pub(crate) fn map_db_err(err: DbErr) -> LedgerError {
    LedgerError::Database(err.to_string())
}
