//! Ledger error taxonomy.
//!
//! The ledger is a shadow system: every failure here must be loggable and
//! droppable by the business operation that triggered it, with one
//! exception - [`LedgerError::UnknownRole`] indicates broken static
//! configuration and is allowed to surface as a hard failure.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Debit and credit sums differ by more than the tolerance.
    ///
    /// Always a translator logic bug, never a valid business state.
    #[error("Journal entry is not balanced. Debit: {debit}, Credit: {credit}")]
    Unbalanced {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// An account role was referenced by a key with no mapping entry.
    #[error("Unknown account role: {0}")]
    UnknownRole(String),

    /// The account for a role exists but is deactivated.
    #[error("Account for role {0} is inactive")]
    AccountInactive(&'static str),

    /// A journal entry with this entry number already exists.
    #[error("Journal entry {0} already exists")]
    DuplicateEntry(String),

    /// A journal entry must carry at least one line.
    #[error("Journal entry has no lines")]
    EmptyEntry,

    /// The ledger tables are absent and could not be provisioned.
    #[error("Ledger schema is missing and could not be created")]
    SchemaMissing,

    /// Datastore failure; the entry transaction was rolled back.
    #[error("Database error: {0}")]
    Database(String),
}

impl LedgerError {
    /// Returns the stable error code for logs and admin alerts.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unbalanced { .. } => "UNBALANCED",
            Self::UnknownRole(_) => "UNKNOWN_ROLE",
            Self::AccountInactive(_) => "ACCOUNT_INACTIVE",
            Self::DuplicateEntry(_) => "DUPLICATE_ENTRY",
            Self::EmptyEntry => "EMPTY_ENTRY",
            Self::SchemaMissing => "SCHEMA_MISSING",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns true if this error must surface to the caller instead of
    /// being logged and swallowed.
    ///
    /// Silent continuation on a broken role mapping would under-report
    /// every subsequent event, which is worse than stopping.
    #[must_use]
    pub fn must_surface(&self) -> bool {
        matches!(self, Self::UnknownRole(_))
    }
}
