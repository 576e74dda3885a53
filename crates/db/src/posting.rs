//! Event posting: the composed entry point of the ledger.
//!
//! [`LedgerPoster`] turns a source event into a posted journal entry, a
//! deliberate no-op, or a recognised duplicate. Callers in business
//! operations use [`LedgerPoster::post_event_logged`], which never fails
//! the triggering operation.

use opsledger_core::{translate, LedgerError, SourceEvent};
use opsledger_shared::types::JournalEntryId;
use sea_orm::DatabaseConnection;
use tracing::{debug, error, info};

use crate::bootstrap::ensure_schema_once;
use crate::repositories::{AccountResolver, JournalRepository, NewJournalEntry};

/// Result of posting one source event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    /// A new journal entry was written.
    Posted(JournalEntryId),
    /// The event translated to no lines; nothing was written.
    NoOp,
    /// An entry with this event's entry number already exists.
    Duplicate,
}

/// Posts source events as balanced journal entries.
#[derive(Clone)]
pub struct LedgerPoster {
    db: DatabaseConnection,
    resolver: AccountResolver,
    journal: JournalRepository,
}

impl LedgerPoster {
    /// Creates a poster over the given connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        let resolver = AccountResolver::new(db.clone());
        let journal = JournalRepository::new(db.clone());
        Self {
            db,
            resolver,
            journal,
        }
    }

    /// Translates and posts one event.
    ///
    /// Reposting the same event is not an error: the journal's unique
    /// entry number absorbs it into [`PostOutcome::Duplicate`].
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unbalanced`] if the translated lines do not
    /// balance, [`LedgerError::AccountInactive`] if a required account has
    /// been deactivated, or [`LedgerError::Database`] on persistence
    /// failure.
    pub async fn post_event(&self, event: &SourceEvent) -> Result<PostOutcome, LedgerError> {
        ensure_schema_once(&self.db).await?;

        let lines = translate(event);
        let entry_number = event.entry_number();
        if lines.is_empty() {
            debug!(entry_number = %entry_number, "event carries no postable amounts");
            return Ok(PostOutcome::NoOp);
        }

        let input = NewJournalEntry {
            entry_number: entry_number.clone(),
            entry_date: event.occurred_on(),
            lines,
            reference: Some(event.reference()),
            description: event.description(),
            created_by: event.created_by().map(opsledger_shared::types::UserId::into_inner),
        };

        match self.journal.create_entry(&self.resolver, input).await {
            Ok(id) => Ok(PostOutcome::Posted(id)),
            Err(LedgerError::DuplicateEntry(_)) => {
                info!(entry_number = %entry_number, "entry already posted, skipping");
                Ok(PostOutcome::Duplicate)
            }
            Err(err) => Err(err),
        }
    }

    /// Posts one event without ever failing the caller.
    ///
    /// Any error is logged and swallowed, returning `None`. The role set
    /// is closed at the type level, so the unknown-role error that must
    /// reach callers cannot occur on this path.
    pub async fn post_event_logged(&self, event: &SourceEvent) -> Option<PostOutcome> {
        match self.post_event(event).await {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                error!(
                    entry_number = %event.entry_number(),
                    code = err.error_code(),
                    error = %err,
                    "ledger posting failed, source operation unaffected"
                );
                None
            }
        }
    }
}
