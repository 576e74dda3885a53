//! Journal entry persistence.
//!
//! Entries are written atomically: the header and every line land in one
//! transaction or not at all. Entries are append-only; this repository
//! exposes no update or delete.

use chrono::NaiveDate;
use opsledger_core::{validate_line_set, LedgerError, LineSet};
use opsledger_shared::types::JournalEntryId;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
    TransactionTrait,
};
use std::collections::HashMap;
use tracing::{error, info};
use uuid::Uuid;

use crate::entities::{journal_entries, journal_entry_lines};
use crate::repositories::{map_db_err, AccountResolver};

/// Input for creating one journal entry.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    /// Idempotency key, unique across the journal.
    pub entry_number: String,
    /// Business date of the underlying event.
    pub entry_date: NaiveDate,
    /// The balanced debit and credit lines.
    pub lines: LineSet,
    /// Source record reference, e.g. `PAY-42`.
    pub reference: Option<String>,
    /// Human-readable summary of the entry.
    pub description: String,
    /// User who triggered the source event, when known.
    pub created_by: Option<Uuid>,
}

/// Writes validated, balanced journal entries.
#[derive(Clone)]
pub struct JournalRepository {
    db: DatabaseConnection,
}

impl JournalRepository {
    /// Creates a repository over the given connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and persists one journal entry.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::EmptyEntry`] if the line set has no lines
    /// - [`LedgerError::Unbalanced`] if debits and credits differ by more
    ///   than the balance tolerance
    /// - [`LedgerError::DuplicateEntry`] if `entry_number` already exists
    /// - [`LedgerError::AccountInactive`] if a line targets a deactivated
    ///   account
    /// - [`LedgerError::Database`] on other query failures
    pub async fn create_entry(
        &self,
        resolver: &AccountResolver,
        input: NewJournalEntry,
    ) -> Result<JournalEntryId, LedgerError> {
        if let Err(err) = validate_line_set(&input.lines) {
            error!(
                entry_number = %input.entry_number,
                error = %err,
                "journal entry rejected"
            );
            return Err(err);
        }

        // Account creation is idempotent, so resolving outside the entry
        // transaction is safe even if the entry itself is rejected.
        let mut account_ids: HashMap<&'static str, Uuid> = HashMap::new();
        for line in input.lines.debits().iter().chain(input.lines.credits()) {
            if !account_ids.contains_key(line.role.key()) {
                let id = resolver.resolve(line.role).await?;
                account_ids.insert(line.role.key(), id);
            }
        }

        let entry_id = Uuid::new_v4();
        let header = journal_entries::ActiveModel {
            id: Set(entry_id),
            entry_number: Set(input.entry_number.clone()),
            entry_date: Set(input.entry_date),
            reference: Set(input.reference.clone()),
            description: Set(input.description.clone()),
            created_by: Set(input.created_by),
            created_at: Set(chrono::Utc::now().into()),
        };

        let mut line_models = Vec::with_capacity(input.lines.len());
        for line in input.lines.debits() {
            line_models.push(journal_entry_lines::ActiveModel {
                id: Set(Uuid::new_v4()),
                journal_entry_id: Set(entry_id),
                account_id: Set(account_ids[line.role.key()]),
                debit: Set(line.amount),
                credit: Set(rust_decimal::Decimal::ZERO),
                memo: Set(Some(line.memo.clone())),
            });
        }
        for line in input.lines.credits() {
            line_models.push(journal_entry_lines::ActiveModel {
                id: Set(Uuid::new_v4()),
                journal_entry_id: Set(entry_id),
                account_id: Set(account_ids[line.role.key()]),
                debit: Set(rust_decimal::Decimal::ZERO),
                credit: Set(line.amount),
                memo: Set(Some(line.memo.clone())),
            });
        }

        let txn = self.db.begin().await.map_err(map_db_err)?;

        if let Err(err) = journal_entries::Entity::insert(header).exec(&txn).await {
            // Transaction rolls back on drop.
            return Err(Self::classify_header_err(err, &input.entry_number));
        }

        journal_entry_lines::Entity::insert_many(line_models)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        info!(
            entry_number = %input.entry_number,
            lines = input.lines.len(),
            "journal entry posted"
        );
        Ok(JournalEntryId::from_uuid(entry_id))
    }

    /// Fetches an entry header by its entry number.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Database`] on query failure.
    pub async fn find_by_entry_number(
        &self,
        entry_number: &str,
    ) -> Result<Option<journal_entries::Model>, LedgerError> {
        journal_entries::Entity::find()
            .filter(journal_entries::Column::EntryNumber.eq(entry_number))
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }

    /// Fetches the lines of an entry.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Database`] on query failure.
    pub async fn find_lines(
        &self,
        entry_id: JournalEntryId,
    ) -> Result<Vec<journal_entry_lines::Model>, LedgerError> {
        journal_entry_lines::Entity::find()
            .filter(journal_entry_lines::Column::JournalEntryId.eq(entry_id.into_inner()))
            .all(&self.db)
            .await
            .map_err(map_db_err)
    }

    fn classify_header_err(err: DbErr, entry_number: &str) -> LedgerError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                LedgerError::DuplicateEntry(entry_number.to_owned())
            }
            _ => map_db_err(err),
        }
    }
}
