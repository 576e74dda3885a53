//! `SeaORM` entity definitions for the ledger tables.

pub mod accounts;
pub mod journal_entries;
pub mod journal_entry_lines;
