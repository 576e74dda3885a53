//! Core ledger logic for opsledger.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. It turns business events into balanced double-entry
//! line sets and validates them before anything touches a datastore.
//!
//! # Modules
//!
//! - `accounts` - Account types and the role-to-account mapping
//! - `event` - Source events emitted by business operations
//! - `lines` - Debit/credit line sets for one journal entry
//! - `translate` - Per-category event translation rules
//! - `validation` - The double-entry balance invariant
//! - `error` - Ledger error taxonomy

pub mod accounts;
pub mod error;
pub mod event;
pub mod lines;
pub mod translate;
pub mod validation;

#[cfg(test)]
mod translate_props;

pub use accounts::{AccountRole, AccountType};
pub use error::LedgerError;
pub use event::SourceEvent;
pub use lines::{Line, LineSet};
pub use translate::translate;
pub use validation::{validate_line_set, BALANCE_TOLERANCE};
