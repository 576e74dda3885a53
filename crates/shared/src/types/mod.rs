//! Shared type definitions.

pub mod id;

pub use id::{AccountId, JournalEntryId, JournalLineId, UserId};
