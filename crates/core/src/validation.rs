//! The double-entry balance invariant.
//!
//! This is the one property the whole subsystem exists to protect: for
//! every journal entry, the debit lines and credit lines sum to the same
//! total, within a fixed tolerance of 0.01 currency units. It is checked
//! before any row is written.

use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::lines::LineSet;

/// Maximum tolerated difference between debit and credit sums (0.01).
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Validates the balance invariant for a prospective journal entry.
///
/// # Errors
///
/// Returns [`LedgerError::EmptyEntry`] for a line set with no lines and
/// [`LedgerError::Unbalanced`] when the sums differ by more than the
/// tolerance. Amount positivity needs no check here: a [`LineSet`] never
/// holds a non-positive line.
pub fn validate_line_set(lines: &LineSet) -> Result<(), LedgerError> {
    if lines.is_empty() {
        return Err(LedgerError::EmptyEntry);
    }

    let debit = lines.total_debit();
    let credit = lines.total_credit();

    if (debit - credit).abs() > BALANCE_TOLERANCE {
        return Err(LedgerError::Unbalanced { debit, credit });
    }

    Ok(())
}
