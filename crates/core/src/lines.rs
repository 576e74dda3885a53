//! Debit/credit line sets for one journal entry.
//!
//! A [`LineSet`] is the output of an event translator and the input of the
//! journal engine. It only ever holds strictly positive amounts: pushing a
//! zero or negative amount is a silent no-op, so absent facts never turn
//! into zero-amount rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::AccountRole;

/// A single debit or credit line, addressed by account role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// The account role this line posts to.
    pub role: AccountRole,
    /// The amount (always strictly positive).
    pub amount: Decimal,
    /// Line memo for the journal.
    pub memo: String,
}

/// The debit and credit lines of one prospective journal entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSet {
    debits: Vec<Line>,
    credits: Vec<Line>,
}

impl LineSet {
    /// Creates an empty line set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a debit line if `amount` is strictly positive.
    pub fn debit(&mut self, role: AccountRole, amount: Decimal, memo: &str) {
        if amount > Decimal::ZERO {
            self.debits.push(Line {
                role,
                amount,
                memo: memo.to_string(),
            });
        }
    }

    /// Appends a credit line if `amount` is strictly positive.
    pub fn credit(&mut self, role: AccountRole, amount: Decimal, memo: &str) {
        if amount > Decimal::ZERO {
            self.credits.push(Line {
                role,
                amount,
                memo: memo.to_string(),
            });
        }
    }

    /// The debit lines.
    #[must_use]
    pub fn debits(&self) -> &[Line] {
        &self.debits
    }

    /// The credit lines.
    #[must_use]
    pub fn credits(&self) -> &[Line] {
        &self.credits
    }

    /// Sum of all debit amounts.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.debits.iter().map(|line| line.amount).sum()
    }

    /// Sum of all credit amounts.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.credits.iter().map(|line| line.amount).sum()
    }

    /// Number of lines on both sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.debits.len() + self.credits.len()
    }

    /// True if no financial fact was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.debits.is_empty() && self.credits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_zero_and_negative_amounts_are_dropped() {
        let mut lines = LineSet::new();
        lines.debit(AccountRole::AssetCash, dec!(0), "nothing");
        lines.debit(AccountRole::AssetCash, dec!(-5), "refund?");
        lines.credit(AccountRole::RevenueOther, dec!(0), "nothing");
        assert!(lines.is_empty());
        assert_eq!(lines.len(), 0);
    }

    #[test]
    fn test_totals() {
        let mut lines = LineSet::new();
        lines.debit(AccountRole::AssetCash, dec!(300), "cash");
        lines.debit(AccountRole::AssetAccountsReceivable, dec!(200), "outstanding");
        lines.credit(AccountRole::RevenueRigFee, dec!(500), "rig fee");
        assert_eq!(lines.total_debit(), dec!(500));
        assert_eq!(lines.total_credit(), dec!(500));
        assert_eq!(lines.len(), 3);
    }
}
