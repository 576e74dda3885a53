//! Account types and the role-to-account mapping.
//!
//! Translators never hard-code account codes. They address accounts by a
//! stable semantic [`AccountRole`], and the mapping below carries the
//! concrete `(code, name, type)` triple each role provisions on first use.
//! Codes can be renumbered here without touching any translation rule.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Account classification in the chart of accounts.
///
/// The type determines which side represents an increase for reporting
/// purposes; the journal engine itself only enforces sum balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account (cash, bank, receivables, inventory, ...).
    Asset,
    /// Liability account (loans payable, accounts payable).
    Liability,
    /// Revenue account.
    Revenue,
    /// Expense account.
    Expense,
}

impl AccountType {
    /// Returns the canonical database string for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "Asset",
            Self::Liability => "Liability",
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable semantic account roles.
///
/// Each role maps to exactly one account code. The set is closed: a role
/// that is not listed here does not exist, and referencing one by an
/// unknown string key is a programmer error ([`LedgerError::UnknownRole`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    /// Cash on hand.
    AssetCash,
    /// Bank account.
    AssetBank,
    /// Mobile money wallet.
    AssetMomo,
    /// Accounts receivable.
    AssetAccountsReceivable,
    /// Materials inventory.
    AssetMaterialsInventory,
    /// Worker loans receivable.
    AssetWorkerLoans,
    /// Fixed assets.
    AssetFixedAssets,
    /// Loans payable.
    LiabilityLoansPayable,
    /// Accounts payable.
    LiabilityAccountsPayable,
    /// Contract revenue.
    RevenueContract,
    /// Rig fee revenue.
    RevenueRigFee,
    /// Materials sales revenue.
    RevenueMaterials,
    /// Other revenue.
    RevenueOther,
    /// Materials cost.
    ExpenseMaterials,
    /// Wages and salaries.
    ExpenseWages,
    /// Operating expenses.
    ExpenseOperating,
    /// Other expenses.
    ExpenseOther,
}

impl AccountRole {
    /// All roles, in chart-of-accounts code order.
    pub const ALL: [Self; 17] = [
        Self::AssetCash,
        Self::AssetBank,
        Self::AssetMomo,
        Self::AssetAccountsReceivable,
        Self::AssetMaterialsInventory,
        Self::AssetWorkerLoans,
        Self::AssetFixedAssets,
        Self::LiabilityLoansPayable,
        Self::LiabilityAccountsPayable,
        Self::RevenueContract,
        Self::RevenueRigFee,
        Self::RevenueMaterials,
        Self::RevenueOther,
        Self::ExpenseMaterials,
        Self::ExpenseWages,
        Self::ExpenseOperating,
        Self::ExpenseOther,
    ];

    /// Returns the stable account code this role provisions.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AssetCash => "1000",
            Self::AssetBank => "1100",
            Self::AssetMomo => "1200",
            Self::AssetAccountsReceivable => "1300",
            Self::AssetMaterialsInventory => "1400",
            Self::AssetWorkerLoans => "1500",
            Self::AssetFixedAssets => "1600",
            Self::LiabilityLoansPayable => "2000",
            Self::LiabilityAccountsPayable => "2100",
            Self::RevenueContract => "4000",
            Self::RevenueRigFee => "4010",
            Self::RevenueMaterials => "4020",
            Self::RevenueOther => "4090",
            Self::ExpenseMaterials => "5000",
            Self::ExpenseWages => "5100",
            Self::ExpenseOperating => "5200",
            Self::ExpenseOther => "5990",
        }
    }

    /// Returns the default display name used when the account is created.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::AssetCash => "Cash on Hand",
            Self::AssetBank => "Bank Account",
            Self::AssetMomo => "Mobile Money",
            Self::AssetAccountsReceivable => "Accounts Receivable",
            Self::AssetMaterialsInventory => "Materials Inventory",
            Self::AssetWorkerLoans => "Worker Loans Receivable",
            Self::AssetFixedAssets => "Fixed Assets",
            Self::LiabilityLoansPayable => "Loans Payable",
            Self::LiabilityAccountsPayable => "Accounts Payable",
            Self::RevenueContract => "Contract Revenue",
            Self::RevenueRigFee => "Rig Fee Revenue",
            Self::RevenueMaterials => "Materials Sales Revenue",
            Self::RevenueOther => "Other Revenue",
            Self::ExpenseMaterials => "Materials Cost",
            Self::ExpenseWages => "Wages & Salaries",
            Self::ExpenseOperating => "Operating Expenses",
            Self::ExpenseOther => "Other Expenses",
        }
    }

    /// Returns the account type for this role.
    #[must_use]
    pub const fn account_type(self) -> AccountType {
        match self {
            Self::AssetCash
            | Self::AssetBank
            | Self::AssetMomo
            | Self::AssetAccountsReceivable
            | Self::AssetMaterialsInventory
            | Self::AssetWorkerLoans
            | Self::AssetFixedAssets => AccountType::Asset,
            Self::LiabilityLoansPayable | Self::LiabilityAccountsPayable => AccountType::Liability,
            Self::RevenueContract
            | Self::RevenueRigFee
            | Self::RevenueMaterials
            | Self::RevenueOther => AccountType::Revenue,
            Self::ExpenseMaterials
            | Self::ExpenseWages
            | Self::ExpenseOperating
            | Self::ExpenseOther => AccountType::Expense,
        }
    }

    /// Returns the stable string key for this role (e.g. `asset_cash`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AssetCash => "asset_cash",
            Self::AssetBank => "asset_bank",
            Self::AssetMomo => "asset_momo",
            Self::AssetAccountsReceivable => "asset_accounts_receivable",
            Self::AssetMaterialsInventory => "asset_materials_inventory",
            Self::AssetWorkerLoans => "asset_worker_loans",
            Self::AssetFixedAssets => "asset_fixed_assets",
            Self::LiabilityLoansPayable => "liability_loans_payable",
            Self::LiabilityAccountsPayable => "liability_accounts_payable",
            Self::RevenueContract => "revenue_contract",
            Self::RevenueRigFee => "revenue_rig_fee",
            Self::RevenueMaterials => "revenue_materials",
            Self::RevenueOther => "revenue_other",
            Self::ExpenseMaterials => "expense_materials",
            Self::ExpenseWages => "expense_wages",
            Self::ExpenseOperating => "expense_operating",
            Self::ExpenseOther => "expense_other",
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for AccountRole {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.key() == s)
            .ok_or_else(|| LedgerError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = AccountRole::ALL.into_iter().map(AccountRole::code).collect();
        assert_eq!(codes.len(), AccountRole::ALL.len());
    }

    #[test]
    fn test_keys_round_trip() {
        for role in AccountRole::ALL {
            assert_eq!(AccountRole::from_str(role.key()).unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_key_is_programmer_error() {
        let err = AccountRole::from_str("asset_gold_bars").unwrap_err();
        assert!(matches!(err, LedgerError::UnknownRole(key) if key == "asset_gold_bars"));
    }

    #[test]
    fn test_type_follows_key_prefix() {
        for role in AccountRole::ALL {
            let prefix = role.key().split('_').next().unwrap();
            let expected = match prefix {
                "asset" => AccountType::Asset,
                "liability" => AccountType::Liability,
                "revenue" => AccountType::Revenue,
                "expense" => AccountType::Expense,
                other => panic!("unexpected role prefix {other}"),
            };
            assert_eq!(role.account_type(), expected, "role {role}");
        }
    }
}
