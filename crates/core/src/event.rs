//! Source events emitted by business operations.
//!
//! Every money-moving action in the platform emits one of these after its
//! own primary write has committed. Each category carries a closed,
//! statically-typed payload; financial fields are individually optional
//! and contribute nothing when absent or zero.

use chrono::NaiveDate;
use opsledger_shared::types::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A field report reaching settlement.
///
/// The one event with many independent money flows: revenue recognition,
/// cash collection, expenses, and asset transfers can all appear on a
/// single report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettlement {
    /// Business identifier of the report.
    pub report_id: String,
    /// Date the report covers.
    pub report_date: NaiveDate,
    /// Site the report was filed for.
    pub site_name: Option<String>,
    /// Client the report was filed for.
    pub client_name: Option<String>,
    /// Contract sum recognized as revenue.
    pub contract_sum: Option<Decimal>,
    /// Rig fee charged to the client.
    pub rig_fee_charged: Option<Decimal>,
    /// Portion of the rig fee collected in cash.
    pub rig_fee_collected: Option<Decimal>,
    /// Cash withdrawn from the bank into hand.
    pub cash_received: Option<Decimal>,
    /// Income from materials sold on site.
    pub materials_income: Option<Decimal>,
    /// Cost of materials purchased or used.
    pub materials_cost: Option<Decimal>,
    /// Total wages paid.
    pub total_wages: Option<Decimal>,
    /// Total expenses including wages and materials.
    pub total_expenses: Option<Decimal>,
    /// Cash moved into the mobile money wallet.
    pub momo_transfer: Option<Decimal>,
    /// Cash handed over to the company.
    pub cash_given: Option<Decimal>,
    /// Cash deposited at the bank.
    pub bank_deposit: Option<Decimal>,
    /// User who saved the report.
    pub created_by: Option<UserId>,
}

/// A payroll entry paid out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollPayment {
    /// Business identifier of the payroll entry.
    pub payroll_entry_id: String,
    /// Payment date.
    pub payment_date: NaiveDate,
    /// Worker being paid.
    pub worker_name: Option<String>,
    /// Amount paid.
    pub amount: Decimal,
    /// User who recorded the payment.
    pub created_by: Option<UserId>,
}

/// A loan disbursed to a worker (a receivable, not an expense).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanDisbursement {
    /// Business identifier of the loan.
    pub loan_id: String,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Borrowing worker.
    pub worker_name: Option<String>,
    /// Disbursed amount.
    pub loan_amount: Decimal,
    /// User who recorded the disbursement.
    pub created_by: Option<UserId>,
}

/// A worker repaying part of a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRepayment {
    /// Business identifier of the repayment.
    pub repayment_id: String,
    /// Repayment date.
    pub repayment_date: NaiveDate,
    /// Repaying worker.
    pub worker_name: Option<String>,
    /// Repaid amount.
    pub repayment_amount: Decimal,
    /// User who recorded the repayment.
    pub created_by: Option<UserId>,
}

/// Materials bought into inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialsPurchase {
    /// Business identifier of the inventory transaction.
    pub transaction_id: String,
    /// Transaction date.
    pub transaction_date: NaiveDate,
    /// What was purchased.
    pub description: Option<String>,
    /// Total cost paid.
    pub total_cost: Decimal,
    /// User who recorded the purchase.
    pub created_by: Option<UserId>,
}

/// Materials sold out of inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialsSale {
    /// Business identifier of the inventory transaction.
    pub transaction_id: String,
    /// Transaction date.
    pub transaction_date: NaiveDate,
    /// What was sold.
    pub description: Option<String>,
    /// Sale proceeds.
    pub total_cost: Decimal,
    /// Unit cost for the cost-of-goods component.
    pub unit_cost: Option<Decimal>,
    /// Quantity sold for the cost-of-goods component.
    pub quantity: Option<Decimal>,
    /// User who recorded the sale.
    pub created_by: Option<UserId>,
}

/// A fixed asset bought, or its recorded cost edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPurchase {
    /// Business identifier of the asset.
    pub asset_id: String,
    /// Purchase date.
    pub purchase_date: NaiveDate,
    /// Asset name.
    pub asset_name: Option<String>,
    /// Recorded purchase cost.
    pub purchase_cost: Decimal,
    /// Previously recorded cost, supplied by the caller when editing an
    /// existing record. Only the positive delta is booked.
    pub previous_cost: Option<Decimal>,
    /// User who recorded the purchase.
    pub created_by: Option<UserId>,
}

/// A point-of-sale payment captured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosPayment {
    /// Business identifier of the payment.
    pub payment_id: String,
    /// Payment date.
    pub payment_date: NaiveDate,
    /// Order the payment settles.
    pub order_number: Option<String>,
    /// Amount captured.
    pub amount: Decimal,
    /// Free-form payment method (matched by keyword).
    pub payment_method: Option<String>,
    /// Cashier or user who captured the payment.
    pub created_by: Option<UserId>,
}

/// A client-portal invoice payment captured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInvoicePayment {
    /// Business identifier of the payment.
    pub payment_id: String,
    /// Payment date.
    pub payment_date: NaiveDate,
    /// Invoice the payment settles.
    pub invoice_number: Option<String>,
    /// Amount captured.
    pub amount: Decimal,
    /// Free-form payment method (matched by keyword).
    pub payment_method: Option<String>,
    /// User who captured the payment.
    pub created_by: Option<UserId>,
}

/// A maintenance job costed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceCost {
    /// Business identifier of the maintenance job.
    pub maintenance_id: String,
    /// Maintenance date.
    pub maintenance_date: NaiveDate,
    /// What was done.
    pub description: Option<String>,
    /// Total cost incurred.
    pub total_cost: Decimal,
    /// User who recorded the cost.
    pub created_by: Option<UserId>,
}

/// A category-tagged business event requesting ledger posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum SourceEvent {
    /// A field report reaching settlement.
    ReportSettlement(ReportSettlement),
    /// A payroll entry paid out.
    PayrollPayment(PayrollPayment),
    /// A loan disbursed to a worker.
    LoanDisbursement(LoanDisbursement),
    /// A worker repaying part of a loan.
    LoanRepayment(LoanRepayment),
    /// Materials bought into inventory.
    MaterialsPurchase(MaterialsPurchase),
    /// Materials sold out of inventory.
    MaterialsSale(MaterialsSale),
    /// A fixed asset bought or re-costed.
    AssetPurchase(AssetPurchase),
    /// A point-of-sale payment captured.
    PosPayment(PosPayment),
    /// A client-portal invoice payment captured.
    ClientInvoicePayment(ClientInvoicePayment),
    /// A maintenance job costed.
    MaintenanceCost(MaintenanceCost),
}

impl SourceEvent {
    /// Returns the entry-number prefix for this category.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::ReportSettlement(_) => "FR",
            Self::PayrollPayment(_) => "PAY",
            Self::LoanDisbursement(_) => "LOAN-DISB",
            Self::LoanRepayment(_) => "LOAN-REPAY",
            Self::MaterialsPurchase(_) => "MAT-PURCH",
            Self::MaterialsSale(_) => "MAT-SALE",
            Self::AssetPurchase(_) => "ASSET-PURCH",
            Self::PosPayment(_) => "POS-PAY",
            Self::ClientInvoicePayment(_) => "CLT-PAY",
            Self::MaintenanceCost(_) => "MNT",
        }
    }

    /// Returns the identifier of the originating business record.
    #[must_use]
    pub fn source_id(&self) -> &str {
        match self {
            Self::ReportSettlement(event) => &event.report_id,
            Self::PayrollPayment(event) => &event.payroll_entry_id,
            Self::LoanDisbursement(event) => &event.loan_id,
            Self::LoanRepayment(event) => &event.repayment_id,
            Self::MaterialsPurchase(event) => &event.transaction_id,
            Self::MaterialsSale(event) => &event.transaction_id,
            Self::AssetPurchase(event) => &event.asset_id,
            Self::PosPayment(event) => &event.payment_id,
            Self::ClientInvoicePayment(event) => &event.payment_id,
            Self::MaintenanceCost(event) => &event.maintenance_id,
        }
    }

    /// Returns the date the event occurred on.
    #[must_use]
    pub const fn occurred_on(&self) -> NaiveDate {
        match self {
            Self::ReportSettlement(event) => event.report_date,
            Self::PayrollPayment(event) => event.payment_date,
            Self::LoanDisbursement(event) => event.issue_date,
            Self::LoanRepayment(event) => event.repayment_date,
            Self::MaterialsPurchase(event) => event.transaction_date,
            Self::MaterialsSale(event) => event.transaction_date,
            Self::AssetPurchase(event) => event.purchase_date,
            Self::PosPayment(event) => event.payment_date,
            Self::ClientInvoicePayment(event) => event.payment_date,
            Self::MaintenanceCost(event) => event.maintenance_date,
        }
    }

    /// Returns the user who triggered the event, when known.
    #[must_use]
    pub const fn created_by(&self) -> Option<UserId> {
        match self {
            Self::ReportSettlement(event) => event.created_by,
            Self::PayrollPayment(event) => event.created_by,
            Self::LoanDisbursement(event) => event.created_by,
            Self::LoanRepayment(event) => event.created_by,
            Self::MaterialsPurchase(event) => event.created_by,
            Self::MaterialsSale(event) => event.created_by,
            Self::AssetPurchase(event) => event.created_by,
            Self::PosPayment(event) => event.created_by,
            Self::ClientInvoicePayment(event) => event.created_by,
            Self::MaintenanceCost(event) => event.created_by,
        }
    }

    /// Builds the deterministic entry number for this event.
    ///
    /// `<prefix>-<source_id>-<YYYYMMDD>` acts as a natural idempotency and
    /// audit key: re-processing the same event produces the same number.
    #[must_use]
    pub fn entry_number(&self) -> String {
        format!(
            "{}-{}-{}",
            self.prefix(),
            self.source_id(),
            self.occurred_on().format("%Y%m%d")
        )
    }

    /// Builds the journal reference for this event.
    #[must_use]
    pub fn reference(&self) -> String {
        match self {
            Self::ReportSettlement(event) => event.report_id.clone(),
            Self::PayrollPayment(event) => format!("PAY-{}", event.payroll_entry_id),
            Self::LoanDisbursement(event) => format!("LOAN-{}", event.loan_id),
            Self::LoanRepayment(event) => format!("REPAY-{}", event.repayment_id),
            Self::MaterialsPurchase(event) => format!("MAT-{}", event.transaction_id),
            Self::MaterialsSale(event) => format!("MAT-{}", event.transaction_id),
            Self::AssetPurchase(event) => format!("ASSET-{}", event.asset_id),
            Self::PosPayment(event) => format!("POS-PAY-{}", event.payment_id),
            Self::ClientInvoicePayment(event) => format!("CLT-PAY-{}", event.payment_id),
            Self::MaintenanceCost(event) => format!("MNT-{}", event.maintenance_id),
        }
    }

    /// Builds the journal description for this event.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::ReportSettlement(event) => format!(
                "Field Report: {} - {}",
                event.site_name.as_deref().unwrap_or(""),
                event.client_name.as_deref().unwrap_or("")
            ),
            Self::PayrollPayment(event) => format!(
                "Payroll payment: {}",
                event.worker_name.as_deref().unwrap_or("")
            ),
            Self::LoanDisbursement(event) => format!(
                "Loan disbursement to {}",
                event.worker_name.as_deref().unwrap_or("")
            ),
            Self::LoanRepayment(event) => format!(
                "Loan repayment from {}",
                event.worker_name.as_deref().unwrap_or("")
            ),
            Self::MaterialsPurchase(event) => format!(
                "Materials purchase: {}",
                event.description.as_deref().unwrap_or("")
            ),
            Self::MaterialsSale(event) => format!(
                "Materials sale: {}",
                event.description.as_deref().unwrap_or("")
            ),
            Self::AssetPurchase(event) => format!(
                "Asset purchase: {}",
                event.asset_name.as_deref().unwrap_or("")
            ),
            Self::PosPayment(event) => format!(
                "POS order payment: {}",
                event.order_number.as_deref().unwrap_or("")
            ),
            Self::ClientInvoicePayment(event) => format!(
                "Client payment for invoice: {}",
                event.invoice_number.as_deref().unwrap_or("")
            ),
            Self::MaintenanceCost(event) => format!(
                "Maintenance cost: {}",
                event.description.as_deref().unwrap_or("")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn payroll() -> SourceEvent {
        SourceEvent::PayrollPayment(PayrollPayment {
            payroll_entry_id: "42".to_string(),
            payment_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            worker_name: Some("Kwame Mensah".to_string()),
            amount: dec!(850),
            created_by: None,
        })
    }

    #[test]
    fn test_entry_number_is_deterministic() {
        let event = payroll();
        assert_eq!(event.entry_number(), "PAY-42-20260314");
        assert_eq!(event.entry_number(), event.entry_number());
    }

    #[test]
    fn test_reference_and_description() {
        let event = payroll();
        assert_eq!(event.reference(), "PAY-42");
        assert_eq!(event.description(), "Payroll payment: Kwame Mensah");
    }

    #[test]
    fn test_events_deserialize_by_category_tag() {
        let payload = serde_json::json!({
            "category": "payroll_payment",
            "payroll_entry_id": "42",
            "payment_date": "2026-03-14",
            "worker_name": "Kwame Mensah",
            "amount": "850",
            "created_by": null,
        });
        let event: SourceEvent = serde_json::from_value(payload).unwrap();
        assert_eq!(event.entry_number(), "PAY-42-20260314");

        let roundtrip = serde_json::to_value(&event).unwrap();
        assert_eq!(roundtrip["category"], "payroll_payment");
    }

    #[test]
    fn test_prefixes_are_unique() {
        let prefixes = [
            "FR",
            "PAY",
            "LOAN-DISB",
            "LOAN-REPAY",
            "MAT-PURCH",
            "MAT-SALE",
            "ASSET-PURCH",
            "POS-PAY",
            "CLT-PAY",
            "MNT",
        ];
        let unique: std::collections::HashSet<&str> = prefixes.into_iter().collect();
        assert_eq!(unique.len(), prefixes.len());
    }
}
