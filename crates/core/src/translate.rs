//! Per-category event translation rules.
//!
//! Each rule is a pure function from a [`SourceEvent`] payload to the
//! debit/credit [`LineSet`] the journal engine will validate and persist.
//! Every recognized fact is strictly-greater-than-zero gated: absent or
//! zero fields contribute no lines, and an event with nothing to book
//! yields an empty set, which callers treat as a successful no-op.

use rust_decimal::Decimal;

use crate::accounts::AccountRole;
use crate::event::{
    AssetPurchase, ClientInvoicePayment, LoanDisbursement, LoanRepayment, MaintenanceCost,
    MaterialsPurchase, MaterialsSale, PayrollPayment, PosPayment, ReportSettlement, SourceEvent,
};
use crate::lines::LineSet;

/// Translates a business event into the line set to post.
#[must_use]
pub fn translate(event: &SourceEvent) -> LineSet {
    match event {
        SourceEvent::ReportSettlement(event) => report_settlement(event),
        SourceEvent::PayrollPayment(event) => payroll_payment(event),
        SourceEvent::LoanDisbursement(event) => loan_disbursement(event),
        SourceEvent::LoanRepayment(event) => loan_repayment(event),
        SourceEvent::MaterialsPurchase(event) => materials_purchase(event),
        SourceEvent::MaterialsSale(event) => materials_sale(event),
        SourceEvent::AssetPurchase(event) => asset_purchase(event),
        SourceEvent::PosPayment(event) => pos_payment(event),
        SourceEvent::ClientInvoicePayment(event) => client_invoice_payment(event),
        SourceEvent::MaintenanceCost(event) => maintenance_cost(event),
    }
}

/// Unwraps an optional amount, treating absent as zero.
fn amount(field: Option<Decimal>) -> Decimal {
    field.unwrap_or(Decimal::ZERO)
}

fn report_settlement(event: &ReportSettlement) -> LineSet {
    let mut lines = LineSet::new();

    // Contract sum: revenue recognized, receivable until settled.
    let contract_sum = amount(event.contract_sum);
    lines.credit(
        AccountRole::RevenueContract,
        contract_sum,
        "Contract revenue from field report",
    );
    lines.debit(
        AccountRole::AssetAccountsReceivable,
        contract_sum,
        "Accounts receivable - contract sum",
    );

    // Rig fee: the full charged amount is revenue even when not fully
    // collected; the uncollected remainder stays receivable.
    let rig_fee_charged = amount(event.rig_fee_charged);
    if rig_fee_charged > Decimal::ZERO {
        let rig_fee_collected = amount(event.rig_fee_collected);
        lines.credit(
            AccountRole::RevenueRigFee,
            rig_fee_charged,
            "Rig fee revenue (charged)",
        );
        lines.debit(
            AccountRole::AssetCash,
            rig_fee_collected,
            "Cash received - rig fee",
        );
        lines.debit(
            AccountRole::AssetAccountsReceivable,
            rig_fee_charged - rig_fee_collected,
            "Outstanding rig fee receivable",
        );
    }

    // Cash withdrawn from the bank into hand.
    let cash_received = amount(event.cash_received);
    lines.debit(
        AccountRole::AssetCash,
        cash_received,
        "Cash received from company",
    );
    lines.credit(
        AccountRole::AssetBank,
        cash_received,
        "Cash withdrawn from bank",
    );

    // Materials sold on site.
    let materials_income = amount(event.materials_income);
    lines.credit(
        AccountRole::RevenueMaterials,
        materials_income,
        "Materials sales revenue",
    );
    lines.debit(
        AccountRole::AssetCash,
        materials_income,
        "Cash from materials sales",
    );

    // Materials purchased or used.
    let materials_cost = amount(event.materials_cost);
    lines.debit(
        AccountRole::ExpenseMaterials,
        materials_cost,
        "Materials purchased/used",
    );
    lines.credit(AccountRole::AssetCash, materials_cost, "Cash paid for materials");

    // Wages.
    let total_wages = amount(event.total_wages);
    lines.debit(AccountRole::ExpenseWages, total_wages, "Wages paid to workers");
    lines.credit(AccountRole::AssetCash, total_wages, "Cash paid for wages");

    // Daily operating expenses: whatever of total_expenses is not already
    // booked as wages or materials.
    let daily_expenses = amount(event.total_expenses) - total_wages - materials_cost;
    lines.debit(
        AccountRole::ExpenseOperating,
        daily_expenses,
        "Daily operating expenses",
    );
    lines.credit(AccountRole::AssetCash, daily_expenses, "Cash paid for expenses");

    // Asset movements between cash, mobile money and bank.
    let momo_transfer = amount(event.momo_transfer);
    lines.debit(
        AccountRole::AssetMomo,
        momo_transfer,
        "Transfer to mobile money",
    );
    lines.credit(
        AccountRole::AssetCash,
        momo_transfer,
        "Cash transferred to MoMo",
    );

    let cash_given = amount(event.cash_given);
    lines.debit(AccountRole::AssetBank, cash_given, "Cash deposited to bank");
    lines.credit(AccountRole::AssetCash, cash_given, "Cash given to company");

    let bank_deposit = amount(event.bank_deposit);
    lines.debit(AccountRole::AssetBank, bank_deposit, "Bank deposit");
    lines.credit(AccountRole::AssetCash, bank_deposit, "Cash deposited to bank");

    lines
}

fn payroll_payment(event: &PayrollPayment) -> LineSet {
    let mut lines = LineSet::new();
    let worker = event.worker_name.as_deref().unwrap_or("");
    lines.debit(
        AccountRole::ExpenseWages,
        event.amount,
        &format!("Wage payment to {worker}"),
    );
    lines.credit(AccountRole::AssetCash, event.amount, "Cash paid for wages");
    lines
}

fn loan_disbursement(event: &LoanDisbursement) -> LineSet {
    let mut lines = LineSet::new();
    let worker = event.worker_name.as_deref().unwrap_or("");
    lines.debit(
        AccountRole::AssetWorkerLoans,
        event.loan_amount,
        &format!("Loan receivable from {worker}"),
    );
    lines.credit(
        AccountRole::AssetCash,
        event.loan_amount,
        "Cash disbursed as loan",
    );
    lines
}

fn loan_repayment(event: &LoanRepayment) -> LineSet {
    let mut lines = LineSet::new();
    lines.debit(
        AccountRole::AssetCash,
        event.repayment_amount,
        "Loan repayment received",
    );
    lines.credit(
        AccountRole::AssetWorkerLoans,
        event.repayment_amount,
        "Reduce loan receivable - repayment received",
    );
    lines
}

fn materials_purchase(event: &MaterialsPurchase) -> LineSet {
    let mut lines = LineSet::new();
    lines.debit(
        AccountRole::AssetMaterialsInventory,
        event.total_cost,
        "Materials inventory purchase",
    );
    lines.credit(
        AccountRole::AssetCash,
        event.total_cost,
        "Cash paid for materials",
    );
    lines
}

fn materials_sale(event: &MaterialsSale) -> LineSet {
    let mut lines = LineSet::new();
    lines.debit(
        AccountRole::AssetCash,
        event.total_cost,
        "Cash received from materials sale",
    );
    lines.credit(
        AccountRole::RevenueMaterials,
        event.total_cost,
        "Materials sales revenue",
    );

    // Cost of goods: move the sold stock out of inventory.
    let cogs = amount(event.unit_cost) * amount(event.quantity);
    lines.debit(AccountRole::ExpenseMaterials, cogs, "Cost of materials sold");
    lines.credit(AccountRole::AssetMaterialsInventory, cogs, "Reduce inventory");

    lines
}

fn asset_purchase(event: &AssetPurchase) -> LineSet {
    let mut lines = LineSet::new();

    // On an edit, only the positive cost delta is booked, so re-saving an
    // unchanged record never double-books the asset.
    let booked = match event.previous_cost {
        Some(previous) => {
            if (event.purchase_cost - previous).abs() < crate::validation::BALANCE_TOLERANCE {
                return lines;
            }
            event.purchase_cost - previous
        }
        None => event.purchase_cost,
    };
    if booked <= Decimal::ZERO {
        return lines;
    }

    let name = event.asset_name.as_deref().unwrap_or("");
    lines.debit(
        AccountRole::AssetFixedAssets,
        booked,
        &format!("Asset purchase: {name}"),
    );
    lines.credit(
        AccountRole::AssetCash,
        booked,
        "Cash paid for asset purchase",
    );
    lines
}

fn pos_payment(event: &PosPayment) -> LineSet {
    let mut lines = LineSet::new();
    let asset = payment_asset_role(event.payment_method.as_deref(), false);
    lines.debit(asset, event.amount, "Payment received for POS order");
    lines.credit(AccountRole::RevenueOther, event.amount, "POS order revenue");
    lines
}

fn client_invoice_payment(event: &ClientInvoicePayment) -> LineSet {
    let mut lines = LineSet::new();
    let asset = payment_asset_role(event.payment_method.as_deref(), true);
    lines.debit(asset, event.amount, "Client payment received");
    lines.credit(
        AccountRole::AssetAccountsReceivable,
        event.amount,
        "Accounts receivable settlement",
    );
    lines
}

fn maintenance_cost(event: &MaintenanceCost) -> LineSet {
    let mut lines = LineSet::new();
    let what = event.description.as_deref().unwrap_or("");
    lines.debit(
        AccountRole::ExpenseOperating,
        event.total_cost,
        &format!("Maintenance expense: {what}"),
    );
    lines.credit(
        AccountRole::AssetCash,
        event.total_cost,
        "Cash paid for maintenance",
    );
    lines
}

/// Infers the asset account for a free-form payment method string.
///
/// Keyword match: bank/transfer hits the bank account, momo/mobile hits
/// the mobile money wallet, card hits the bank when `card_to_bank` is set
/// (client-portal payments), and anything else falls back to cash.
fn payment_asset_role(method: Option<&str>, card_to_bank: bool) -> AccountRole {
    let method = method.unwrap_or("cash").to_lowercase();
    if method.contains("bank") || method.contains("transfer") {
        AccountRole::AssetBank
    } else if method.contains("momo") || method.contains("mobile") {
        AccountRole::AssetMomo
    } else if card_to_bank && method.contains("card") {
        AccountRole::AssetBank
    } else {
        AccountRole::AssetCash
    }
}
