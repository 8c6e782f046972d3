//! Report output.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use coopbooks_core::reports::{
    BalanceSheetData, BalanceSheetStatement, PreviousNetIncome, TrialBalanceAccount,
    TrialBalanceTotals, ValidatedTrialBalance,
};
use coopbooks_shared::types::{Currency, format_amount};

const CODE_WIDTH: usize = 10;
const NAME_WIDTH: usize = 36;
const AMOUNT_WIDTH: usize = 18;

/// Balance sheet document as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct BalanceSheetReport {
    /// Current period end date.
    pub end_date: Option<NaiveDate>,
    /// Previous period end date.
    pub previous_end_date: Option<NaiveDate>,
    /// Currency amounts are rendered in.
    pub currency: Currency,
    /// How the previous net income was derived.
    pub previous_net_income: PreviousNetIncome,
    /// Classified sections.
    pub balance_sheet: BalanceSheetData,
    /// Sections with totals.
    pub statement: BalanceSheetStatement,
}

/// Trial balance document as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct TrialBalanceReport {
    /// Snapshot end date.
    pub end_date: Option<NaiveDate>,
    /// Currency amounts are rendered in.
    pub currency: Currency,
    /// Rows.
    pub accounts: Vec<TrialBalanceAccount>,
    /// Totals computed from the rows.
    pub totals: TrialBalanceTotals,
}

impl TrialBalanceReport {
    /// Wraps a validated snapshot.
    #[must_use]
    pub fn new(snapshot: ValidatedTrialBalance, currency: Currency) -> Self {
        Self {
            end_date: snapshot.end_date,
            currency,
            accounts: snapshot.accounts,
            totals: snapshot.totals,
        }
    }
}

fn column_label(date: Option<NaiveDate>, fallback: &str) -> String {
    date.map_or_else(|| fallback.to_string(), |d| d.format("%Y-%m-%d").to_string())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('~');
        out
    }
}

fn amount_row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    current: Decimal,
    previous: Decimal,
    currency: Currency,
) -> fmt::Result {
    writeln!(
        f,
        "{:<width$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}",
        truncate(label, CODE_WIDTH + NAME_WIDTH),
        format_amount(current, currency),
        format_amount(previous, currency),
        width = CODE_WIDTH + NAME_WIDTH,
    )
}

impl fmt::Display for BalanceSheetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current_label = column_label(self.end_date, "Current");
        let previous_label = column_label(self.previous_end_date, "Previous");
        let statement = &self.statement;
        let currency = self.currency;

        writeln!(f, "BALANCE SHEET ({currency})")?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<CODE_WIDTH$}{:<NAME_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}",
            "Code", "Account", current_label, previous_label
        )?;

        for section in &statement.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.title)?;
            for item in &section.items {
                writeln!(
                    f,
                    "{:<CODE_WIDTH$}{:<NAME_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}",
                    truncate(&item.code, CODE_WIDTH - 1),
                    truncate(&item.name, NAME_WIDTH - 1),
                    format_amount(item.current, currency),
                    format_amount(item.previous, currency),
                )?;
            }
            amount_row(
                f,
                &format!("Total {}", section.title),
                section.total_current,
                section.total_previous,
                currency,
            )?;
        }

        writeln!(f)?;
        amount_row(
            f,
            "Net income for the period (SHU)",
            statement.net_income.current,
            statement.net_income.previous,
            currency,
        )?;
        if self.previous_net_income == PreviousNetIncome::Zeroed {
            writeln!(f, "  (previous period net income not computed)")?;
        }

        writeln!(f)?;
        amount_row(
            f,
            "Total Assets",
            statement.total_assets.current,
            statement.total_assets.previous,
            currency,
        )?;
        amount_row(
            f,
            "Total Liabilities",
            statement.total_liabilities.current,
            statement.total_liabilities.previous,
            currency,
        )?;
        amount_row(
            f,
            "Total Equity",
            statement.total_equity.current,
            statement.total_equity.previous,
            currency,
        )?;
        amount_row(
            f,
            "Total Liabilities and Equity",
            statement.liabilities_and_equity.current,
            statement.liabilities_and_equity.previous,
            currency,
        )?;

        let yes_no = |b: bool| if b { "yes" } else { "no" };
        writeln!(
            f,
            "Balanced: {} (current), {} (previous)",
            yes_no(statement.is_balanced_current),
            yes_no(statement.is_balanced_previous)
        )
    }
}

impl fmt::Display for TrialBalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let currency = self.currency;

        writeln!(
            f,
            "TRIAL BALANCE {} ({currency})",
            column_label(self.end_date, "")
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<CODE_WIDTH$}{:<NAME_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}",
            "Code", "Account", "Debit", "Credit"
        )?;
        for account in &self.accounts {
            writeln!(
                f,
                "{:<CODE_WIDTH$}{:<NAME_WIDTH$}{:>AMOUNT_WIDTH$}{:>AMOUNT_WIDTH$}",
                truncate(&account.account_code, CODE_WIDTH - 1),
                truncate(&account.account_name, NAME_WIDTH - 1),
                format_amount(account.debit, currency),
                format_amount(account.credit, currency),
            )?;
        }
        writeln!(f)?;
        amount_row(
            f,
            "Total",
            self.totals.total_debit,
            self.totals.total_credit,
            currency,
        )?;
        writeln!(
            f,
            "Balanced: {}",
            if self.totals.is_balanced { "yes" } else { "no" }
        )
    }
}
