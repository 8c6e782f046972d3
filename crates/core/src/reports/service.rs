//! Report generation service.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use super::balance::balance;
use super::classification::{AccountClass, NonCurrentKeywords, ParsedAccountCode, classify_with};
use super::types::{
    BalanceSheetData, BalanceSheetItem, BalanceSheetSection, BalanceSheetStatement, PeriodAmounts,
    PeriodNetIncome, PreviousNetIncome, StatementSection, TrialBalanceAccount,
};

/// Service for generating financial reports from trial balance snapshots.
pub struct ReportService;

impl ReportService {
    /// Builds a two-period balance sheet from trial balance snapshots.
    ///
    /// Every classified account present in either snapshot appears exactly
    /// once. Accounts only present in `previous` are reported with a zero
    /// current balance. Income and expense accounts are skipped.
    #[must_use]
    pub fn build_balance_sheet(
        current: &[TrialBalanceAccount],
        previous: &[TrialBalanceAccount],
    ) -> BalanceSheetData {
        Self::build_balance_sheet_with(current, previous, &NonCurrentKeywords::DEFAULT)
    }

    /// Same as [`Self::build_balance_sheet`] with custom keyword tables.
    #[must_use]
    pub fn build_balance_sheet_with(
        current: &[TrialBalanceAccount],
        previous: &[TrialBalanceAccount],
        keywords: &NonCurrentKeywords,
    ) -> BalanceSheetData {
        let previous_balances: HashMap<&str, Decimal> = previous
            .iter()
            .map(|a| (a.account_code.as_str(), balance(a)))
            .collect();

        let mut data = BalanceSheetData::default();

        for account in current {
            let Some(section) = classify_with(account, keywords) else {
                continue;
            };
            data.section_mut(section).push(BalanceSheetItem {
                code: account.account_code.clone(),
                name: account.account_name.clone(),
                current: balance(account),
                previous: previous_balances
                    .get(account.account_code.as_str())
                    .copied()
                    .unwrap_or(Decimal::ZERO),
            });
        }

        let current_codes: HashSet<&str> =
            current.iter().map(|a| a.account_code.as_str()).collect();

        for account in previous
            .iter()
            .filter(|a| !current_codes.contains(a.account_code.as_str()))
        {
            let Some(section) = classify_with(account, keywords) else {
                continue;
            };
            data.section_mut(section).push(BalanceSheetItem {
                code: account.account_code.clone(),
                name: account.account_name.clone(),
                current: Decimal::ZERO,
                previous: balance(account),
            });
        }

        for section in BalanceSheetSection::ALL {
            data.section_mut(section)
                .sort_by(|a, b| compare_codes(&a.code, &b.code));
        }

        data
    }

    /// Net income of a snapshot: income (`4-`) minus expense (`5-`).
    #[must_use]
    pub fn net_income(trial_balance: &[TrialBalanceAccount]) -> Decimal {
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;

        for account in trial_balance {
            match ParsedAccountCode::parse(&account.account_code).class {
                AccountClass::Income => income += account.credit - account.debit,
                AccountClass::Expense => expense += account.debit - account.credit,
                _ => {}
            }
        }

        income - expense
    }

    /// Net income for both periods.
    ///
    /// With [`PreviousNetIncome::Zeroed`] the previous figure is always zero
    /// and `previous` is not inspected.
    #[must_use]
    pub fn net_income_for_periods(
        current: &[TrialBalanceAccount],
        previous: &[TrialBalanceAccount],
        mode: PreviousNetIncome,
    ) -> PeriodNetIncome {
        PeriodNetIncome {
            current: Self::net_income(current),
            previous: match mode {
                PreviousNetIncome::Zeroed => Decimal::ZERO,
                PreviousNetIncome::Computed => Self::net_income(previous),
            },
        }
    }

    /// Adds section totals and the net income figure to a balance sheet.
    ///
    /// Net income is counted in total equity but is not added as an item
    /// of the equity section.
    #[must_use]
    pub fn assemble_statement(
        data: &BalanceSheetData,
        net_income: PeriodNetIncome,
    ) -> BalanceSheetStatement {
        let sections: Vec<StatementSection> = BalanceSheetSection::ALL
            .into_iter()
            .map(|section| {
                let items = data.section(section).to_vec();
                StatementSection {
                    section,
                    title: section.title().to_string(),
                    total_current: items.iter().map(|i| i.current).sum(),
                    total_previous: items.iter().map(|i| i.previous).sum(),
                    items,
                }
            })
            .collect();

        let sum = |wanted: &[BalanceSheetSection]| {
            sections
                .iter()
                .filter(|s| wanted.contains(&s.section))
                .fold(PeriodAmounts::default(), |acc, s| PeriodAmounts {
                    current: acc.current + s.total_current,
                    previous: acc.previous + s.total_previous,
                })
        };

        let total_assets = sum(&[
            BalanceSheetSection::CurrentAssets,
            BalanceSheetSection::NonCurrentAssets,
        ]);
        let total_liabilities = sum(&[
            BalanceSheetSection::CurrentLiabilities,
            BalanceSheetSection::NonCurrentLiabilities,
        ]);
        let equity = sum(&[BalanceSheetSection::Equity]);
        let total_equity = PeriodAmounts {
            current: equity.current + net_income.current,
            previous: equity.previous + net_income.previous,
        };
        let liabilities_and_equity = PeriodAmounts {
            current: total_liabilities.current + total_equity.current,
            previous: total_liabilities.previous + total_equity.previous,
        };

        BalanceSheetStatement {
            sections,
            net_income,
            total_assets,
            total_liabilities,
            total_equity,
            liabilities_and_equity,
            is_balanced_current: total_assets.current == liabilities_and_equity.current,
            is_balanced_previous: total_assets.previous == liabilities_and_equity.previous,
        }
    }
}

/// Orders account codes case-insensitively.
///
/// Codes that differ only in case put the lowercase letter first, as
/// locale collation does.
#[must_use]
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
