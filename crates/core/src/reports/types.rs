//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use coopbooks_shared::types::PreviousNetIncome;

/// One account row of a trial balance snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceAccount {
    /// Structured account code (`1-1001`, `2-2010`, ...).
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Free-text account type label ("Cash", "Fixed Assets", ...).
    pub account_type: String,
    /// Debit total for the period.
    pub debit: Decimal,
    /// Credit total for the period.
    pub credit: Decimal,
}

impl TrialBalanceAccount {
    /// Creates a new trial balance row.
    #[must_use]
    pub fn new(
        account_code: impl Into<String>,
        account_name: impl Into<String>,
        account_type: impl Into<String>,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        Self {
            account_code: account_code.into(),
            account_name: account_name.into(),
            account_type: account_type.into(),
            debit,
            credit,
        }
    }
}

/// Trial balance totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

impl TrialBalanceTotals {
    /// Sums the debit and credit columns of a snapshot.
    #[must_use]
    pub fn from_accounts(accounts: &[TrialBalanceAccount]) -> Self {
        let total_debit: Decimal = accounts.iter().map(|a| a.debit).sum();
        let total_credit: Decimal = accounts.iter().map(|a| a.credit).sum();

        Self {
            total_debit,
            total_credit,
            is_balanced: total_debit == total_credit,
        }
    }
}

/// Balance sheet section an account is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BalanceSheetSection {
    /// Current assets.
    CurrentAssets,
    /// Non-current assets.
    NonCurrentAssets,
    /// Current liabilities.
    CurrentLiabilities,
    /// Non-current liabilities.
    NonCurrentLiabilities,
    /// Equity.
    Equity,
}

impl BalanceSheetSection {
    /// All sections in presentation order.
    pub const ALL: [Self; 5] = [
        Self::CurrentAssets,
        Self::NonCurrentAssets,
        Self::CurrentLiabilities,
        Self::NonCurrentLiabilities,
        Self::Equity,
    ];

    /// Human-readable section title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CurrentAssets => "Current Assets",
            Self::NonCurrentAssets => "Non-current Assets",
            Self::CurrentLiabilities => "Current Liabilities",
            Self::NonCurrentLiabilities => "Non-current Liabilities",
            Self::Equity => "Equity",
        }
    }
}

/// A single balance sheet line, comparing two periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetItem {
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Signed balance for the current period.
    pub current: Decimal,
    /// Signed balance for the previous period.
    pub previous: Decimal,
}

/// Asset side of the balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSections {
    /// Current assets.
    pub current_assets: Vec<BalanceSheetItem>,
    /// Non-current assets.
    pub non_current_assets: Vec<BalanceSheetItem>,
}

/// Liability side of the balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiabilitySections {
    /// Current liabilities.
    pub current_liabilities: Vec<BalanceSheetItem>,
    /// Non-current liabilities.
    pub non_current_liabilities: Vec<BalanceSheetItem>,
}

/// Two-period balance sheet, partitioned by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetData {
    /// Assets.
    pub assets: AssetSections,
    /// Liabilities.
    pub liabilities: LiabilitySections,
    /// Equity.
    pub equity: Vec<BalanceSheetItem>,
}

impl BalanceSheetData {
    /// Returns the items of one section.
    #[must_use]
    pub fn section(&self, section: BalanceSheetSection) -> &[BalanceSheetItem] {
        match section {
            BalanceSheetSection::CurrentAssets => &self.assets.current_assets,
            BalanceSheetSection::NonCurrentAssets => &self.assets.non_current_assets,
            BalanceSheetSection::CurrentLiabilities => &self.liabilities.current_liabilities,
            BalanceSheetSection::NonCurrentLiabilities => {
                &self.liabilities.non_current_liabilities
            }
            BalanceSheetSection::Equity => &self.equity,
        }
    }

    pub(crate) fn section_mut(&mut self, section: BalanceSheetSection) -> &mut Vec<BalanceSheetItem> {
        match section {
            BalanceSheetSection::CurrentAssets => &mut self.assets.current_assets,
            BalanceSheetSection::NonCurrentAssets => &mut self.assets.non_current_assets,
            BalanceSheetSection::CurrentLiabilities => &mut self.liabilities.current_liabilities,
            BalanceSheetSection::NonCurrentLiabilities => {
                &mut self.liabilities.non_current_liabilities
            }
            BalanceSheetSection::Equity => &mut self.equity,
        }
    }

    /// Iterates over every item together with its section.
    pub fn items(&self) -> impl Iterator<Item = (BalanceSheetSection, &BalanceSheetItem)> {
        BalanceSheetSection::ALL
            .into_iter()
            .flat_map(move |s| self.section(s).iter().map(move |item| (s, item)))
    }
}

/// Net income for the current and previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodNetIncome {
    /// Current period net income.
    pub current: Decimal,
    /// Previous period net income.
    pub previous: Decimal,
}

/// Section with per-period totals, as presented in a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSection {
    /// Section identifier.
    pub section: BalanceSheetSection,
    /// Section title.
    pub title: String,
    /// Section lines.
    pub items: Vec<BalanceSheetItem>,
    /// Current period total.
    pub total_current: Decimal,
    /// Previous period total.
    pub total_previous: Decimal,
}

/// Amounts for both periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAmounts {
    /// Current period.
    pub current: Decimal,
    /// Previous period.
    pub previous: Decimal,
}

/// Balance sheet with totals and the net income line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetStatement {
    /// The five classified sections in presentation order.
    pub sections: Vec<StatementSection>,
    /// Net income carried into equity.
    pub net_income: PeriodNetIncome,
    /// Total assets.
    pub total_assets: PeriodAmounts,
    /// Total liabilities.
    pub total_liabilities: PeriodAmounts,
    /// Total equity, net income included.
    pub total_equity: PeriodAmounts,
    /// Liabilities plus equity.
    pub liabilities_and_equity: PeriodAmounts,
    /// Whether assets equal liabilities plus equity in the current period.
    pub is_balanced_current: bool,
    /// Whether assets equal liabilities plus equity in the previous period.
    pub is_balanced_previous: bool,
}
