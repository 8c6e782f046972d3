//! Account classification for the balance sheet.
//!
//! An account code is parsed once into a [`ParsedAccountCode`]; every rule
//! afterwards (section placement, normal balance, net income) branches on
//! the parsed tag rather than re-inspecting the raw string.
//!
//! An account is non-current when either signal fires:
//! - its free-text type contains one of the known non-current type names
//! - its code follows the `1-2...` / `2-2...` numbering convention

use serde::{Deserialize, Serialize};

use super::types::{BalanceSheetSection, TrialBalanceAccount};

/// Type names that mark an asset as non-current.
pub const NON_CURRENT_ASSET_TYPES: &[&str] = &[
    "Fixed Assets",
    "Building",
    "Land",
    "Equipment",
    "Vehicle",
    "Accumulated Depreciation",
    "Intangible Assets",
    "Long-term Investment",
];

/// Type names that mark a liability as non-current.
pub const NON_CURRENT_LIABILITY_TYPES: &[&str] = &[
    "Member Savings",
    "Long-term Debt",
    "Time Deposit",
    "Member Deposits",
];

/// Account class encoded by the leading segment of an account code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountClass {
    /// `1-` accounts.
    Asset,
    /// `2-` accounts.
    Liability,
    /// `3-` accounts.
    Equity,
    /// `4-` accounts.
    Income,
    /// `5-` accounts.
    Expense,
    /// Any other prefix.
    Unknown,
}

impl AccountClass {
    /// Returns true for debit-normal classes on the balance sheet.
    ///
    /// Only assets are treated as debit-normal; every other class, including
    /// unknown prefixes, uses `credit - debit`.
    #[must_use]
    pub const fn is_debit_normal(self) -> bool {
        matches!(self, Self::Asset)
    }
}

/// Account code parsed into its class and the non-current numbering flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAccountCode {
    /// Account class.
    pub class: AccountClass,
    /// Whether the code follows the non-current numbering (`1-2`, `2-2`).
    pub non_current_code: bool,
}

impl ParsedAccountCode {
    /// Parses an account code.
    #[must_use]
    pub fn parse(code: &str) -> Self {
        let Some((head, rest)) = code.split_once('-') else {
            return Self {
                class: AccountClass::Unknown,
                non_current_code: false,
            };
        };

        let class = match head {
            "1" => AccountClass::Asset,
            "2" => AccountClass::Liability,
            "3" => AccountClass::Equity,
            "4" => AccountClass::Income,
            "5" => AccountClass::Expense,
            _ => AccountClass::Unknown,
        };

        let non_current_code =
            matches!(class, AccountClass::Asset | AccountClass::Liability) && rest.starts_with('2');

        Self {
            class,
            non_current_code,
        }
    }
}

/// Non-current keyword tables, one per class that is split.
#[derive(Debug, Clone, Copy)]
pub struct NonCurrentKeywords {
    /// Asset type names.
    pub assets: &'static [&'static str],
    /// Liability type names.
    pub liabilities: &'static [&'static str],
}

impl NonCurrentKeywords {
    /// The built-in keyword tables.
    pub const DEFAULT: Self = Self {
        assets: NON_CURRENT_ASSET_TYPES,
        liabilities: NON_CURRENT_LIABILITY_TYPES,
    };

    fn for_class(&self, class: AccountClass) -> &'static [&'static str] {
        match class {
            AccountClass::Asset => self.assets,
            AccountClass::Liability => self.liabilities,
            _ => &[],
        }
    }

    /// Returns true if `account_type` contains any keyword of `class`,
    /// ignoring case.
    #[must_use]
    pub fn matches(&self, class: AccountClass, account_type: &str) -> bool {
        let account_type = account_type.to_lowercase();
        self.for_class(class)
            .iter()
            .any(|keyword| account_type.contains(&keyword.to_lowercase()))
    }
}

impl Default for NonCurrentKeywords {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Classifies an account into a balance sheet section.
///
/// Returns `None` for income, expense, and unrecognized accounts.
#[must_use]
pub fn classify(account: &TrialBalanceAccount) -> Option<BalanceSheetSection> {
    classify_with(account, &NonCurrentKeywords::DEFAULT)
}

/// Classifies an account using the given keyword tables.
#[must_use]
pub fn classify_with(
    account: &TrialBalanceAccount,
    keywords: &NonCurrentKeywords,
) -> Option<BalanceSheetSection> {
    let parsed = ParsedAccountCode::parse(&account.account_code);
    let non_current =
        || parsed.non_current_code || keywords.matches(parsed.class, &account.account_type);

    match parsed.class {
        AccountClass::Asset if non_current() => Some(BalanceSheetSection::NonCurrentAssets),
        AccountClass::Asset => Some(BalanceSheetSection::CurrentAssets),
        AccountClass::Liability if non_current() => {
            Some(BalanceSheetSection::NonCurrentLiabilities)
        }
        AccountClass::Liability => Some(BalanceSheetSection::CurrentLiabilities),
        AccountClass::Equity => Some(BalanceSheetSection::Equity),
        AccountClass::Income | AccountClass::Expense | AccountClass::Unknown => None,
    }
}
