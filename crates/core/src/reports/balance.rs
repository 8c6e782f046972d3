//! Normal-balance calculations.
//!
//! - Asset: balance = debit - credit (debit-normal)
//! - Everything else: balance = credit - debit (credit-normal)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::classification::{AccountClass, ParsedAccountCode};
use super::types::TrialBalanceAccount;

/// Side on which an account's balance increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debit-normal (assets).
    Debit,
    /// Credit-normal (liabilities, equity).
    Credit,
}

impl NormalBalance {
    /// Normal balance side for an account class.
    #[must_use]
    pub const fn for_class(class: AccountClass) -> Self {
        if class.is_debit_normal() {
            Self::Debit
        } else {
            Self::Credit
        }
    }

    /// Signed balance for the given debit and credit totals.
    #[must_use]
    pub fn apply(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

/// Signed balance of a trial balance row.
#[must_use]
pub fn balance(account: &TrialBalanceAccount) -> Decimal {
    let class = ParsedAccountCode::parse(&account.account_code).class;
    NormalBalance::for_class(class).apply(account.debit, account.credit)
}
