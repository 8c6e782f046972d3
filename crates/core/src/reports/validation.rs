//! Boundary validation for trial balance input.
//!
//! Rows arrive from the accounting service as loosely typed JSON. They are
//! checked here once and converted into [`TrialBalanceAccount`]s; the report
//! service itself never validates.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::classification::{AccountClass, ParsedAccountCode};
use super::error::ReportError;
use super::types::{TrialBalanceAccount, TrialBalanceTotals};

/// Trial balance row as received, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTrialBalanceAccount {
    /// Account code.
    #[serde(default)]
    pub account_code: Option<String>,
    /// Account name.
    #[serde(default)]
    pub account_name: Option<String>,
    /// Account type label.
    #[serde(default)]
    pub account_type: Option<String>,
    /// Debit, as a JSON number or numeric string.
    #[serde(default)]
    pub debit: Value,
    /// Credit, as a JSON number or numeric string.
    #[serde(default)]
    pub credit: Value,
}

/// `data` payload of the trial balance endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrialBalancePayload {
    /// Account rows.
    pub trial_balance: Vec<RawTrialBalanceAccount>,
    /// Reported total debit.
    #[serde(default)]
    pub total_debit: Value,
    /// Reported total credit.
    #[serde(default)]
    pub total_credit: Value,
    /// Reported balance flag.
    #[serde(default)]
    pub is_balanced: Option<bool>,
    /// Snapshot end date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Non-fatal finding raised during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    /// Surrounding whitespace was stripped from the account code.
    CodeNormalized {
        /// Code as received.
        raw: String,
        /// Code used for classification.
        code: String,
    },
    /// The code does not start with a known class prefix.
    UnknownClassPrefix {
        /// Account code.
        code: String,
    },
    /// A debit or credit is negative.
    NegativeAmount {
        /// Account code.
        code: String,
        /// Field name.
        field: &'static str,
        /// Amount.
        amount: Decimal,
    },
    /// The totals reported by the service differ from the row sums.
    TotalsMismatch {
        /// Totals as reported.
        reported: TrialBalanceTotals,
        /// Totals computed from the rows.
        computed: TrialBalanceTotals,
    },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CodeNormalized { raw, code } => {
                write!(f, "account code {raw:?} was read as {code:?}")
            }
            Self::UnknownClassPrefix { code } => {
                write!(f, "account {code} has an unrecognized class prefix")
            }
            Self::NegativeAmount {
                code,
                field,
                amount,
            } => write!(f, "account {code} has a negative {field}: {amount}"),
            Self::TotalsMismatch { reported, computed } => write!(
                f,
                "reported totals {}/{} differ from computed {}/{}",
                reported.total_debit,
                reported.total_credit,
                computed.total_debit,
                computed.total_credit
            ),
        }
    }
}

/// A snapshot that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTrialBalance {
    /// Validated rows, in input order.
    pub accounts: Vec<TrialBalanceAccount>,
    /// Totals computed from the rows.
    pub totals: TrialBalanceTotals,
    /// Snapshot end date, if known.
    pub end_date: Option<NaiveDate>,
    /// Non-fatal findings.
    pub warnings: Vec<ValidationWarning>,
}

/// Parses a JSON amount (number or numeric string).
///
/// Returns `None` for anything else, including `null`.
#[must_use]
pub fn parse_amount(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Largest debit or credit magnitude accepted, 10^18.
///
/// Keeps every sum over a snapshot, and across both periods, far inside the
/// range of [`Decimal`].
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

fn required_amount(
    row: usize,
    code: &str,
    field: &'static str,
    value: &Value,
) -> Result<Decimal, ReportError> {
    if value.is_null() {
        return Err(ReportError::MissingField { row, field });
    }

    let amount = parse_amount(value).ok_or_else(|| ReportError::NonNumericAmount {
        row,
        code: code.to_string(),
        field,
        value: value.to_string(),
    })?;

    if amount.abs() > MAX_AMOUNT {
        return Err(ReportError::AmountOutOfRange {
            row,
            code: code.to_string(),
            field,
            value: amount,
        });
    }

    Ok(amount)
}

/// Validates raw rows and converts them into trial balance accounts.
///
/// # Errors
///
/// Returns an error for a missing account code, a missing or non-numeric
/// debit/credit, an amount beyond [`MAX_AMOUNT`], or a code that appears
/// twice.
pub fn validate_trial_balance(
    rows: &[RawTrialBalanceAccount],
) -> Result<ValidatedTrialBalance, ReportError> {
    let mut accounts = Vec::with_capacity(rows.len());
    let mut warnings = Vec::new();
    let mut seen = HashSet::with_capacity(rows.len());

    for (index, raw) in rows.iter().enumerate() {
        let raw_code = raw.account_code.as_deref().unwrap_or_default();
        let code = raw_code.trim();
        if code.is_empty() {
            return Err(ReportError::MissingField {
                row: index,
                field: "account_code",
            });
        }
        if code != raw_code {
            warnings.push(ValidationWarning::CodeNormalized {
                raw: raw_code.to_string(),
                code: code.to_string(),
            });
        }

        if !seen.insert(code.to_string()) {
            return Err(ReportError::DuplicateAccountCode(code.to_string()));
        }

        let debit = required_amount(index, code, "debit", &raw.debit)?;
        let credit = required_amount(index, code, "credit", &raw.credit)?;

        if ParsedAccountCode::parse(code).class == AccountClass::Unknown {
            warnings.push(ValidationWarning::UnknownClassPrefix {
                code: code.to_string(),
            });
        }
        for (field, amount) in [("debit", debit), ("credit", credit)] {
            if amount.is_sign_negative() && !amount.is_zero() {
                warnings.push(ValidationWarning::NegativeAmount {
                    code: code.to_string(),
                    field,
                    amount,
                });
            }
        }

        accounts.push(TrialBalanceAccount {
            account_code: code.to_string(),
            account_name: raw.account_name.clone().unwrap_or_default(),
            account_type: raw.account_type.clone().unwrap_or_default(),
            debit,
            credit,
        });
    }

    let totals = TrialBalanceTotals::from_accounts(&accounts);

    Ok(ValidatedTrialBalance {
        accounts,
        totals,
        end_date: None,
        warnings,
    })
}

/// Validates a full endpoint payload, cross-checking the reported totals.
///
/// # Errors
///
/// See [`validate_trial_balance`].
pub fn validate_payload(payload: &TrialBalancePayload) -> Result<ValidatedTrialBalance, ReportError> {
    let mut validated = validate_trial_balance(&payload.trial_balance)?;
    validated.end_date = payload.end_date;

    if let (Some(total_debit), Some(total_credit)) = (
        parse_amount(&payload.total_debit),
        parse_amount(&payload.total_credit),
    ) {
        let reported = TrialBalanceTotals {
            total_debit,
            total_credit,
            is_balanced: payload.is_balanced.unwrap_or(total_debit == total_credit),
        };
        let computed = validated.totals;
        if reported.total_debit != computed.total_debit
            || reported.total_credit != computed.total_credit
        {
            validated
                .warnings
                .push(ValidationWarning::TotalsMismatch { reported, computed });
        }
    }

    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{BalanceSheetSection, ReportService, classify};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn raw(value: Value) -> Vec<RawTrialBalanceAccount> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_accepts_numbers_and_numeric_strings() {
        let rows = raw(json!([
            {"account_code": "1-1001", "account_name": "Cash", "account_type": "Cash", "debit": 1000000, "credit": "250.50"},
            {"account_code": "2-1001", "account_name": "Savings", "account_type": "Member Savings", "debit": "0", "credit": 12.25}
        ]));

        let validated = validate_trial_balance(&rows).unwrap();

        assert_eq!(validated.accounts.len(), 2);
        assert_eq!(validated.accounts[0].debit, dec!(1000000));
        assert_eq!(validated.accounts[0].credit, dec!(250.50));
        assert_eq!(validated.accounts[1].credit, dec!(12.25));
        assert_eq!(validated.totals.total_debit, dec!(1000000));
        assert_eq!(validated.totals.total_credit, dec!(262.75));
        assert!(validated.warnings.is_empty());
    }

    #[test]
    fn test_rejects_non_numeric_amount() {
        let rows = raw(json!([
            {"account_code": "1-1001", "debit": "abc", "credit": 0}
        ]));

        let err = validate_trial_balance(&rows).unwrap_err();
        assert_eq!(
            err,
            ReportError::NonNumericAmount {
                row: 0,
                code: "1-1001".into(),
                field: "debit",
                value: "\"abc\"".into(),
            }
        );
    }

    #[test]
    fn test_rejects_boolean_amount() {
        let rows = raw(json!([
            {"account_code": "1-1001", "debit": 0, "credit": true}
        ]));

        assert!(matches!(
            validate_trial_balance(&rows),
            Err(ReportError::NonNumericAmount { field: "credit", .. })
        ));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let rows = raw(json!([{"account_code": "1-1001", "debit": 10}]));
        assert_eq!(
            validate_trial_balance(&rows).unwrap_err(),
            ReportError::MissingField {
                row: 0,
                field: "credit"
            }
        );

        let rows = raw(json!([{"account_code": "  ", "debit": 10, "credit": 0}]));
        assert_eq!(
            validate_trial_balance(&rows).unwrap_err(),
            ReportError::MissingField {
                row: 0,
                field: "account_code"
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_codes() {
        let rows = raw(json!([
            {"account_code": "1-1001", "debit": 1, "credit": 0},
            {"account_code": "1-1001", "debit": 2, "credit": 0}
        ]));

        assert_eq!(
            validate_trial_balance(&rows).unwrap_err(),
            ReportError::DuplicateAccountCode("1-1001".into())
        );
    }

    #[test]
    fn test_warns_on_unknown_prefix_and_negative_amounts() {
        let rows = raw(json!([
            {"account_code": "9-1001", "debit": 1, "credit": 0},
            {"account_code": "1-1002", "debit": -5, "credit": 0}
        ]));

        let validated = validate_trial_balance(&rows).unwrap();

        assert_eq!(
            validated.warnings,
            vec![
                ValidationWarning::UnknownClassPrefix {
                    code: "9-1001".into()
                },
                ValidationWarning::NegativeAmount {
                    code: "1-1002".into(),
                    field: "debit",
                    amount: dec!(-5),
                },
            ]
        );
    }

    #[test]
    fn test_max_amount() {
        assert_eq!(MAX_AMOUNT, dec!(1000000000000000000));
    }

    #[test]
    fn test_rejects_amounts_beyond_limit() {
        let rows = raw(json!([
            {"account_code": "1-1001", "debit": "79228162514264337593543950335", "credit": 0}
        ]));
        assert!(matches!(
            validate_trial_balance(&rows),
            Err(ReportError::AmountOutOfRange { row: 0, field: "debit", .. })
        ));

        let rows = raw(json!([
            {"account_code": "2-1001", "debit": 0, "credit": "-1e19"}
        ]));
        assert!(matches!(
            validate_trial_balance(&rows),
            Err(ReportError::AmountOutOfRange { field: "credit", .. })
        ));
    }

    #[test]
    fn test_limit_amounts_sum_without_overflow() {
        let rows = raw(json!([
            {"account_code": "1-1001", "debit": "1000000000000000000", "credit": 0},
            {"account_code": "1-1002", "debit": "1000000000000000000", "credit": "-1000000000000000000"},
            {"account_code": "4-1000", "debit": "-1000000000000000000", "credit": "1000000000000000000"}
        ]));

        let validated = validate_trial_balance(&rows).unwrap();
        let sheet = ReportService::build_balance_sheet(&validated.accounts, &validated.accounts);

        assert_eq!(validated.totals.total_debit, dec!(1000000000000000000));
        assert_eq!(sheet.assets.current_assets[1].current, dec!(2000000000000000000));
        assert_eq!(
            ReportService::net_income(&validated.accounts),
            dec!(2000000000000000000)
        );
    }

    #[test]
    fn test_padded_code_is_trimmed_with_warning() {
        let rows = raw(json!([
            {"account_code": " 1-1001\t", "account_type": "Cash", "debit": 10, "credit": 0}
        ]));

        let validated = validate_trial_balance(&rows).unwrap();

        assert_eq!(validated.accounts[0].account_code, "1-1001");
        assert_eq!(
            validated.warnings,
            vec![ValidationWarning::CodeNormalized {
                raw: " 1-1001\t".into(),
                code: "1-1001".into(),
            }]
        );
        assert_eq!(
            classify(&validated.accounts[0]),
            Some(BalanceSheetSection::CurrentAssets)
        );
    }

    #[test]
    fn test_payload_totals_mismatch() {
        let payload: TrialBalancePayload = serde_json::from_value(json!({
            "trial_balance": [
                {"account_code": "1-1001", "debit": 100, "credit": 0},
                {"account_code": "3-1001", "debit": 0, "credit": 100}
            ],
            "total_debit": 100,
            "total_credit": "90",
            "is_balanced": false,
            "end_date": "2024-12-31"
        }))
        .unwrap();

        let validated = validate_payload(&payload).unwrap();

        assert_eq!(validated.end_date, NaiveDate::from_ymd_opt(2024, 12, 31));
        assert!(validated.totals.is_balanced);
        assert_eq!(validated.warnings.len(), 1);
        assert!(matches!(
            validated.warnings[0],
            ValidationWarning::TotalsMismatch { .. }
        ));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(&json!(42)), Some(dec!(42)));
        assert_eq!(parse_amount(&json!(" 1.5 ")), Some(dec!(1.5)));
        assert_eq!(parse_amount(&json!("1e3")), Some(dec!(1000)));
        assert_eq!(parse_amount(&json!(null)), None);
        assert_eq!(parse_amount(&json!("")), None);
        assert_eq!(parse_amount(&json!([1])), None);
    }
}
