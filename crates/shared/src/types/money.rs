//! Currency codes and amount formatting.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` throughout.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported for report output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indonesian Rupiah
    #[default]
    Idr,
    /// US Dollar
    Usd,
    /// Singapore Dollar
    Sgd,
}

impl Currency {
    /// Number of minor-unit digits shown for this currency.
    #[must_use]
    pub const fn decimal_places(self) -> u32 {
        match self {
            Self::Idr => 0,
            Self::Usd | Self::Sgd => 2,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idr => write!(f, "IDR"),
            Self::Usd => write!(f, "USD"),
            Self::Sgd => write!(f, "SGD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IDR" => Ok(Self::Idr),
            "USD" => Ok(Self::Usd),
            "SGD" => Ok(Self::Sgd),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// Formats an amount for display with thousands separators.
///
/// Rounds half away from zero to the currency's decimal places; negative
/// amounts are shown in parentheses, as on printed statements.
#[must_use]
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let places = currency.decimal_places();
    let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.*}", places as usize, rounded.abs());

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("({grouped})")
    } else {
        grouped
    }
}
