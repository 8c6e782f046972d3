//! Report options shared by configuration and the report engine.

use serde::{Deserialize, Serialize};

/// How the previous period's net income is derived.
///
/// The accounting service's own balance sheet always reports the previous
/// period's net income as zero. `Computed` derives it from the previous
/// snapshot instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviousNetIncome {
    /// Previous period net income is always reported as zero.
    #[default]
    Zeroed,
    /// Previous period net income is computed from the previous snapshot.
    Computed,
}

impl std::fmt::Display for PreviousNetIncome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zeroed => write!(f, "zeroed"),
            Self::Computed => write!(f, "computed"),
        }
    }
}

impl std::str::FromStr for PreviousNetIncome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zeroed" => Ok(Self::Zeroed),
            "computed" => Ok(Self::Computed),
            _ => Err(format!("Unknown previous net income mode: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_zeroed() {
        assert_eq!(PreviousNetIncome::default(), PreviousNetIncome::Zeroed);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            PreviousNetIncome::from_str("Computed").unwrap(),
            PreviousNetIncome::Computed
        );
        assert_eq!(
            PreviousNetIncome::from_str("zeroed").unwrap(),
            PreviousNetIncome::Zeroed
        );
        assert!(PreviousNetIncome::from_str("symmetric").is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&PreviousNetIncome::Computed).unwrap(),
            "\"computed\""
        );
        let mode: PreviousNetIncome = serde_json::from_str("\"zeroed\"").unwrap();
        assert_eq!(mode, PreviousNetIncome::Zeroed);
    }
}
