//! Trial balance snapshots read from local JSON files.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use tracing::{info, warn};

use coopbooks_client::ApiResponse;
use coopbooks_core::reports::{
    RawTrialBalanceAccount, TrialBalancePayload, ValidatedTrialBalance, validate_payload,
};
use coopbooks_shared::AppError;

/// Parses a snapshot document.
///
/// Accepts the service's full envelope, its bare `data` object, or a plain
/// array of rows.
pub fn parse_snapshot(document: Value) -> Result<TrialBalancePayload, AppError> {
    let decode = |e: serde_json::Error| AppError::Validation(format!("Malformed snapshot: {e}"));
    let is_envelope = document.get("success").is_some();

    match document {
        Value::Array(_) => {
            let rows: Vec<RawTrialBalanceAccount> =
                serde_json::from_value(document).map_err(decode)?;
            Ok(TrialBalancePayload {
                trial_balance: rows,
                ..TrialBalancePayload::default()
            })
        }
        Value::Object(_) if is_envelope => {
            let envelope: ApiResponse<TrialBalancePayload> =
                serde_json::from_value(document).map_err(decode)?;
            envelope.into_data().map_err(AppError::from)
        }
        Value::Object(_) => serde_json::from_value(document).map_err(decode),
        _ => Err(AppError::Validation(
            "Snapshot must be a JSON object or array".to_string(),
        )),
    }
}

/// Loads and validates a snapshot file.
pub fn load_snapshot(path: &Path) -> anyhow::Result<ValidatedTrialBalance> {
    let text = std::fs::read_to_string(path)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document: Value = serde_json::from_str(&text)
        .map_err(|e| AppError::Validation(e.to_string()))
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let payload = parse_snapshot(document)?;
    let validated = validate_payload(&payload)
        .map_err(|e| AppError::Validation(e.to_string()))
        .with_context(|| format!("Invalid trial balance in {}", path.display()))?;

    for warning in &validated.warnings {
        warn!(file = %path.display(), %warning, "Trial balance validation warning");
    }
    info!(
        file = %path.display(),
        rows = validated.accounts.len(),
        "Loaded trial balance"
    );

    Ok(validated)
}
