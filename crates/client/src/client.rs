//! Trial balance client.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use tracing::{debug, info, warn};

use coopbooks_core::reports::{
    ReportPeriod, TrialBalancePayload, ValidatedTrialBalance, validate_payload,
};
use coopbooks_shared::config::ApiConfig;

use crate::envelope::{ApiResponse, error_message};
use crate::error::ClientError;

const TRIAL_BALANCE_PATH: &str = "journals/trial-balance";

/// Both snapshots of a comparative report.
#[derive(Debug, Clone)]
pub struct PeriodSnapshots {
    /// Dates the snapshots were taken for.
    pub period: ReportPeriod,
    /// Current period snapshot.
    pub current: ValidatedTrialBalance,
    /// Previous period snapshot.
    pub previous: ValidatedTrialBalance,
}

/// Client for the accounting service's trial balance endpoint.
#[derive(Debug, Clone)]
pub struct TrialBalanceClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl TrialBalanceClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is missing or invalid, or the HTTP
    /// client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base = config
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .ok_or(ClientError::MissingBaseUrl)?;

        // A trailing slash keeps the last path segment when joining.
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url =
            Url::parse(&base).map_err(|e| ClientError::InvalidBaseUrl(format!("{base}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// URL of the trial balance for `end_date`.
    #[must_use]
    pub fn trial_balance_url(&self, end_date: NaiveDate) -> Url {
        let mut url = self
            .base_url
            .join(TRIAL_BALANCE_PATH)
            .unwrap_or_else(|_| self.base_url.clone());
        url.query_pairs_mut()
            .append_pair("end_date", &end_date.format("%Y-%m-%d").to_string());
        url
    }

    /// Fetches the raw trial balance payload for `end_date`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, a
    /// rejected envelope, or an undecodable body.
    pub async fn fetch_payload(&self, end_date: NaiveDate) -> Result<TrialBalancePayload, ClientError> {
        let url = self.trial_balance_url(end_date);
        debug!(%url, "Requesting trial balance");

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!(%end_date, status = status.as_u16(), "Trial balance request failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let envelope: ApiResponse<TrialBalancePayload> = serde_json::from_str(&body)?;
        envelope.into_data()
    }

    /// Fetches and validates the trial balance for `end_date`.
    ///
    /// Validation warnings are logged and kept on the result.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_payload`]; also fails when the rows do not validate.
    pub async fn fetch_trial_balance(
        &self,
        end_date: NaiveDate,
    ) -> Result<ValidatedTrialBalance, ClientError> {
        let payload = self.fetch_payload(end_date).await?;
        let mut validated = validate_payload(&payload)?;
        validated.end_date.get_or_insert(end_date);

        for warning in &validated.warnings {
            warn!(%end_date, %warning, "Trial balance validation warning");
        }
        info!(
            %end_date,
            rows = validated.accounts.len(),
            is_balanced = validated.totals.is_balanced,
            "Fetched trial balance"
        );

        Ok(validated)
    }

    /// Fetches both snapshots of `period` concurrently.
    ///
    /// # Errors
    ///
    /// Fails if either snapshot fails.
    pub async fn fetch_period(&self, period: ReportPeriod) -> Result<PeriodSnapshots, ClientError> {
        let (current, previous) = tokio::try_join!(
            self.fetch_trial_balance(period.end_date),
            self.fetch_trial_balance(period.previous_end_date),
        )?;

        Ok(PeriodSnapshots {
            period,
            current,
            previous,
        })
    }
}
