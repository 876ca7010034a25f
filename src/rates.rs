//! # Rate Source Module
//!
//! This module fetches currency tables from remote pricing providers and
//! normalizes a single entry into a [`RateQuote`].
//!
//! Two provider wire shapes are supported:
//!
//! - The Central Bank of Russia daily table (`Date` / `Valute` shape,
//!   quoted in RUB per `Nominal` units, no API key)
//! - The Open Exchange Rates latest table (`timestamp` / `rates` shape,
//!   quoted as units per USD, keyed by an app id)
//!
//! Every fetch performs one network round-trip and reads the full table;
//! quotes are never cached.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error};

use crate::rate_errors::RateError;

/// A single currency quote, normalized to units of the provider's base
/// currency per one unit of the quoted currency
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    /// Three-letter uppercase currency code
    pub code: String,
    /// Base-currency units bought by one unit of `code`, always positive
    pub units_per_base: f64,
    /// Human-readable currency name from the provider table
    pub display_name: String,
    /// Calendar date the provider last updated the table
    pub as_of: NaiveDate,
}

/// A remote pricing provider the bot proxies rate lookups to
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the full table from the provider and extract one currency
    async fn fetch(&self, code: &str) -> Result<RateQuote, RateError>;

    /// Currency every quote is expressed against
    fn base_code(&self) -> &str;

    /// Human-readable source attribution for the reply footer
    fn source_name(&self) -> &str;
}

#[derive(Debug, Deserialize)]
struct CbrDailyResponse {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Valute")]
    valute: HashMap<String, CbrValute>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CbrValute {
    value: f64,
    #[serde(default = "default_nominal")]
    nominal: f64,
    name: String,
}

// Providers may quote per N units; absent nominal means per 1
fn default_nominal() -> f64 {
    1.0
}

/// Central Bank of Russia daily table provider
pub struct CbrDailyProvider {
    base_url: String,
    client: reqwest::Client,
}

impl CbrDailyProvider {
    pub const DEFAULT_URL: &'static str = "https://www.cbr-xml-daily.ru";

    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RateProvider for CbrDailyProvider {
    async fn fetch(&self, code: &str) -> Result<RateQuote, RateError> {
        let url = format!("{}/daily_json.js", self.base_url);
        debug!(url = %url, code = %code, "Fetching daily rate table");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| RateError::SourceUnavailable(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| RateError::SourceUnavailable(e.to_string()))?;

        let table: CbrDailyResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse daily rate table");
            RateError::MalformedData(e.to_string())
        })?;

        let as_of = DateTime::parse_from_rfc3339(&table.date)
            .map(|d| d.date_naive())
            .map_err(|e| RateError::MalformedData(format!("bad update date: {e}")))?;

        let entry = table
            .valute
            .get(code)
            .ok_or_else(|| RateError::NotFound(code.to_string()))?;

        if entry.value <= 0.0 || entry.nominal <= 0.0 {
            return Err(RateError::MalformedData(format!(
                "nonpositive quote for {code}: {} / {}",
                entry.value, entry.nominal
            )));
        }

        Ok(RateQuote {
            code: code.to_string(),
            units_per_base: entry.value / entry.nominal,
            display_name: entry.name.clone(),
            as_of,
        })
    }

    fn base_code(&self) -> &str {
        "RUB"
    }

    fn source_name(&self) -> &str {
        "Central Bank of Russia"
    }
}

#[derive(Debug, Deserialize)]
struct OpenRatesResponse {
    timestamp: i64,
    rates: HashMap<String, f64>,
}

/// Open Exchange Rates latest-table provider
///
/// The wire shape quotes `rates[CODE]` units of CODE per one USD, so the
/// value is inverted on the way into a [`RateQuote`]. The shape carries
/// no display names; the code doubles as the name.
pub struct OpenRatesProvider {
    base_url: String,
    app_id: String,
    client: reqwest::Client,
}

impl OpenRatesProvider {
    pub const DEFAULT_URL: &'static str = "https://openexchangerates.org";

    pub fn new(base_url: &str, app_id: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: app_id.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RateProvider for OpenRatesProvider {
    async fn fetch(&self, code: &str) -> Result<RateQuote, RateError> {
        let url = format!("{}/api/latest.json", self.base_url);
        debug!(url = %url, code = %code, "Fetching latest rate table");

        let response = self
            .client
            .get(&url)
            .query(&[("app_id", self.app_id.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| RateError::SourceUnavailable(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| RateError::SourceUnavailable(e.to_string()))?;

        let table: OpenRatesResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse latest rate table");
            RateError::MalformedData(e.to_string())
        })?;

        let as_of = DateTime::from_timestamp(table.timestamp, 0)
            .map(|d| d.date_naive())
            .ok_or_else(|| {
                RateError::MalformedData(format!("bad update timestamp: {}", table.timestamp))
            })?;

        let per_usd = *table
            .rates
            .get(code)
            .ok_or_else(|| RateError::NotFound(code.to_string()))?;

        if per_usd <= 0.0 {
            return Err(RateError::MalformedData(format!(
                "nonpositive quote for {code}: {per_usd}"
            )));
        }

        Ok(RateQuote {
            code: code.to_string(),
            units_per_base: 1.0 / per_usd,
            display_name: code.to_string(),
            as_of,
        })
    }

    fn base_code(&self) -> &str {
        "USD"
    }

    fn source_name(&self) -> &str {
        "Open Exchange Rates"
    }
}
