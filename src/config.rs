//! # Configuration Module
//!
//! Process configuration loaded from the environment at startup.
//! Secrets never appear in logs; missing mandatory values abort startup
//! with a readable error instead of failing mid-conversation.

use anyhow::{bail, Context, Result};
use std::env;
use std::sync::Arc;

use crate::rates::{CbrDailyProvider, OpenRatesProvider, RateProvider};

/// Which pricing provider backs rate lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatesBackend {
    /// Central Bank of Russia daily table, no key required
    CbrDaily,
    /// Open Exchange Rates latest table, needs an app id
    OpenRates { app_id: String },
}

/// Startup configuration for the bot process
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram_token: String,
    pub backend: RatesBackend,
}

impl BotConfig {
    /// Read configuration from the environment
    ///
    /// A missing bot token, an unknown provider name, or a missing app
    /// id for the keyed provider is a fatal startup error.
    pub fn from_env() -> Result<Self> {
        let telegram_token =
            env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;

        let backend = match env::var("RATES_PROVIDER").as_deref() {
            Err(_) | Ok("cbr") => RatesBackend::CbrDaily,
            Ok("openrates") => RatesBackend::OpenRates {
                app_id: env::var("OPEN_RATES_APP_ID")
                    .context("OPEN_RATES_APP_ID must be set when RATES_PROVIDER=openrates")?,
            },
            Ok(other) => bail!("Unknown RATES_PROVIDER value: {other}"),
        };

        Ok(Self {
            telegram_token,
            backend,
        })
    }

    /// Construct the provider selected by this configuration
    pub fn build_provider(&self) -> Arc<dyn RateProvider> {
        match &self.backend {
            RatesBackend::CbrDaily => {
                Arc::new(CbrDailyProvider::new(CbrDailyProvider::DEFAULT_URL))
            }
            RatesBackend::OpenRates { app_id } => Arc::new(OpenRatesProvider::new(
                OpenRatesProvider::DEFAULT_URL,
                app_id,
            )),
        }
    }
}
