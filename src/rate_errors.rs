//! # Rate Error Types Module
//!
//! This module defines the error taxonomy for the exchange-rate pipeline.
//! Callers can distinguish user-recoverable failures (an unknown or badly
//! formatted currency code) from operator-facing ones (network or provider
//! trouble) without inspecting message strings.

/// Failure modes for rate lookup and currency-code input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// Requested currency code is absent from the provider table
    NotFound(String),
    /// Network or transport failure while reaching the provider
    SourceUnavailable(String),
    /// Provider response could not be parsed into the expected shape
    MalformedData(String),
    /// Submitted currency code fails the three-letter check
    InvalidInput(String),
}

impl std::fmt::Display for RateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateError::NotFound(code) => write!(f, "Currency not found: {code}"),
            RateError::SourceUnavailable(msg) => write!(f, "Rate source unavailable: {msg}"),
            RateError::MalformedData(msg) => write!(f, "Malformed provider data: {msg}"),
            RateError::InvalidInput(input) => write!(f, "Invalid currency code input: {input}"),
        }
    }
}

impl std::error::Error for RateError {}

impl RateError {
    /// Reply text shown to the chat user for this failure
    ///
    /// Transport and parse details stay in the logs; the user only sees
    /// a generic notice for those kinds.
    pub fn user_message(&self) -> String {
        match self {
            RateError::NotFound(code) => format!(
                "Currency {code} was not found. Make sure you are using \
                 a valid currency code (for example, USD)."
            ),
            RateError::SourceUnavailable(_) => {
                "Network error while fetching the exchange rate. Please try again later."
                    .to_string()
            }
            RateError::MalformedData(_) => {
                "The rate service sent back something unexpected. Please try again later."
                    .to_string()
            }
            RateError::InvalidInput(_) => "*Invalid currency code format*\n\n\
                 A currency code is 3 letters (for example: USD).\n\
                 Please try again."
                .to_string(),
        }
    }
}
