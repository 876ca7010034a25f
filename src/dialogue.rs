//! Currency input dialogue module for handling conversation state with users.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::rate_errors::RateError;

lazy_static! {
    static ref CURRENCY_CODE_REGEX: Regex =
        Regex::new(r"^[A-Za-z]{3}$").expect("Currency code pattern should be valid");
}

/// Represents the conversation state for one chat
///
/// Chats with no stored entry are `Idle`; the entry only exists while
/// the bot is waiting for a free-text currency code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatState {
    #[default]
    Idle,
    /// The chat picked "More currencies" and the next text message is
    /// treated as a candidate currency code
    AwaitingCurrencyCode,
}

/// Type alias for our per-chat dialogue
pub type CurrencyDialogue = Dialogue<ChatState, InMemStorage<ChatState>>;

/// Validates a submitted currency code
///
/// Accepts exactly three ASCII letters after trimming and normalizes to
/// uppercase, so `" usd "` becomes `"USD"`.
pub fn validate_currency_code(input: &str) -> Result<String, RateError> {
    let trimmed = input.trim();

    if CURRENCY_CODE_REGEX.is_match(trimmed) {
        Ok(trimmed.to_uppercase())
    } else {
        Err(RateError::InvalidInput(trimmed.to_string()))
    }
}
