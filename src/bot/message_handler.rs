//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, info, warn};

// Import the rate pipeline
use crate::conversion::cross_rates;
use crate::formatting::render_rate_message;
use crate::rates::{RateProvider, RateQuote};

// Import dialogue types
use crate::dialogue::{validate_currency_code, ChatState, CurrencyDialogue};

// Import UI builder functions
use super::ui_builder::{
    currency_keyboard, start_keyboard, ABOUT_TEXT, CHOOSE_CURRENCY_TEXT, FALLBACK_TEXT, HELP_TEXT,
    UNKNOWN_COMMAND_TEXT, WELCOME_TEXT,
};

lazy_static! {
    static ref GREETING_REGEX: Regex =
        Regex::new(r"(?i)\b(hello|hi|hey|good (morning|afternoon|evening))\b")
            .expect("Greeting pattern should be valid");
    static ref WELL_BEING_REGEX: Regex =
        Regex::new(r"(?i)\bhow('s| is| are) (you|it going|things)\b")
            .expect("Well-being pattern should be valid");
    static ref THANKS_REGEX: Regex =
        Regex::new(r"(?i)\b(thanks|thank you|thx)\b").expect("Thanks pattern should be valid");
}

/// Fetch the target currency plus the USD and EUR references and render
/// the full reply card
///
/// Every failure collapses to a user-facing string here; nothing
/// propagates past this boundary.
pub async fn build_rate_reply(provider: &dyn RateProvider, code: &str) -> String {
    let quote = match provider.fetch(code).await {
        Ok(quote) => quote,
        Err(e) => {
            warn!(code = %code, error = %e, "Rate lookup failed");
            return e.user_message();
        }
    };

    // Reference quotes are best-effort: a miss degrades the cross-rate
    // block to the 0.0000 sentinel instead of failing the whole reply
    let usd = fetch_reference(provider, "USD").await;
    let eur = fetch_reference(provider, "EUR").await;
    let cross = cross_rates(&quote, usd.as_ref(), eur.as_ref());

    render_rate_message(&quote, &cross, provider.base_code(), provider.source_name())
}

async fn fetch_reference(provider: &dyn RateProvider, code: &str) -> Option<RateQuote> {
    match provider.fetch(code).await {
        Ok(quote) => Some(quote),
        Err(e) => {
            warn!(code = %code, error = %e, "Reference quote unavailable");
            None
        }
    }
}

/// Static reply text for a slash command
///
/// Anything after the command word is ignored, so `/rate usd` behaves
/// like `/rate`.
pub fn command_reply(text: &str) -> &'static str {
    let command = text.split_whitespace().next().unwrap_or("").to_lowercase();

    match command.as_str() {
        "/start" => WELCOME_TEXT,
        "/help" => HELP_TEXT,
        "/about" => ABOUT_TEXT,
        "/rate" => CHOOSE_CURRENCY_TEXT,
        _ => UNKNOWN_COMMAND_TEXT,
    }
}

/// Canned reply for a handful of free-text patterns, with a fallback
/// pointing at /help
pub fn small_talk_reply(text: &str) -> &'static str {
    if GREETING_REGEX.is_match(text) {
        "Hello!"
    } else if WELL_BEING_REGEX.is_match(text) {
        "I'm doing great! How about you?"
    } else if THANKS_REGEX.is_match(text) {
        "You're welcome! Come back any time."
    } else {
        FALLBACK_TEXT
    }
}

async fn handle_command(bot: &Bot, chat_id: ChatId, text: &str) -> Result<()> {
    let reply = command_reply(text);
    let command = text.split_whitespace().next().unwrap_or("").to_lowercase();

    match command.as_str() {
        "/start" => {
            bot.send_message(chat_id, reply)
                .reply_markup(start_keyboard())
                .await?;
        }
        "/rate" => {
            bot.send_message(chat_id, reply)
                .reply_markup(currency_keyboard())
                .await?;
        }
        _ => {
            bot.send_message(chat_id, reply).await?;
        }
    }

    Ok(())
}

/// Handle the text a chat submits while in `AwaitingCurrencyCode`
///
/// The input state is left before any network round-trip; retrying
/// after a rejected code requires going through the menu again.
async fn handle_currency_code_input(
    bot: &Bot,
    chat_id: ChatId,
    input: &str,
    provider: &dyn RateProvider,
    dialogue: &CurrencyDialogue,
) -> Result<()> {
    dialogue.exit().await?;

    match validate_currency_code(input) {
        Ok(code) => {
            info!(chat_id = %chat_id, code = %code, "Looking up submitted currency code");
            let reply = build_rate_reply(provider, &code).await;
            bot.send_message(chat_id, reply)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(currency_keyboard())
                .await?;
        }
        Err(e) => {
            debug!(chat_id = %chat_id, input = %input, "Rejected currency code input");
            bot.send_message(chat_id, e.user_message())
                .parse_mode(ParseMode::Markdown)
                .reply_markup(currency_keyboard())
                .await?;
        }
    }

    Ok(())
}

/// Route an incoming message based on the chat's dialogue state and the
/// message text
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    provider: Arc<dyn RateProvider>,
    dialogue: CurrencyDialogue,
) -> Result<()> {
    let chat_id = msg.chat.id;

    let Some(text) = msg.text() else {
        debug!(chat_id = %chat_id, "Received non-text message");
        bot.send_message(chat_id, FALLBACK_TEXT).await?;
        return Ok(());
    };

    debug!(chat_id = %chat_id, message_length = text.len(), "Received text message");

    let state = dialogue.get().await?.unwrap_or_default();
    if state == ChatState::AwaitingCurrencyCode {
        return handle_currency_code_input(&bot, chat_id, text, provider.as_ref(), &dialogue)
            .await;
    }

    if text.starts_with('/') {
        handle_command(&bot, chat_id, text).await?;
    } else {
        bot.send_message(chat_id, small_talk_reply(text)).await?;
    }

    Ok(())
}
