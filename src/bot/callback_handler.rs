//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId, ParseMode};
use teloxide::{ApiError, RequestError};
use tracing::{debug, warn};

// Import dialogue types
use crate::dialogue::{ChatState, CurrencyDialogue};
use crate::rates::RateProvider;

// Import the shared rate pipeline
use super::message_handler::build_rate_reply;

// Import UI builder functions
use super::ui_builder::{
    cancel_keyboard, currency_keyboard, start_keyboard, CHOOSE_CURRENCY_TEXT, ENTER_CODE_TEXT,
    WELCOME_TEXT,
};

/// Handle callback queries from inline keyboards
///
/// Every branch answers the callback exactly once so the client-side
/// spinner always clears.
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    provider: Arc<dyn RateProvider>,
    dialogue: CurrencyDialogue,
) -> Result<()> {
    let data = q.data.clone().unwrap_or_default();

    let Some(message) = q.message.as_ref() else {
        // The originating message is no longer accessible; there is
        // nothing to edit, so just release the spinner
        debug!(user_id = %q.from.id, data = %data, "Callback without an accessible message");
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };
    let chat_id = message.chat().id;
    let message_id = message.id();

    debug!(chat_id = %chat_id, data = %data, "Received callback query");

    if let Some(code) = data.strip_prefix("currency_") {
        let code = code.to_uppercase();

        // Show a loading toast while the provider round-trips
        bot.answer_callback_query(q.id)
            .text("Fetching the rate…")
            .await?;

        let reply = build_rate_reply(provider.as_ref(), &code).await;
        edit_in_place(&bot, chat_id, message_id, &reply, currency_keyboard()).await?;
        return Ok(());
    }

    match data.as_str() {
        "currencies_more" => {
            dialogue.update(ChatState::AwaitingCurrencyCode).await?;
            edit_in_place(&bot, chat_id, message_id, ENTER_CODE_TEXT, cancel_keyboard()).await?;
            bot.answer_callback_query(q.id).await?;
        }
        "cancel_input" => {
            dialogue.exit().await?;
            edit_in_place(
                &bot,
                chat_id,
                message_id,
                CHOOSE_CURRENCY_TEXT,
                currency_keyboard(),
            )
            .await?;
            bot.answer_callback_query(q.id).text("Input cancelled").await?;
        }
        "show_currencies" => {
            edit_in_place(
                &bot,
                chat_id,
                message_id,
                CHOOSE_CURRENCY_TEXT,
                currency_keyboard(),
            )
            .await?;
            bot.answer_callback_query(q.id).await?;
        }
        "main_menu" => {
            edit_in_place(&bot, chat_id, message_id, WELCOME_TEXT, start_keyboard()).await?;
            bot.answer_callback_query(q.id).await?;
        }
        _ => {
            warn!(chat_id = %chat_id, data = %data, "Ignoring unknown callback tag");
            bot.answer_callback_query(q.id).await?;
        }
    }

    Ok(())
}

/// Edit a previously sent message in place, Markdown-rendered with a
/// fresh keyboard
///
/// Telegram rejects edits that change nothing; that outcome is expected
/// when a reply repeats and is swallowed as a no-op.
async fn edit_in_place(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: &str,
    keyboard: InlineKeyboardMarkup,
) -> Result<()> {
    match bot
        .edit_message_text(chat_id, message_id, text)
        .parse_mode(ParseMode::Markdown)
        .reply_markup(keyboard)
        .await
    {
        Ok(_) => Ok(()),
        Err(RequestError::Api(ApiError::MessageNotModified)) => {
            debug!(chat_id = %chat_id, "Edit skipped, message unchanged");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
