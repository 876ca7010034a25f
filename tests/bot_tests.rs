use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardButtonKind};

use currency_chameleon::bot::build_rate_reply;
use currency_chameleon::bot::message_handler::{command_reply, small_talk_reply};
use currency_chameleon::bot::ui_builder::{
    cancel_keyboard, currency_keyboard, start_keyboard, ABOUT_TEXT, CHOOSE_CURRENCY_TEXT,
    FALLBACK_TEXT, HELP_TEXT, UNKNOWN_COMMAND_TEXT, WELCOME_TEXT,
};
use currency_chameleon::rate_errors::RateError;
use currency_chameleon::rates::{RateProvider, RateQuote};

/// Provider backed by a fixed in-memory table, no network involved
struct FakeProvider {
    table: HashMap<&'static str, (f64, &'static str)>,
}

impl FakeProvider {
    fn new(entries: &[(&'static str, f64, &'static str)]) -> Self {
        let table = entries
            .iter()
            .map(|(code, rate, name)| (*code, (*rate, *name)))
            .collect();
        Self { table }
    }
}

#[async_trait]
impl RateProvider for FakeProvider {
    async fn fetch(&self, code: &str) -> Result<RateQuote, RateError> {
        let (units_per_base, display_name) = self
            .table
            .get(code)
            .ok_or_else(|| RateError::NotFound(code.to_string()))?;

        Ok(RateQuote {
            code: code.to_string(),
            units_per_base: *units_per_base,
            display_name: display_name.to_string(),
            as_of: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        })
    }

    fn base_code(&self) -> &str {
        "RUB"
    }

    fn source_name(&self) -> &str {
        "Fake Source"
    }
}

fn callback_tag(button: &InlineKeyboardButton) -> &str {
    match &button.kind {
        InlineKeyboardButtonKind::CallbackData(data) => data,
        other => panic!("Unexpected button kind: {other:?}"),
    }
}

#[test]
fn test_currency_keyboard_layout() {
    let keyboard = currency_keyboard();
    let rows = &keyboard.inline_keyboard;

    // Four rows of fixed currencies plus the navigation footer
    assert_eq!(rows.len(), 5);
    for row in &rows[..4] {
        assert_eq!(row.len(), 3);
    }

    assert_eq!(callback_tag(&rows[0][0]), "currency_usd");
    assert_eq!(callback_tag(&rows[0][1]), "currency_eur");
    assert_eq!(callback_tag(&rows[3][2]), "currency_inr");

    let footer = &rows[4];
    assert_eq!(callback_tag(&footer[0]), "currencies_more");
    assert_eq!(callback_tag(&footer[1]), "main_menu");
}

#[test]
fn test_currency_keyboard_tags_carry_codes() {
    let keyboard = currency_keyboard();

    for row in &keyboard.inline_keyboard[..4] {
        for button in row {
            let tag = callback_tag(button);
            let code = tag.strip_prefix("currency_").unwrap();
            assert_eq!(code.len(), 3);
            assert!(code.chars().all(|c| c.is_ascii_lowercase()));
            // The label ends with the same code, uppercased
            assert!(button.text.ends_with(&code.to_uppercase()));
        }
    }
}

#[test]
fn test_cancel_and_start_keyboards() {
    let cancel = cancel_keyboard();
    assert_eq!(cancel.inline_keyboard.len(), 1);
    assert_eq!(callback_tag(&cancel.inline_keyboard[0][0]), "cancel_input");

    let start = start_keyboard();
    assert_eq!(
        callback_tag(&start.inline_keyboard[0][0]),
        "show_currencies"
    );
}

#[test]
fn test_command_replies() {
    assert_eq!(command_reply("/start"), WELCOME_TEXT);
    assert_eq!(command_reply("/help"), HELP_TEXT);
    assert_eq!(command_reply("/about"), ABOUT_TEXT);
    assert_eq!(command_reply("/rate"), CHOOSE_CURRENCY_TEXT);
    assert_eq!(command_reply("/unknown"), UNKNOWN_COMMAND_TEXT);

    // Case and trailing arguments are ignored
    assert_eq!(command_reply("/START"), WELCOME_TEXT);
    assert_eq!(command_reply("/rate usd"), CHOOSE_CURRENCY_TEXT);
}

#[test]
fn test_small_talk_replies() {
    assert_eq!(small_talk_reply("Hello there"), "Hello!");
    assert_eq!(small_talk_reply("hey, bot"), "Hello!");
    assert_eq!(
        small_talk_reply("how are you doing?"),
        "I'm doing great! How about you?"
    );
    assert_eq!(
        small_talk_reply("ok thanks a lot"),
        "You're welcome! Come back any time."
    );

    // Keywords only match whole words
    assert_eq!(small_talk_reply("this is nothing"), FALLBACK_TEXT);
    assert_eq!(small_talk_reply("what is the rate of BTC"), FALLBACK_TEXT);
}

#[tokio::test]
async fn test_build_rate_reply_renders_cross_rates() {
    let provider = FakeProvider::new(&[
        ("GBP", 100.0, "Pound Sterling"),
        ("USD", 80.0, "US Dollar"),
        ("EUR", 90.0, "Euro"),
    ]);

    let reply = build_rate_reply(&provider, "GBP").await;

    assert!(reply.contains("*GBP - Pound Sterling*"));
    assert!(reply.contains("*1 GBP* = *100.00 RUB*"));
    assert!(reply.contains("*1.2500 USD*"));
    assert!(reply.contains("*1.1111 EUR*"));
    assert!(reply.contains("🏛 *Source:* Fake Source"));
}

#[tokio::test]
async fn test_build_rate_reply_unknown_code() {
    let provider = FakeProvider::new(&[("USD", 80.0, "US Dollar")]);

    let reply = build_rate_reply(&provider, "ZZZ").await;

    assert!(reply.contains("Currency ZZZ was not found"));
}

#[tokio::test]
async fn test_build_rate_reply_degrades_missing_references_to_zero() {
    // Table has the target but neither reference currency
    let provider = FakeProvider::new(&[("GBP", 100.0, "Pound Sterling")]);

    let reply = build_rate_reply(&provider, "GBP").await;

    assert!(reply.contains("*0.0000 USD*"));
    assert!(reply.contains("*0.0000 EUR*"));
}
