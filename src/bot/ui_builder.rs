//! UI Builder module for creating keyboards and canned reply text

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub const WELCOME_TEXT: &str = "Welcome! Check the exchange rate of any currency at any time.";
pub const CHOOSE_CURRENCY_TEXT: &str = "Use the buttons below to pick a currency:";
pub const ENTER_CODE_TEXT: &str = "💎 *Send a currency code to the chat*";
pub const HELP_TEXT: &str = "Available commands:\n\
    /start - start the bot\n\
    /help - show this help\n\
    /about - about the bot\n\
    /rate - look up an exchange rate";
pub const ABOUT_TEXT: &str = "I'm built with Rust and the teloxide library. \
    My goal is to help people keep an eye on currency rates!";
pub const UNKNOWN_COMMAND_TEXT: &str =
    "Unknown command. Use /help for the list of available commands.";
pub const FALLBACK_TEXT: &str = "Sorry, I didn't quite get that. Try one of the commands: /help";

/// Create the inline keyboard with the fixed currency shortcuts plus
/// the free-input entry point and main-menu navigation
pub fn currency_keyboard() -> InlineKeyboardMarkup {
    let rows = vec![
        vec![
            currency_button("🇺🇸 USD", "usd"),
            currency_button("🇪🇺 EUR", "eur"),
            currency_button("🇬🇧 GBP", "gbp"),
        ],
        vec![
            currency_button("🇯🇵 JPY", "jpy"),
            currency_button("🇨🇭 CHF", "chf"),
            currency_button("🇨🇦 CAD", "cad"),
        ],
        vec![
            currency_button("🇦🇺 AUD", "aud"),
            currency_button("🇨🇳 CNY", "cny"),
            currency_button("🇨🇿 CZK", "czk"),
        ],
        vec![
            currency_button("🇹🇷 TRY", "try"),
            currency_button("🇧🇷 BRL", "brl"),
            currency_button("🇮🇳 INR", "inr"),
        ],
        vec![
            InlineKeyboardButton::callback("💎 More currencies", "currencies_more"),
            InlineKeyboardButton::callback("🏠 Main menu", "main_menu"),
        ],
    ];

    InlineKeyboardMarkup::new(rows)
}

fn currency_button(label: &str, code: &str) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(label, format!("currency_{code}"))
}

/// Create the single-button keyboard shown while a currency code is
/// awaited
pub fn cancel_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "Cancel",
        "cancel_input",
    )]])
}

/// Create the keyboard attached to the welcome message
pub fn start_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "💱 Find out a rate",
        "show_currencies",
    )]])
}
