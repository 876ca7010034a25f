//! # Currency Chameleon Telegram Bot
//!
//! A Telegram bot that answers currency-exchange queries by proxying a
//! remote pricing provider and replying through inline keyboards.

pub mod bot;
pub mod config;
pub mod conversion;
pub mod dialogue;
pub mod formatting;
pub mod rate_errors;
pub mod rates;
