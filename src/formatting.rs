//! # Response Formatting Module
//!
//! Renders a fetched quote and its cross-rates into the Markdown reply
//! card. Everything here is a pure function of its inputs: no I/O, no
//! clock reads, byte-identical output for identical arguments.

use crate::conversion::CrossRates;
use crate::rates::RateQuote;

/// Decorative symbol for a currency code
///
/// Total over any code; unmapped codes fall back to the generic symbol.
pub fn currency_symbol(code: &str) -> &'static str {
    match code {
        "USD" => "💵",
        "EUR" => "💶",
        "GBP" => "💷",
        "JPY" => "💴",
        "CHF" => "🇨🇭",
        "CAD" => "🇨🇦",
        "AUD" => "🇦🇺",
        "CNY" => "🇨🇳",
        "RUB" => "🇷🇺",
        "TRY" => "🇹🇷",
        "INR" => "🇮🇳",
        "BRL" => "🇧🇷",
        "KRW" => "🇰🇷",
        "SGD" => "🇸🇬",
        "NZD" => "🇳🇿",
        "SEK" => "🇸🇪",
        "NOK" => "🇳🇴",
        "DKK" => "🇩🇰",
        "ZAR" => "🇿🇦",
        "HKD" => "🇭🇰",
        "PLN" => "🇵🇱",
        "THB" => "🇹🇭",
        "UAH" => "🇺🇦",
        "KZT" => "🇰🇿",
        "BYN" => "🇧🇾",
        "AMD" => "🇦🇲",
        "AZN" => "🇦🇿",
        "GEL" => "🇬🇪",
        _ => "💱",
    }
}

/// Render the full reply card for one quote
///
/// Layout: header with symbol and name, the direct rate both ways,
/// the USD/EUR cross-rate block, then the update date and source
/// attribution. An unavailable cross-rate renders as `0.0000`.
pub fn render_rate_message(
    quote: &RateQuote,
    cross: &CrossRates,
    base_code: &str,
    source_name: &str,
) -> String {
    let symbol = currency_symbol(&quote.code);
    let direct = quote.units_per_base;

    format!(
        "{symbol} *{code} - {name}*\n\
         \n\
         💰 *Official exchange rate:*\n\
         • *1 {code}* = *{direct:.2} {base}*\n\
         • *1 {base}* = *{inverse:.4} {code}*\n\
         \n\
         💱 *Conversion to other currencies:*\n\
         🇺🇸 *1 {code}* = *{to_usd:.4} USD* 💵\n\
         🇪🇺 *1 {code}* = *{to_eur:.4} EUR* 💶\n\
         \n\
         ⏰ *Updated:* {date}\n\
         🏛 *Source:* {source}",
        code = quote.code,
        name = quote.display_name,
        base = base_code,
        inverse = 1.0 / direct,
        to_usd = cross.to_usd,
        to_eur = cross.to_eur,
        date = quote.as_of.format("%d.%m.%Y"),
        source = source_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup_is_total() {
        assert_eq!(currency_symbol("USD"), "💵");
        assert_eq!(currency_symbol("GEL"), "🇬🇪");
        // Unmapped and garbage codes get the generic symbol
        assert_eq!(currency_symbol("XDR"), "💱");
        assert_eq!(currency_symbol(""), "💱");
    }
}
