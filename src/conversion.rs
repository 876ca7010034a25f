//! # Rate Conversion Module
//!
//! Derives cross-rates between two currencies quoted against a shared
//! base, without any direct target-to-target provider call.

use crate::rates::RateQuote;

/// Derived rates of one target currency against USD and EUR
///
/// Zero means the reference quote was unavailable, not that the
/// currency is worthless; the formatter renders it as `0.0000`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CrossRates {
    pub to_usd: f64,
    pub to_eur: f64,
}

/// Derive USD and EUR cross-rates for a target quote
///
/// Both currencies are quoted against the same base unit, so the
/// cross-rate is a plain ratio of the two quotes. A missing or zero
/// reference collapses to the 0.0 sentinel; this never fails.
pub fn cross_rates(
    target: &RateQuote,
    usd: Option<&RateQuote>,
    eur: Option<&RateQuote>,
) -> CrossRates {
    CrossRates {
        to_usd: ratio(target, usd),
        to_eur: ratio(target, eur),
    }
}

fn ratio(target: &RateQuote, reference: Option<&RateQuote>) -> f64 {
    match reference {
        Some(reference) if reference.units_per_base > 0.0 => {
            target.units_per_base / reference.units_per_base
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn quote(code: &str, units_per_base: f64) -> RateQuote {
        RateQuote {
            code: code.to_string(),
            units_per_base,
            display_name: code.to_string(),
            as_of: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        }
    }

    #[test]
    fn test_cross_rates_against_both_references() {
        let eur = quote("EUR", 90.0);
        let usd = quote("USD", 100.0);

        let cross = cross_rates(&eur, Some(&usd), Some(&eur));
        assert_eq!(cross.to_usd, 0.9);
        assert_eq!(cross.to_eur, 1.0);
    }

    #[test]
    fn test_missing_reference_yields_zero() {
        let gbp = quote("GBP", 101.5);

        let cross = cross_rates(&gbp, None, None);
        assert_eq!(cross.to_usd, 0.0);
        assert_eq!(cross.to_eur, 0.0);
    }

    #[test]
    fn test_zero_reference_yields_zero() {
        let gbp = quote("GBP", 101.5);
        let broken = quote("USD", 0.0);

        let cross = cross_rates(&gbp, Some(&broken), None);
        assert_eq!(cross.to_usd, 0.0);
    }

    #[test]
    fn test_mixed_references() {
        let chf = quote("CHF", 110.0);
        let usd = quote("USD", 100.0);

        let cross = cross_rates(&chf, Some(&usd), None);
        assert!((cross.to_usd - 1.1).abs() < 1e-9);
        assert_eq!(cross.to_eur, 0.0);
    }
}
