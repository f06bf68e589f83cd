//! # Display Currency
//!
//! Conversion between the base currency (INR) and the two supported display
//! currencies, using fixed rates held in the cafe settings.
//!
//! ## Conversion Path
//! ```text
//!   amount in FROM ──► × rate(FROM) ──► INR ──► ÷ rate(TO) ──► amount in TO
//!
//!   rate(₹) = 1
//!   rate($) = settings.currency_rate_usd   (INR per 1 USD)
//!   rate(€) = settings.currency_rate_eur   (INR per 1 EUR)
//! ```
//!
//! All stored amounts are INR [`Money`]. Converted amounts are display
//! values only and come back as `f64`. A zero or non-finite rate degrades the
//! result to `0.0` instead of producing `inf`/`NaN`.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

/// Supported display currencies.
///
/// Serialized as the bare symbol, which is what the settings form stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Currency {
    #[default]
    #[serde(rename = "₹")]
    Inr,
    #[serde(rename = "$")]
    Usd,
    #[serde(rename = "€")]
    Eur,
}

impl Currency {
    /// Display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Whether this is the currency amounts are stored in.
    pub fn is_base(&self) -> bool {
        matches!(self, Currency::Inr)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Fixed exchange rates to INR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRates {
    /// INR per 1 USD.
    pub usd_to_inr: f64,
    /// INR per 1 EUR.
    pub eur_to_inr: f64,
}

impl ExchangeRates {
    /// INR per one unit of `currency`.
    pub fn to_inr(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Inr => 1.0,
            Currency::Usd => self.usd_to_inr,
            Currency::Eur => self.eur_to_inr,
        }
    }
}

// =============================================================================
// Conversion
// =============================================================================

/// Converts `amount` (major units) from one currency to another.
///
/// ```rust
/// use cafe_core::currency::{convert, Currency, ExchangeRates};
///
/// let rates = ExchangeRates { usd_to_inr: 80.0, eur_to_inr: 100.0 };
/// assert_eq!(convert(10.0, Currency::Usd, Currency::Inr, &rates), 800.0);
/// assert_eq!(convert(800.0, Currency::Inr, Currency::Eur, &rates), 8.0);
/// ```
pub fn convert(amount: f64, from: Currency, to: Currency, rates: &ExchangeRates) -> f64 {
    if from == to {
        return amount;
    }

    let in_inr = amount * rates.to_inr(from);
    let to_rate = rates.to_inr(to);

    let converted = in_inr / to_rate;
    if converted.is_finite() {
        converted
    } else {
        0.0
    }
}

/// Converts a stored INR amount into `currency` (major units).
pub fn to_display(amount: Money, currency: Currency, rates: &ExchangeRates) -> f64 {
    convert(amount.to_major_f64(), Currency::Inr, currency, rates)
}

/// Converts a display amount back into stored INR money.
pub fn from_display(amount: f64, currency: Currency, rates: &ExchangeRates) -> Money {
    Money::from_major_f64(convert(amount, currency, Currency::Inr, rates))
}

/// Formats a stored INR amount in the display currency with two decimals.
///
/// ```rust
/// use cafe_core::currency::{format_price, Currency, ExchangeRates};
/// use cafe_core::money::Money;
///
/// let rates = ExchangeRates { usd_to_inr: 88.79, eur_to_inr: 103.39 };
/// assert_eq!(format_price(Money::from_minor(74550), Currency::Inr, &rates), "₹745.50");
/// assert_eq!(format_price(Money::from_major(888), Currency::Usd, &rates), "$10.00");
/// ```
pub fn format_price(amount: Money, currency: Currency, rates: &ExchangeRates) -> String {
    format!("{}{:.2}", currency.symbol(), to_display(amount, currency, rates))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_rates() -> ExchangeRates {
        ExchangeRates {
            usd_to_inr: 88.79,
            eur_to_inr: 103.39,
        }
    }

    #[test]
    fn test_wire_names_are_symbols() {
        assert_eq!(serde_json::to_string(&Currency::Inr).unwrap(), "\"₹\"");
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"€\"");
        let usd: Currency = serde_json::from_str("\"$\"").unwrap();
        assert_eq!(usd, Currency::Usd);
    }

    #[test]
    fn test_round_trip_between_all_pairs() {
        let rates = demo_rates();
        let all = [Currency::Inr, Currency::Usd, Currency::Eur];

        for from in all {
            for to in all {
                let there = convert(1234.56, from, to, &rates);
                let back = convert(there, to, from, &rates);
                assert!(
                    (back - 1234.56).abs() < 1e-9,
                    "{from:?} -> {to:?} -> {from:?} gave {back}"
                );
            }
        }
    }

    #[test]
    fn test_zero_rate_degrades_to_zero() {
        let rates = ExchangeRates {
            usd_to_inr: 0.0,
            eur_to_inr: f64::NAN,
        };
        assert_eq!(convert(100.0, Currency::Inr, Currency::Usd, &rates), 0.0);
        assert_eq!(convert(100.0, Currency::Inr, Currency::Eur, &rates), 0.0);
        assert_eq!(convert(100.0, Currency::Usd, Currency::Inr, &rates), 0.0);
    }

    #[test]
    fn test_format_price() {
        let rates = demo_rates();
        assert_eq!(
            format_price(Money::from_major(420), Currency::Inr, &rates),
            "₹420.00"
        );
        // 1033.90 / 103.39 = 10
        assert_eq!(
            format_price(Money::from_minor(103390), Currency::Eur, &rates),
            "€10.00"
        );
    }

    #[test]
    fn test_from_display_back_to_money() {
        let rates = demo_rates();
        let money = from_display(10.0, Currency::Usd, &rates);
        assert_eq!(money.minor(), 88790);
    }
}
