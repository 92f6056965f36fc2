//! Locale-aware currency strings for price labels.
//!
//! Formatting never fails loudly: an unsupported locale or currency code, or an
//! amount that is not finite, yields an empty string.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::domain::errors::{BoardError, BoardResult};

/// Locales with known separator and symbol placement rules
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum Locale {
    #[strum(serialize = "en_US", serialize = "en-US")]
    #[serde(rename = "en_US")]
    EnUs,
    #[strum(serialize = "en_GB", serialize = "en-GB")]
    #[serde(rename = "en_GB")]
    EnGb,
    #[strum(serialize = "de_DE", serialize = "de-DE")]
    #[serde(rename = "de_DE")]
    DeDe,
    #[strum(serialize = "fr_FR", serialize = "fr-FR")]
    #[serde(rename = "fr_FR")]
    FrFr,
    #[strum(serialize = "ja_JP", serialize = "ja-JP")]
    #[serde(rename = "ja_JP")]
    JaJp,
}

impl Locale {
    fn grouping_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::JaJp => ",",
            Locale::DeDe => ".",
            Locale::FrFr => "\u{202F}",
        }
    }

    fn decimal_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::JaJp => ".",
            Locale::DeDe | Locale::FrFr => ",",
        }
    }

    /// `Some(sep)` when the symbol trails the number, separated by `sep`
    fn symbol_suffix(&self) -> Option<&'static str> {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::JaJp => None,
            Locale::DeDe => Some(" "),
            Locale::FrFr => Some("\u{a0}"),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
        }
    }

    pub fn fraction_digits(&self) -> usize {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    locale: Locale,
    currency: Currency,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(Locale::EnUs, Currency::USD)
    }
}

static DEFAULT_FORMATTER: Lazy<CurrencyFormatter> = Lazy::new(CurrencyFormatter::default);

impl CurrencyFormatter {
    pub fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }

    /// Build from codes such as `"de_DE"` and `"EUR"`.
    pub fn from_codes(locale: &str, currency: &str) -> BoardResult<Self> {
        let locale = locale
            .trim()
            .parse::<Locale>()
            .map_err(|_| BoardError::Validation(format!("unsupported locale '{}'", locale)))?;
        let currency = currency
            .trim()
            .parse::<Currency>()
            .map_err(|_| BoardError::Validation(format!("unsupported currency '{}'", currency)))?;
        Ok(Self::new(locale, currency))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return String::new();
        }

        let digits = self.currency.fraction_digits();
        let fixed = format!("{:.*}", digits, amount.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut number = group_digits(integer, self.locale.grouping_separator());
        if let Some(fraction) = fraction {
            number.push_str(self.locale.decimal_separator());
            number.push_str(fraction);
        }

        // "-0.00" reads as noise; only show the sign when something survived rounding
        let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let sign = if negative { "-" } else { "" };
        let symbol = self.currency.symbol();

        match self.locale.symbol_suffix() {
            Some(gap) => format!("{}{}{}{}", sign, number, gap, symbol),
            None => format!("{}{}{}", sign, symbol, number),
        }
    }

    /// Change badge label: `+` when positive, then two decimals.
    pub fn format_change(&self, percent: f64) -> String {
        if !percent.is_finite() {
            return String::new();
        }
        let sign = if percent > 0.0 { "+" } else { "" };
        format!("{}{:.2}", sign, percent).replace('.', self.locale.decimal_separator())
    }
}

/// Format with the implicit `en_US` / `USD` configuration.
pub fn convert_to_currency(amount: f64) -> String {
    DEFAULT_FORMATTER.format(amount)
}

/// Format with explicit codes; unsupported codes give an empty string.
pub fn format_currency(amount: f64, locale: &str, currency: &str) -> String {
    CurrencyFormatter::from_codes(locale, currency)
        .map(|formatter| formatter.format(amount))
        .unwrap_or_default()
}

fn group_digits(integer: &str, separator: &str) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(*digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits("0", ","), "0");
        assert_eq!(group_digits("999", ","), "999");
        assert_eq!(group_digits("1000", ","), "1,000");
        assert_eq!(group_digits("1234567", "."), "1.234.567");
    }

    #[test]
    fn locale_codes_accept_both_separators() {
        assert_eq!("en-GB".parse::<Locale>().unwrap(), Locale::EnGb);
        assert_eq!("de_DE".parse::<Locale>().unwrap(), Locale::DeDe);
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
    }

    #[test]
    fn rounding_to_zero_drops_sign() {
        assert_eq!(CurrencyFormatter::default().format(-0.001), "$0.00");
    }
}
