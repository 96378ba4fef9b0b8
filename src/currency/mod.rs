//! Locale-aware amount formatting for tables and reports.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display symbol for the handful of currencies the shop deals in;
    /// everything else falls back to the code itself.
    pub fn symbol(&self) -> &str {
        match self.0.as_str() {
            "IDR" => "Rp",
            "USD" => "$",
            "EUR" => "€",
            _ => self.0.as_str(),
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("IDR")
    }
}

/// Locale-dependent separators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "id-ID".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

impl LocaleConfig {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "en-US" => Self {
                language_tag: tag.into(),
                decimal_separator: '.',
                grouping_separator: ',',
            },
            _ => Self {
                language_tag: tag.into(),
                ..Self::default()
            },
        }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && idx % 3 == offset % 3 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount with the currency symbol and thousands grouping,
/// rounded to whole units as the shop's prices always are.
pub fn format_amount(amount: f64, currency: &CurrencyCode, locale: &LocaleConfig) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;
    let grouped = group_digits(&rounded.to_string(), locale.grouping_separator);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{} {grouped}", currency.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_idr_with_dot_grouping() {
        let formatted = format_amount(250_000.0, &CurrencyCode::default(), &LocaleConfig::default());
        assert_eq!(formatted, "Rp 250.000");
    }

    #[test]
    fn formats_negative_amounts_with_leading_sign() {
        let formatted = format_amount(-1_500.0, &CurrencyCode::default(), &LocaleConfig::default());
        assert_eq!(formatted, "-Rp 1.500");
    }

    #[test]
    fn groups_seven_digit_amounts() {
        let formatted = format_amount(
            1_234_567.0,
            &CurrencyCode::new("usd"),
            &LocaleConfig::from_tag("en-US"),
        );
        assert_eq!(formatted, "$ 1,234,567");
    }
}
