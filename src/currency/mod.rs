//! Locale-aware currency rendering and parsing.

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
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("BRL")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    #[serde(default)]
    pub space_after_symbol: bool,
}

impl LocaleConfig {
    pub fn pt_br() -> Self {
        Self {
            language_tag: "pt-BR".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            space_after_symbol: true,
        }
    }

    pub fn en_us() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            space_after_symbol: false,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::pt_br()
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "BRL" => "R$".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (body.as_str(), None),
    };
    let grouped = match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, locale.grouping_separator)),
        None => group_digits(int_part, locale.grouping_separator),
    };
    match fraction {
        Some(fraction) => format!("{}{}{}", grouped, locale.decimal_separator, fraction),
        None => grouped,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders `amount` as e.g. `R$ 1.234,56` (pt-BR) or `$1,234.56` (en-US).
pub fn format_currency(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let symbol = symbol_for(code.as_str());
    let spacer = if locale.space_after_symbol { " " } else { "" };
    // Rounding can turn tiny negatives into zero; never render "-0,00".
    let is_zero = body.chars().all(|ch| !ch.is_ascii_digit() || ch == '0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{}{}{}{}", sign, symbol, spacer, body)
}

/// Parses a human-entered amount such as `R$ 2.500`, `1.250,90` or `R$ -10`.
///
/// One currency symbol may sit before or after the number, and a minus sign
/// may sit on either side of a leading symbol. The locale decides which
/// separator is decimal; grouped digits come in threes. Any other text makes
/// the amount unreadable and yields `None`.
pub fn parse_currency(raw: &str, locale: &LocaleConfig) -> Option<f64> {
    let mut rest = raw.trim();
    let mut negative = false;
    if let Some(unsigned) = rest.strip_prefix('-') {
        negative = true;
        rest = unsigned.trim_start();
    }
    match strip_symbol_prefix(rest) {
        Some(after_symbol) => {
            rest = after_symbol;
            if let Some(unsigned) = rest.strip_prefix('-') {
                if negative {
                    return None;
                }
                negative = true;
                rest = unsigned.trim_start();
            }
        }
        None => rest = strip_symbol_suffix(rest).unwrap_or(rest),
    }
    let value = plain_number(rest, locale)?.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

const MAX_SYMBOL_CHARS: usize = 3;

fn is_symbol_char(ch: char) -> bool {
    matches!(ch, '$' | '€' | '£' | '¥') || ch.is_ascii_uppercase()
}

fn strip_symbol_prefix(text: &str) -> Option<&str> {
    let end = text
        .char_indices()
        .find(|(_, ch)| !is_symbol_char(*ch))
        .map_or(text.len(), |(idx, _)| idx);
    let symbol = &text[..end];
    if symbol.is_empty() || symbol.chars().count() > MAX_SYMBOL_CHARS {
        return None;
    }
    Some(text[end..].trim_start())
}

fn strip_symbol_suffix(text: &str) -> Option<&str> {
    let start = text
        .char_indices()
        .rev()
        .take_while(|(_, ch)| is_symbol_char(*ch))
        .last()
        .map(|(idx, _)| idx)?;
    if text[start..].chars().count() > MAX_SYMBOL_CHARS {
        return None;
    }
    Some(text[..start].trim_end())
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|ch| ch.is_ascii_digit())
}

/// Rewrites `1.250,90` (pt-BR) as `1250.90`, or rejects it.
fn plain_number(text: &str, locale: &LocaleConfig) -> Option<String> {
    let (int_part, fraction) = match text.split_once(locale.decimal_separator) {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (text, None),
    };
    let mut groups = int_part.split(locale.grouping_separator);
    let lead = groups.next()?;
    if !is_digits(lead) {
        return None;
    }
    let mut normalized = lead.to_string();
    let mut grouped = false;
    for group in groups {
        if group.len() != 3 || !is_digits(group) {
            return None;
        }
        grouped = true;
        normalized.push_str(group);
    }
    if grouped && lead.len() > 3 {
        return None;
    }
    if let Some(fraction) = fraction {
        if !is_digits(fraction) {
            return None;
        }
        normalized.push('.');
        normalized.push_str(fraction);
    }
    Some(normalized)
}
