//! Display formatting for prices and count labels.

use storefront_core::{CatalogError, CatalogResult, MinorUnits};

/// Currency presentation: symbol prefix and number of fraction digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    symbol: String,
    fraction_digits: u32,
}

impl PriceFormat {
    /// Largest supported number of fraction digits.
    pub const MAX_FRACTION_DIGITS: u32 = 4;

    pub fn new(symbol: impl Into<String>, fraction_digits: u32) -> CatalogResult<Self> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(CatalogError::validation("currency symbol cannot be empty"));
        }
        if fraction_digits > Self::MAX_FRACTION_DIGITS {
            return Err(CatalogError::validation(format!(
                "fraction digits must be at most {}, got {fraction_digits}",
                Self::MAX_FRACTION_DIGITS
            )));
        }
        Ok(Self {
            symbol,
            fraction_digits,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }

    /// Format a validated amount, e.g. `1234567` → `"$12,345.67"`.
    pub fn format(&self, amount: MinorUnits) -> String {
        let (whole, fraction) = amount.split(self.fraction_digits);
        let mut out = String::with_capacity(self.symbol.len() + 16);
        out.push_str(&self.symbol);
        out.push_str(&group_thousands(whole));
        if self.fraction_digits > 0 {
            out.push('.');
            out.push_str(&format!("{:0width$}", fraction, width = self.fraction_digits as usize));
        }
        out
    }

    /// Validate and format a raw minor-unit amount.
    pub fn format_minor(&self, minor_units: i64) -> CatalogResult<String> {
        let amount = MinorUnits::new(minor_units)?;
        Ok(self.format(amount))
    }
}

impl Default for PriceFormat {
    /// US dollars.
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            fraction_digits: 2,
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format minor currency units as US dollars.
///
/// Negative amounts fail with [`CatalogError::InvalidInput`].
pub fn format_price(minor_units: i64) -> CatalogResult<String> {
    PriceFormat::default().format_minor(minor_units)
}

/// `word` for a count of one, `word` + `"s"` otherwise.
///
/// Only regular suffixing is attempted; irregular plurals are not handled.
pub fn pluralize_label(word: &str, count: u64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Count followed by the pluralized label, e.g. `"3 Colors"`.
pub fn count_label(word: &str, count: u64) -> String {
    format!("{count} {}", pluralize_label(word, count))
}
