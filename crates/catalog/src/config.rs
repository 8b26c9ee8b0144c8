//! Card configuration sourced from environment variables.

use crate::format::PriceFormat;
use crate::variant::RecencyWindow;

/// Whole days a release counts as new.
pub const NEW_RELEASE_DAYS_VAR: &str = "STOREFRONT_NEW_RELEASE_DAYS";

/// Currency symbol prefixed to prices.
pub const CURRENCY_SYMBOL_VAR: &str = "STOREFRONT_CURRENCY_SYMBOL";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardConfig {
    pub recency_window: RecencyWindow,
    pub price_format: PriceFormat,
}

impl CardConfig {
    /// Read configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; unparseable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(NEW_RELEASE_DAYS_VAR) {
            match raw
                .trim()
                .parse::<u32>()
                .map_err(|e| e.to_string())
                .and_then(|days| RecencyWindow::days(days).map_err(|e| e.to_string()))
            {
                Ok(window) => config.recency_window = window,
                Err(reason) => {
                    tracing::warn!(
                        var = NEW_RELEASE_DAYS_VAR,
                        value = %raw,
                        %reason,
                        "ignoring invalid recency window; using default"
                    );
                }
            }
        }

        if let Some(symbol) = lookup(CURRENCY_SYMBOL_VAR) {
            let digits = config.price_format.fraction_digits();
            match PriceFormat::new(symbol.trim(), digits) {
                Ok(format) => config.price_format = format,
                Err(e) => {
                    tracing::warn!(
                        var = CURRENCY_SYMBOL_VAR,
                        error = %e,
                        "ignoring invalid currency symbol; using default"
                    );
                }
            }
        }

        config
    }
}
