//! Variant resolution: which of the three display modes a card uses.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{CatalogError, CatalogResult, Clock, SystemClock};

/// Products released within this many days count as new releases.
pub const DEFAULT_NEW_RELEASE_DAYS: u32 = 30;

/// Display variant of a product card.
///
/// Exactly one applies per product. A sale always wins over a recent release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Default,
    OnSale,
    NewRelease,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long after release a product is considered new.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow(Duration);

impl RecencyWindow {
    /// A window of `days` whole days. Zero is rejected.
    pub fn days(days: u32) -> CatalogResult<Self> {
        if days == 0 {
            return Err(CatalogError::validation("recency window must be at least one day"));
        }
        Ok(Self(Duration::days(i64::from(days))))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    /// True when `released_at` lies in `[now - window, now]`, exclusive of the
    /// far edge. Future releases never qualify.
    pub fn contains(&self, released_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let elapsed = now.signed_duration_since(released_at);
        elapsed >= Duration::zero() && elapsed < self.0
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self(Duration::days(i64::from(DEFAULT_NEW_RELEASE_DAYS)))
    }
}

/// Resolve the display variant for a product.
pub fn resolve_variant(
    sale_price: Option<i64>,
    release_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    window: RecencyWindow,
) -> Variant {
    if sale_price.is_some() {
        return Variant::OnSale;
    }
    match release_date {
        Some(released_at) if window.contains(released_at, now) => Variant::NewRelease,
        _ => Variant::Default,
    }
}

/// Resolver bound to a clock and a recency window.
#[derive(Debug, Clone)]
pub struct VariantResolver<C = SystemClock> {
    clock: C,
    window: RecencyWindow,
}

impl VariantResolver<SystemClock> {
    pub fn new(window: RecencyWindow) -> Self {
        Self::with_clock(window, SystemClock)
    }
}

impl<C: Clock> VariantResolver<C> {
    pub fn with_clock(window: RecencyWindow, clock: C) -> Self {
        Self { clock, window }
    }

    /// Resolve against the resolver's current "now".
    pub fn resolve(&self, sale_price: Option<i64>, release_date: Option<DateTime<Utc>>) -> Variant {
        resolve_variant(sale_price, release_date, self.clock.now(), self.window)
    }
}
