//! Product card domain module.
//!
//! Decides how a product card is labeled and priced: which display variant
//! applies, how prices and color counts read, and which style descriptors the
//! rendering layer should paint. Pure deterministic logic (no IO, no HTML).

pub mod card;
pub mod config;
pub mod format;
pub mod release_date;
pub mod style;
pub mod variant;

pub use card::{CardView, ProductCard, ProductCardInput};
pub use config::CardConfig;
pub use format::{PriceFormat, count_label, format_price, pluralize_label};
pub use style::{ColorToken, PriceStyle, TagStyle};
pub use variant::{
    DEFAULT_NEW_RELEASE_DAYS, RecencyWindow, Variant, VariantResolver, resolve_variant,
};
