//! `storefront-core` — domain building blocks shared by storefront crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod clock;
pub mod error;
pub mod money;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CatalogError, CatalogResult};
pub use money::MinorUnits;
pub use value_object::ValueObject;
