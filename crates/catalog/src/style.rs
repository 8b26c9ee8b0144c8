//! Style descriptors selected per variant.

use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

use crate::variant::Variant;

/// Palette entries the card uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    Primary,
    Secondary,
    White,
    Gray700,
    Gray900,
}

impl ColorToken {
    /// CSS color value.
    pub fn css(self) -> &'static str {
        match self {
            ColorToken::Primary => "hsl(340deg 65% 47%)",
            ColorToken::Secondary => "hsl(240deg 60% 63%)",
            ColorToken::White => "hsl(0deg 0% 100%)",
            ColorToken::Gray700 => "hsl(220deg 5% 40%)",
            ColorToken::Gray900 => "hsl(220deg 3% 20%)",
        }
    }
}

/// Badge painted over the product image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagStyle {
    pub background: ColorToken,
    pub foreground: ColorToken,
    pub text: &'static str,
}

impl ValueObject for TagStyle {}

const SALE_TAG: TagStyle = TagStyle {
    background: ColorToken::Primary,
    foreground: ColorToken::White,
    text: "Sale",
};

const NEW_RELEASE_TAG: TagStyle = TagStyle {
    background: ColorToken::Secondary,
    foreground: ColorToken::White,
    text: "Just Released!",
};

impl TagStyle {
    /// Badge for a variant; the default variant has none.
    pub fn for_variant(variant: Variant) -> Option<TagStyle> {
        match variant {
            Variant::Default => None,
            Variant::OnSale => Some(SALE_TAG),
            Variant::NewRelease => Some(NEW_RELEASE_TAG),
        }
    }
}

/// Treatment of the list price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceStyle {
    /// `None` inherits the surrounding text color.
    pub color: Option<ColorToken>,
    pub strike_through: bool,
}

impl ValueObject for PriceStyle {}

impl PriceStyle {
    pub fn for_variant(variant: Variant) -> PriceStyle {
        match variant {
            Variant::OnSale => PriceStyle {
                color: Some(ColorToken::Gray700),
                strike_through: true,
            },
            Variant::Default | Variant::NewRelease => PriceStyle::default(),
        }
    }

    /// Treatment of the discounted price shown next to a struck-through list price.
    pub fn sale() -> PriceStyle {
        PriceStyle {
            color: Some(ColorToken::Primary),
            strike_through: false,
        }
    }
}
