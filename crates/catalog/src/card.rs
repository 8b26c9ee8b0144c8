//! Product card assembly: input record in, view model out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{CatalogError, CatalogResult, Clock, SystemClock};

use crate::config::CardConfig;
use crate::format::{PriceFormat, count_label};
use crate::style::{ColorToken, PriceStyle, TagStyle};
use crate::variant::{Variant, VariantResolver};

/// Attributes of one product, supplied per render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCardInput {
    pub identifier: String,
    pub name: String,
    pub image_url: String,
    pub price: i64, // minor currency units
    #[serde(default)]
    pub sale_price: Option<i64>,
    #[serde(default, deserialize_with = "crate::release_date::deserialize")]
    pub release_date: Option<DateTime<Utc>>,
    pub color_count: u32,
}

impl ProductCardInput {
    /// Navigation target for the product detail page.
    pub fn href(&self) -> String {
        format!("/product/{}", self.identifier)
    }

    fn validate(&self) -> CatalogResult<()> {
        let identifier = self.identifier.trim();
        if identifier.is_empty() {
            return Err(CatalogError::validation("identifier cannot be empty"));
        }
        if self
            .identifier
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%'))
        {
            return Err(CatalogError::validation(format!(
                "identifier must be a single path segment, got {:?}",
                self.identifier
            )));
        }
        if let Some(sale) = self.sale_price {
            if sale >= self.price {
                return Err(CatalogError::invalid_input(format!(
                    "sale price {sale} must be below list price {}",
                    self.price
                )));
            }
        }
        Ok(())
    }
}

/// Everything the rendering layer needs to paint one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub href: String,
    pub name: String,
    pub name_color: ColorToken,
    pub image_url: String,
    pub variant: Variant,
    pub tag: Option<TagStyle>,
    pub price: String,
    pub price_style: PriceStyle,
    pub sale_price: Option<String>,
    pub sale_price_style: Option<PriceStyle>,
    pub color_label: String,
    pub color_label_color: ColorToken,
}

/// Renders product inputs into card views.
#[derive(Debug, Clone)]
pub struct ProductCard<C = SystemClock> {
    resolver: VariantResolver<C>,
    price_format: PriceFormat,
}

impl ProductCard<SystemClock> {
    pub fn new(config: CardConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ProductCard<C> {
    pub fn with_clock(config: CardConfig, clock: C) -> Self {
        Self {
            resolver: VariantResolver::with_clock(config.recency_window, clock),
            price_format: config.price_format,
        }
    }

    pub fn variant_for(&self, input: &ProductCardInput) -> Variant {
        self.resolver.resolve(input.sale_price, input.release_date)
    }

    /// Build the view model for one product.
    ///
    /// Negative prices and sale prices not below the list price fail with
    /// `InvalidInput`; a malformed identifier fails with `Validation`.
    pub fn render(&self, input: &ProductCardInput) -> CatalogResult<CardView> {
        let price = self.price_format.format_minor(input.price)?;
        let sale_price = input
            .sale_price
            .map(|sale| self.price_format.format_minor(sale))
            .transpose()?;
        input.validate()?;

        let variant = self.variant_for(input);
        tracing::debug!(identifier = %input.identifier, %variant, "rendered product card");

        Ok(CardView {
            href: input.href(),
            name: input.name.clone(),
            name_color: ColorToken::Gray900,
            image_url: input.image_url.clone(),
            variant,
            tag: TagStyle::for_variant(variant),
            price,
            price_style: PriceStyle::for_variant(variant),
            sale_price_style: sale_price.as_ref().map(|_| PriceStyle::sale()),
            sale_price,
            color_label: count_label("Color", u64::from(input.color_count)),
            color_label_color: ColorToken::Gray700,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use storefront_core::FixedClock;

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn test_card() -> ProductCard<FixedClock> {
        ProductCard::with_clock(CardConfig::default(), FixedClock::new(test_now()))
    }

    fn test_input() -> ProductCardInput {
        ProductCardInput {
            identifier: "air-zoom-pegasus".to_string(),
            name: "Air Zoom Pegasus".to_string(),
            image_url: "/assets/air-zoom-pegasus.jpg".to_string(),
            price: 16500,
            sale_price: None,
            release_date: Some(test_now() - Duration::days(200)),
            color_count: 3,
        }
    }

    #[test]
    fn default_card_has_plain_price_and_no_tag() {
        let view = test_card().render(&test_input()).unwrap();
        assert_eq!(view.variant, Variant::Default);
        assert_eq!(view.tag, None);
        assert_eq!(view.price, "$165.00");
        assert_eq!(view.price_style, PriceStyle::default());
        assert_eq!(view.sale_price, None);
        assert_eq!(view.color_label, "3 Colors");
        assert_eq!(view.color_label_color, ColorToken::Gray700);
        assert_eq!(view.name_color, ColorToken::Gray900);
        assert_eq!(view.sale_price_style, None);
        assert_eq!(view.href, "/product/air-zoom-pegasus");
    }

    #[test]
    fn sale_card_strikes_list_price_and_shows_sale_price() {
        let input = ProductCardInput {
            sale_price: Some(12000),
            release_date: Some(test_now() - Duration::days(1)),
            ..test_input()
        };
        let view = test_card().render(&input).unwrap();
        assert_eq!(view.variant, Variant::OnSale);
        assert_eq!(view.tag.map(|t| t.text), Some("Sale"));
        assert!(view.price_style.strike_through);
        assert_eq!(view.sale_price.as_deref(), Some("$120.00"));
        assert_eq!(view.sale_price_style, Some(PriceStyle::sale()));
    }

    #[test]
    fn new_release_card_gets_badge() {
        let input = ProductCardInput {
            release_date: Some(test_now() - Duration::days(3)),
            color_count: 1,
            ..test_input()
        };
        let view = test_card().render(&input).unwrap();
        assert_eq!(view.variant, Variant::NewRelease);
        assert_eq!(view.tag.map(|t| t.text), Some("Just Released!"));
        assert_eq!(view.color_label, "1 Color");
    }

    #[test]
    fn negative_price_is_invalid_input() {
        let input = ProductCardInput {
            price: -1,
            ..test_input()
        };
        match test_card().render(&input).unwrap_err() {
            CatalogError::InvalidInput(_) => {}
            _ => panic!("Expected InvalidInput for negative price"),
        }
    }

    #[test]
    fn sale_price_not_below_price_is_invalid_input() {
        let input = ProductCardInput {
            sale_price: Some(16500),
            ..test_input()
        };
        match test_card().render(&input).unwrap_err() {
            CatalogError::InvalidInput(msg) => assert!(msg.contains("below list price")),
            _ => panic!("Expected InvalidInput for sale price >= price"),
        }
    }

    #[test]
    fn malformed_identifier_is_rejected() {
        for identifier in ["", "   ", "a/b", "two words", "a?b", "a#b", "a%20b", "a?b#c"] {
            let input = ProductCardInput {
                identifier: identifier.to_string(),
                ..test_input()
            };
            match test_card().render(&input).unwrap_err() {
                CatalogError::Validation(_) => {}
                other => panic!("Expected Validation for {identifier:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn system_clock_card_renders() {
        let card = ProductCard::new(CardConfig::default());
        let input = ProductCardInput {
            release_date: Some(Utc::now() - Duration::days(2)),
            ..test_input()
        };
        assert_eq!(card.render(&input).unwrap().variant, Variant::NewRelease);
    }

    #[test]
    fn render_is_idempotent() {
        let card = test_card();
        let input = test_input();
        assert_eq!(card.render(&input).unwrap(), card.render(&input).unwrap());
    }

    #[test]
    fn configured_symbol_is_used() {
        let config = CardConfig {
            price_format: PriceFormat::new("€", 2).unwrap(),
            ..CardConfig::default()
        };
        let card = ProductCard::with_clock(config, FixedClock::new(test_now()));
        assert_eq!(card.render(&test_input()).unwrap().price, "€165.00");
    }
}
