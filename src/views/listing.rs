//! Listing cards

use rusty_money::iso::Currency;
use tracing::warn;

use crate::{
    cart::CartLine,
    catalog::Catalog,
    config::StorefrontConfig,
    products::{Product, ProductId},
};

/// Number of glyphs in a rating row.
pub const RATING_GLYPHS: i64 = 5;

/// One glyph in a star rating row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarGlyph {
    /// Counted towards the rating.
    Filled,

    /// Beyond the rating.
    Empty,
}

impl StarGlyph {
    /// Icon classes for the glyph.
    pub fn class(self) -> &'static str {
        match self {
            StarGlyph::Filled => "bi bi-star-fill",
            StarGlyph::Empty => "bi bi-star",
        }
    }
}

/// Star row for a rating: `rating` filled glyphs, the rest empty.
///
/// Ratings outside `0..=5` are not clamped; they simply fill none or all glyphs.
pub fn star_row(rating: i64) -> Vec<StarGlyph> {
    (0..RATING_GLYPHS)
        .map(|index| {
            if index < rating {
                StarGlyph::Filled
            } else {
                StarGlyph::Empty
            }
        })
        .collect()
}

/// Render model for a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Product id
    pub id: ProductId,

    /// Link to the single-product page
    pub href: String,

    /// Image source
    pub image: String,

    /// Brand label
    pub brand: String,

    /// Product name, also used as image alt text
    pub name: String,

    /// Rating glyphs
    pub stars: Vec<StarGlyph>,

    /// The catalog's own price string
    pub price: String,

    /// Numeric price carried on the add-to-cart control (`data-price`)
    pub data_price: Option<String>,

    /// Line added when the card's control is activated; `None` disables it
    pub add_line: Option<CartLine>,
}

impl ProductCard {
    /// Build the card for one product.
    pub fn new(product: &Product, config: &StorefrontConfig, currency: &'static Currency) -> Self {
        let add_line = match CartLine::from_product(product, 1, currency) {
            Ok(line) => Some(line),
            Err(error) => {
                warn!(id = %product.id, price = %product.price, %error, "unpriceable product");
                None
            }
        };

        ProductCard {
            id: product.id,
            href: config.product_href(product.id),
            image: product.image.clone(),
            brand: product.brand.clone(),
            name: product.name.clone(),
            stars: star_row(product.rating),
            price: product.price.clone(),
            data_price: add_line.as_ref().map(|line| line.price.to_string()),
            add_line,
        }
    }
}

/// Cards for every product, in catalog order.
pub fn product_cards(
    catalog: &Catalog,
    config: &StorefrontConfig,
    currency: &'static Currency,
) -> Vec<ProductCard> {
    catalog
        .products
        .iter()
        .map(|product| ProductCard::new(product, config, currency))
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso::USD;

    use super::*;

    fn product(id: u64, price: &str, rating: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            brand: "adidas".to_string(),
            image: format!("img/products/f{id}.jpg"),
            price: price.to_string(),
            rating,
        }
    }

    fn filled(stars: &[StarGlyph]) -> usize {
        stars
            .iter()
            .filter(|star| **star == StarGlyph::Filled)
            .count()
    }

    #[test]
    fn star_row_fills_rating() {
        let stars = star_row(3);

        assert_eq!(stars.len(), 5);
        assert_eq!(filled(&stars), 3);
        assert_eq!(stars.first(), Some(&StarGlyph::Filled));
        assert_eq!(stars.last(), Some(&StarGlyph::Empty));
    }

    #[test]
    fn star_row_out_of_range_is_not_clamped_but_stays_five_wide() {
        assert_eq!(filled(&star_row(9)), 5);
        assert_eq!(filled(&star_row(-2)), 0);
        assert_eq!(star_row(9).len(), 5);
    }

    #[test]
    fn card_carries_product_fields() {
        let card = ProductCard::new(&product(2, "$49.99", 4), &StorefrontConfig::default(), USD);

        assert_eq!(card.href, "sproduct.html?id=2");
        assert_eq!(card.price, "$49.99");
        assert_eq!(card.data_price.as_deref(), Some("49.99"));
        assert_eq!(card.brand, "adidas");
        assert_eq!(
            card.add_line.map(|line| (line.id, line.price, line.quantity)),
            Some((ProductId(2), Decimal::new(4999, 2), 1))
        );
    }

    #[test]
    fn unpriceable_card_has_no_add_line() {
        let card = ProductCard::new(&product(2, "call us", 4), &StorefrontConfig::default(), USD);

        assert!(card.add_line.is_none());
        assert!(card.data_price.is_none());
        assert_eq!(card.price, "call us");
    }

    #[test]
    fn cards_follow_catalog_order() {
        let catalog = Catalog::new([product(3, "$1", 1), product(1, "$2", 2)]);

        let ids: Vec<ProductId> = product_cards(&catalog, &StorefrontConfig::default(), USD)
            .iter()
            .map(|card| card.id)
            .collect();

        assert_eq!(ids, vec![ProductId(3), ProductId(1)]);
    }

    #[test]
    fn empty_catalog_has_no_cards() {
        assert!(product_cards(&Catalog::default(), &StorefrontConfig::default(), USD).is_empty());
    }
}
