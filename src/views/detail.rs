//! Single-product detail

use rusty_money::iso::Currency;

use crate::{
    cart::CartLine,
    catalog::Catalog,
    money::PriceError,
    products::{Product, ProductId},
    views::input::parse_quantity,
};

/// Message shown when the requested product is not in the catalog.
pub const NOT_FOUND_MESSAGE: &str = "Product not found.";

/// The product page's main image.
pub const MAIN_IMAGE_SELECTOR: &str = "#MainImg";

/// Heading holding the product name.
pub const NAME_SELECTOR: &str = ".sproduct-details h4";

/// Heading holding the display price.
pub const PRICE_SELECTOR: &str = ".sproduct-details h2";

/// The page's quantity field.
pub const QUANTITY_SELECTOR: &str = r#".sproduct-details input[type="number"]"#;

/// The page's add-to-cart control.
pub const ADD_BUTTON_SELECTOR: &str = ".sproduct-details button";

/// One write into the product page's existing markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFill<'a> {
    /// Set the `src` attribute of the matched element.
    Source {
        /// Target element
        selector: &'static str,

        /// Attribute value
        value: &'a str,
    },

    /// Replace the text of the matched element.
    Text {
        /// Target element
        selector: &'static str,

        /// Text content
        value: &'a str,
    },
}

/// Render model for a resolved product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    product: Product,
    currency: &'static Currency,
}

impl ProductDetail {
    /// Product id
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Image source
    pub fn image(&self) -> &str {
        &self.product.image
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// The catalog's own price string
    pub fn price(&self) -> &str {
        &self.product.price
    }

    /// Brand label
    pub fn brand(&self) -> &str {
        &self.product.brand
    }

    /// Writes that populate the page: image source, then name and price text.
    pub fn fills(&self) -> [DetailFill<'_>; 3] {
        [
            DetailFill::Source {
                selector: MAIN_IMAGE_SELECTOR,
                value: self.image(),
            },
            DetailFill::Text {
                selector: NAME_SELECTOR,
                value: self.name(),
            },
            DetailFill::Text {
                selector: PRICE_SELECTOR,
                value: self.price(),
            },
        ]
    }

    /// Line to add for the raw contents of the quantity field.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if the product's display price cannot be parsed.
    pub fn line_for(&self, quantity_input: &str) -> Result<CartLine, PriceError> {
        CartLine::from_product(&self.product, parse_quantity(quantity_input), self.currency)
    }
}

/// Outcome of resolving the product named by the page's query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// No catalog product has the requested id.
    NotFound,

    /// The product to show.
    Found(ProductDetail),
}

impl DetailView {
    /// Resolve the raw `id` query parameter against the catalog.
    ///
    /// The id is matched as an integer, so `"3abc"` resolves product 3 and
    /// `"abc"` resolves nothing.
    pub fn resolve(catalog: &Catalog, raw_id: &str, currency: &'static Currency) -> Self {
        ProductId::parse_lenient(raw_id)
            .and_then(|id| catalog.find(id))
            .map_or(DetailView::NotFound, |product| {
                DetailView::Found(ProductDetail {
                    product: product.clone(),
                    currency,
                })
            })
    }
}
