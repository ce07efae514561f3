//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine, store::CartStore},
    catalog::{Catalog, CatalogError, CatalogSource, HttpCatalogSource, fetch_catalog},
    config::{ConfigError, StorefrontConfig},
    discounts::{CartTotals, DiscountError, DiscountRate, compute_totals},
    money::{PriceError, format_money, parse_display_price},
    products::{Product, ProductId},
    storage::{KeyValueStore, MemoryStore, StorageError},
    views::{
        badge::BadgeState,
        cart_page::{CartPageModel, CartRow},
        detail::{DetailFill, DetailView, ProductDetail},
        input::{parse_leading_int, parse_quantity},
        listing::{ProductCard, StarGlyph, product_cards},
        page::PageContainers,
    },
};
