//! Errors

use std::io;

use storefront::{
    catalog::CatalogError, config::ConfigError, money::PriceError, storage::StorageError,
};
use thiserror::Error;

/// Errors surfaced by a cart command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The cart store could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The catalog could not be fetched.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A product's price could not be read.
    #[error(transparent)]
    Price(#[from] PriceError),

    /// A command needed the catalog but no URL was given.
    #[error("no catalog URL configured (set --catalog-url or STOREFRONT_CATALOG_URL)")]
    MissingCatalogUrl,

    /// The catalog has no product with this id.
    #[error("product {0} not found")]
    ProductNotFound(u64),

    /// Output could not be written.
    #[error(transparent)]
    Io(#[from] io::Error),
}
