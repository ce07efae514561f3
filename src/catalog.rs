//! Catalog
//!
//! Loading the read-only product catalog from its static JSON document.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

pub use reqwest::Url;

use crate::products::{Product, ProductId};

/// Catalog document: `{ "products": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Products in display order
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products.
    pub fn new(products: impl Into<Vec<Product>>) -> Self {
        Catalog {
            products: products.into(),
        }
    }

    /// Find a product by id.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Errors that can occur while fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("catalog request failed with status {0}")]
    Status(u16),

    /// The body was not a catalog document.
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Somewhere a catalog can be fetched from.
#[automock]
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch and decode the catalog.
    async fn fetch(&self) -> Result<Catalog, CatalogError>;
}

/// Catalog served over HTTP as a static JSON file.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: Url,
    http: Client,
}

impl HttpCatalogSource {
    /// Create a source for the given absolute URL.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            http: Client::new(),
        }
    }

    /// Resolve a (possibly relative) catalog path against a page URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not an absolute URL or `path` cannot be joined to it.
    pub fn relative_to(base: &str, path: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(base)?.join(path)?;

        Ok(Self::new(url))
    }

    /// The catalog URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        debug!(url = %self.url, "fetching catalog");

        let response = self.http.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// Fetch the catalog, substituting an empty catalog for any failure.
///
/// Failures are logged and never reach the caller.
pub async fn fetch_catalog<C: CatalogSource + ?Sized>(source: &C) -> Catalog {
    match source.fetch().await {
        Ok(catalog) => {
            debug!(products = catalog.len(), "loaded catalog");
            catalog
        }
        Err(error) => {
            error!(%error, "error loading products");
            Catalog::default()
        }
    }
}
