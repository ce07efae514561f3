//! Cart commands

use std::io::Write;

use rusty_money::iso::Currency;
use storefront::{
    cart::{Cart, CartLine, store::CartStore},
    catalog::{Catalog, CatalogSource},
    products::ProductId,
    storage::KeyValueStore,
    views::{
        badge::BadgeState,
        cart_page::{CartPageModel, EMPTY_CART_MESSAGE},
    },
};
use tracing::info;

use crate::{config::Command, errors::CliError, table};

/// What a command runs against.
pub struct Session<S> {
    /// Persisted cart
    pub store: CartStore<S>,

    /// Catalog, when one is configured
    pub catalog: Option<Box<dyn CatalogSource>>,

    /// Display currency
    pub currency: &'static Currency,
}

impl<S: KeyValueStore> Session<S> {
    /// Run one command, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns a [`CliError`] if the cart cannot be read or written, the catalog
    /// is needed but unavailable, or output cannot be written.
    pub async fn run(&self, command: &Command, out: &mut impl Write) -> Result<(), CliError> {
        match command {
            Command::Catalog => {
                let catalog = self.fetch_catalog().await?;

                writeln!(out, "{}", table::catalog_table(&catalog))?;
            }
            Command::Show { discount } => {
                let cart = self.load()?;

                if cart.is_empty() {
                    writeln!(out, "{EMPTY_CART_MESSAGE}")?;
                } else {
                    let page = CartPageModel::build(&cart, *discount, self.currency);

                    writeln!(out, "{}", table::cart_table(&page))?;
                }
            }
            Command::Add { id, quantity } => {
                let catalog = self.fetch_catalog().await?;
                let product = catalog
                    .find(ProductId(*id))
                    .ok_or(CliError::ProductNotFound(*id))?;
                let line = CartLine::from_product(product, *quantity, self.currency)?;

                let message = format!("Added {} × {}", line.quantity, line.name);

                info!(id, quantity = line.quantity, "adding to cart");
                self.commit(|cart| cart.add(line))?;

                writeln!(out, "{message}")?;
            }
            Command::Set { id, quantity } => {
                let cart = self.commit(|cart| {
                    cart.set_quantity(ProductId(*id), *quantity);
                })?;

                match cart.get(ProductId(*id)) {
                    Some(line) => writeln!(out, "{} × {}", line.quantity, line.name)?,
                    None => writeln!(out, "Product {id} is not in the cart")?,
                }
            }
            Command::Remove { id } => {
                self.commit(|cart| {
                    cart.remove(ProductId(*id));
                })?;

                writeln!(out, "Removed product {id}")?;
            }
            Command::Count => {
                let cart = self.load()?;

                writeln!(out, "{}", BadgeState::from_cart(&cart).count)?;
            }
        }

        Ok(())
    }

    /// Read the cart, failing loudly on an unreadable store rather than
    /// discarding it.
    fn load(&self) -> Result<Cart, CliError> {
        Ok(self.store.try_load()?.unwrap_or_default())
    }

    /// Apply a mutation to the stored cart and write it back.
    fn commit(&self, mutate: impl FnOnce(&mut Cart)) -> Result<Cart, CliError> {
        let mut cart = self.load()?;
        mutate(&mut cart);

        self.store.try_save(&cart)?;

        Ok(cart)
    }

    async fn fetch_catalog(&self) -> Result<Catalog, CliError> {
        let source = self.catalog.as_ref().ok_or(CliError::MissingCatalogUrl)?;

        Ok(source.fetch().await?)
    }
}
