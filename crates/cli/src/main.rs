//! Storefront cart command-line tool
//!
//! Reads and edits a cart persisted in a JSON file, using the same storage
//! format the browser storefront writes to `localStorage`.

use std::{io, process::ExitCode};

use storefront::{
    cart::store::CartStore,
    catalog::{CatalogSource, HttpCatalogSource},
    config::StorefrontConfig,
};
use tracing::error;

use crate::{commands::Session, config::CliConfig, file_store::FileStore};

mod commands;
mod config;
mod errors;
mod file_store;
mod observability;
mod table;

/// Storefront CLI entry point
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = CliConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("Logging error: {error}");
        }
    }

    let storefront = StorefrontConfig {
        storage_key: config.storage_key.clone(),
        currency: config.currency.clone(),
        ..StorefrontConfig::default()
    };

    let currency = match storefront.currency() {
        Ok(currency) => currency,
        Err(error) => {
            error!(%error, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let session = Session {
        store: CartStore::new(FileStore::new(&config.cart_file), storefront.storage_key),
        catalog: config
            .catalog_url
            .clone()
            .map(|url| Box::new(HttpCatalogSource::new(url)) as Box<dyn CatalogSource>),
        currency,
    };

    match session.run(&config.command, &mut io::stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "command failed");
            ExitCode::FAILURE
        }
    }
}
