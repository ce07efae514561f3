//! Storefront web application
//!
//! Mounts the listing, detail and cart views into whichever of their containers
//! the current page carries, and keeps the navigation badge current.

use std::sync::Arc;

use any_spawner::Executor;
use leptos::{
    mount::mount_to,
    prelude::*,
    task::spawn_local,
};
use storefront::{
    catalog::{Catalog, HttpCatalogSource, fetch_catalog},
    config::StorefrontConfig,
    views::page::{CART_ITEMS_ID, CART_SUBTOTAL_ID, CART_TOTAL_ID, LISTING_CONTAINER_ID},
};
use tracing::{error, info};
use tracing_subscriber::{
    Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};
use tracing_web::MakeWebConsoleWriter;

mod badge;
mod cart_page;
mod context;
mod detail;
mod dom;
mod listing;
mod storage;

use context::CartContext;

fn init_tracing() {
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::INFO);

    _ = tracing_subscriber::registry().with(console).try_init();
}

/// Start fetching the catalog, filling `catalog` when it resolves.
fn load_catalog(config: &StorefrontConfig, catalog: RwSignal<Option<Catalog>>) {
    let Some(base) = dom::page_url() else {
        catalog.set(Some(Catalog::default()));
        return;
    };

    match HttpCatalogSource::relative_to(&base, &config.catalog_path) {
        Ok(source) => spawn_local(async move {
            let loaded = fetch_catalog(&source).await;
            info!(url = %source.url(), products = loaded.len(), "catalog loaded");
            catalog.set(Some(loaded));
        }),
        Err(error) => {
            error!(path = %config.catalog_path, %error, "error loading products");
            catalog.set(Some(Catalog::default()));
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();

    // Effects and the catalog fetch run on the browser's microtask queue even when
    // nothing is mounted.
    _ = Executor::init_wasm_bindgen();

    let config = dom::page_config();
    let currency = config.currency().unwrap_or_else(|error| {
        error!(%error, "falling back to USD");
        rusty_money::iso::USD
    });

    let page = dom::page_containers();
    let cart = CartContext::load(&config);
    let catalog = RwSignal::new(None::<Catalog>);

    badge::mount_badge(cart.cart());

    if page.listing_active()
        && let Some(container) = dom::html_element_by_id(LISTING_CONTAINER_ID)
    {
        let config = Arc::new(config.clone());
        let cart = cart.clone();

        mount_to(container, move || {
            view! {
                <listing::ProductListing
                    catalog=catalog
                    config=config
                    currency=currency
                    cart=cart
                />
            }
        })
        .forget();
    }

    if page.detail_active() {
        detail::show_product_details(
            catalog,
            page.product_id.clone().unwrap_or_default(),
            currency,
            cart.clone(),
        );
    }

    if page.cart_active()
        && let (Some(items), Some(subtotal), Some(total)) = (
            dom::html_element_by_id(CART_ITEMS_ID),
            dom::html_element_by_id(CART_SUBTOTAL_ID),
            dom::html_element_by_id(CART_TOTAL_ID),
        )
    {
        cart_page::mount_cart_page(
            cart_page::CartTargets {
                items,
                subtotal,
                total,
            },
            cart.clone(),
            config.discount_rate,
            currency,
        );
    }

    if page.needs_catalog() {
        load_catalog(&config, catalog);
    }
}
