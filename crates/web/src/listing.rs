//! Featured products

use std::sync::Arc;

use leptos::prelude::*;
use rusty_money::iso::Currency;
use storefront::{
    catalog::Catalog,
    config::StorefrontConfig,
    views::listing::{ProductCard, product_cards},
};

use crate::context::CartContext;

/// Cards for every catalog product, appended once the catalog has loaded.
#[component]
pub fn ProductListing(
    catalog: RwSignal<Option<Catalog>>,
    config: Arc<StorefrontConfig>,
    currency: &'static Currency,
    cart: CartContext,
) -> impl IntoView {
    view! {
        {move || {
            let cards = catalog.with(|loaded| {
                loaded
                    .as_ref()
                    .map(|catalog| product_cards(catalog, &config, currency))
            });

            cards.map(|cards| {
                cards
                    .into_iter()
                    .map(|card| view! { <ProductCardItem card=card cart=cart.clone() /> })
                    .collect_view()
            })
        }}
    }
}

#[component]
fn ProductCardItem(card: ProductCard, cart: CartContext) -> impl IntoView {
    let ProductCard {
        id,
        href,
        image,
        brand,
        name,
        stars,
        price,
        data_price,
        add_line,
    } = card;

    let alt = name.clone();
    let data_name = name.clone();
    let data_image = image.clone();
    let disabled = add_line.is_none();

    view! {
        <div class="col-6 col-sm-6 col-md-6 col-lg-3">
            <a href=href class="product-link">
                <div class="card">
                    <img src=image class="card-img-top" alt=alt />
                    <div class="card-body">
                        <span class="brand">{brand}</span>
                        <p class="card-title">{name}</p>
                        <div class="rating">
                            {stars
                                .into_iter()
                                .map(|star| view! { <i class=star.class()></i> })
                                .collect_view()}
                        </div>
                        <span class="price">{price}</span>
                        <button
                            type="button"
                            class="add-to-cart-btn"
                            data-id=id.to_string()
                            data-name=data_name
                            data-price=data_price
                            data-image=data_image
                            disabled=disabled
                            on:click=move |ev| {
                                ev.prevent_default();
                                ev.stop_propagation();
                                if let Some(line) = add_line.clone() {
                                    cart.add(line);
                                }
                            }
                        >
                            <i class="bi bi-cart3"></i>
                        </button>
                    </div>
                </div>
            </a>
        </div>
    }
}
