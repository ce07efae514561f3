//! Single product
//!
//! Fills the product page's own markup once the catalog arrives. Only a missing
//! product replaces the container's contents.

use leptos::prelude::*;
use rusty_money::iso::Currency;
use storefront::{
    catalog::Catalog,
    views::detail::{DetailView, ProductDetail},
};

use crate::context::CartContext;

/// Resolve the product named by the page's `id` parameter and show it.
pub fn show_product_details(
    catalog: RwSignal<Option<Catalog>>,
    raw_id: String,
    currency: &'static Currency,
    cart: CartContext,
) {
    Effect::new(move |_| {
        let resolved = catalog.with(|loaded| {
            loaded
                .as_ref()
                .map(|catalog| DetailView::resolve(catalog, &raw_id, currency))
        });

        match resolved {
            None => {}
            Some(DetailView::NotFound) => show_not_found(),
            Some(DetailView::Found(detail)) => fill_page(detail, cart.clone()),
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn show_not_found() {
    use storefront::views::{detail::NOT_FOUND_MESSAGE, page::DETAIL_CONTAINER_ID};
    use tracing::warn;

    use crate::dom;

    let (Some(document), Some(container)) = (
        dom::document(),
        dom::html_element_by_id(DETAIL_CONTAINER_ID),
    ) else {
        return;
    };

    let message = match document.create_element("p") {
        Ok(message) => message,
        Err(error) => {
            warn!(error = %dom::js_value_message(&error, "create failed"), "could not show message");
            return;
        }
    };
    message.set_text_content(Some(NOT_FOUND_MESSAGE));

    container.set_inner_html("");

    if let Err(error) = container.append_child(&message) {
        warn!(error = %dom::js_value_message(&error, "append failed"), "could not show message");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn show_not_found() {}

#[cfg(target_arch = "wasm32")]
fn fill_page(detail: ProductDetail, cart: CartContext) {
    use storefront::views::detail::{ADD_BUTTON_SELECTOR, DetailFill, QUANTITY_SELECTOR};
    use tracing::warn;
    use wasm_bindgen::{JsCast, closure::Closure};

    use crate::dom;

    let Some(document) = dom::document() else {
        return;
    };

    for fill in detail.fills() {
        match fill {
            DetailFill::Source { selector, value } => {
                let Some(element) = dom::query(&document, selector) else {
                    warn!(selector, "product page field missing");
                    continue;
                };

                if let Err(error) = element.set_attribute("src", value) {
                    warn!(
                        selector,
                        error = %dom::js_value_message(&error, "set src failed"),
                        "could not fill product page"
                    );
                }
            }
            DetailFill::Text { selector, value } => match dom::query(&document, selector) {
                Some(element) => element.set_text_content(Some(value)),
                None => warn!(selector, "product page field missing"),
            },
        }
    }

    let Some(button) = dom::query(&document, ADD_BUTTON_SELECTOR) else {
        warn!(selector = ADD_BUTTON_SELECTOR, "product page has no add-to-cart control");
        return;
    };

    let on_click = Closure::<dyn FnMut()>::new(move || {
        let quantity = dom::query(&document, QUANTITY_SELECTOR)
            .and_then(|field| field.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|field| field.value())
            .unwrap_or_default();

        match detail.line_for(&quantity) {
            Ok(line) => cart.add(line),
            Err(error) => warn!(id = %detail.id(), %error, "cannot add unpriceable product"),
        }
    });

    if let Err(error) =
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
    {
        warn!(
            error = %dom::js_value_message(&error, "listen failed"),
            "could not wire add-to-cart control"
        );
    }

    on_click.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn fill_page(_detail: ProductDetail, _cart: CartContext) {}
