//! Cart page

use leptos::{mount::mount_to, prelude::*};
use rusty_money::iso::Currency;
use storefront::{
    discounts::DiscountRate,
    views::{
        cart_page::{
            CART_IMAGE_WIDTH, CART_TABLE_COLUMNS, CartPageModel, CartRow, EMPTY_CART_MESSAGE,
        },
        input::parse_leading_int,
    },
};

use crate::context::CartContext;

/// The three cart page targets.
#[derive(Debug)]
pub struct CartTargets {
    /// Table body receiving one row per line
    pub items: web_sys::HtmlElement,

    /// Subtotal text
    pub subtotal: web_sys::HtmlElement,

    /// Grand total text
    pub total: web_sys::HtmlElement,
}

/// Render the cart table and totals, re-rendering on every cart change.
pub fn mount_cart_page(
    targets: CartTargets,
    cart: CartContext,
    discount: Option<DiscountRate>,
    currency: &'static Currency,
) {
    let state = cart.cart();
    let model = Memo::new(move |_| state.with(|cart| CartPageModel::build(cart, discount, currency)));

    let CartTargets {
        items,
        subtotal,
        total,
    } = targets;

    for target in [&items, &subtotal, &total] {
        target.set_inner_html("");
    }

    mount_to(items, move || view! { <CartRows model=model cart=cart /> }).forget();
    mount_to(subtotal, move || view! { {move || model.with(|page| page.subtotal.clone())} })
        .forget();
    mount_to(total, move || {
        view! { <strong>{move || model.with(|page| page.total.clone())}</strong> }
    })
    .forget();
}

#[component]
fn CartRows(model: Memo<CartPageModel>, cart: CartContext) -> impl IntoView {
    view! {
        {move || {
            let page = model.get();

            if page.is_empty() {
                view! {
                    <tr>
                        <td colspan=CART_TABLE_COLUMNS.to_string()>{EMPTY_CART_MESSAGE}</td>
                    </tr>
                }
                .into_any()
            } else {
                page.rows
                    .into_iter()
                    .map(|row| view! { <CartRowItem row=row cart=cart.clone() /> })
                    .collect_view()
                    .into_any()
            }
        }}
    }
}

#[component]
fn CartRowItem(row: CartRow, cart: CartContext) -> impl IntoView {
    let CartRow {
        id,
        image,
        name,
        unit_price,
        quantity,
        line_total,
    } = row;

    let alt = name.clone();
    let remove_from = cart.clone();

    view! {
        <tr data-id=id.to_string()>
            <td>
                <a
                    href="#"
                    class="remove-item"
                    on:click=move |ev| {
                        ev.prevent_default();
                        remove_from.remove(id);
                    }
                >
                    <i class="bi bi-x-circle"></i>
                </a>
            </td>
            <td>
                <img src=image alt=alt width=CART_IMAGE_WIDTH />
            </td>
            <td>{name}</td>
            <td>{unit_price}</td>
            <td>
                <input
                    type="number"
                    class="quantity-input"
                    min="1"
                    data-id=id.to_string()
                    prop:value=quantity.to_string()
                    on:input=move |ev| {
                        let requested = parse_leading_int(&event_target_value(&ev)).unwrap_or(1);
                        cart.set_quantity(id, requested);
                    }
                />
            </td>
            <td>{line_total}</td>
        </tr>
    }
}
