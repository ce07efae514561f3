//! Cart count badge

use leptos::{mount::mount_to, prelude::*};
use storefront::{
    cart::Cart,
    views::{badge::BadgeState, page::BADGE_ID},
};

use crate::dom;

/// Keep the navigation badge in step with the cart.
///
/// The count is rendered into the badge element and its visibility toggled after
/// every cart change. Pages without a badge element are left alone.
pub fn mount_badge(cart: RwSignal<Cart>) {
    let Some(element) = dom::html_element_by_id(BADGE_ID) else {
        return;
    };

    let styled = element.clone();
    element.set_inner_html("");

    mount_to(element, move || {
        let badge = Memo::new(move |_| cart.with(BadgeState::from_cart));

        Effect::new(move |_| set_visibility(&styled, &badge.get()));

        move || badge.get().text()
    })
    .forget();
}

#[cfg(target_arch = "wasm32")]
fn set_visibility(element: &web_sys::HtmlElement, badge: &BadgeState) {
    if let Err(error) = element.style().set_property("display", badge.display()) {
        tracing::warn!(
            error = %dom::js_value_message(&error, "style update failed"),
            "could not toggle cart badge"
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_visibility(_element: &web_sys::HtmlElement, _badge: &BadgeState) {}
