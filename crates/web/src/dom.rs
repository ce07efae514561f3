//! Page lookups

use storefront::{
    config::StorefrontConfig,
    views::page::{
        CART_ITEMS_ID, CART_SUBTOTAL_ID, CART_TOTAL_ID, DETAIL_CONTAINER_ID,
        LISTING_CONTAINER_ID, PRODUCT_ID_PARAM, PageContainers,
    },
};
use tracing::warn;

/// Element carrying an optional JSON configuration document.
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

/// Parse the page's configuration document, falling back to defaults.
pub fn config_or_default(document: Option<&str>) -> StorefrontConfig {
    let Some(json) = document.map(str::trim).filter(|json| !json.is_empty()) else {
        return StorefrontConfig::default();
    };

    StorefrontConfig::from_json(json).unwrap_or_else(|error| {
        warn!(%error, "ignoring page configuration");

        StorefrontConfig::default()
    })
}

/// Configuration declared by the current page.
pub fn page_config() -> StorefrontConfig {
    let document = html_element_by_id(CONFIG_ELEMENT_ID).and_then(|element| element.text_content());

    config_or_default(document.as_deref())
}

/// Which storefront containers the current page carries.
pub fn page_containers() -> PageContainers {
    let present = |id: &str| html_element_by_id(id).is_some();

    PageContainers {
        listing: present(LISTING_CONTAINER_ID),
        detail: present(DETAIL_CONTAINER_ID),
        product_id: query_param(PRODUCT_ID_PARAM),
        cart_items: present(CART_ITEMS_ID),
        cart_subtotal: present(CART_SUBTOTAL_ID),
        cart_total: present(CART_TOTAL_ID),
    }
}

/// The current document.
#[cfg(target_arch = "wasm32")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// First element matching a CSS selector.
#[cfg(target_arch = "wasm32")]
pub fn query(document: &web_sys::Document, selector: &str) -> Option<web_sys::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Element with the given id, if the page has one.
#[cfg(target_arch = "wasm32")]
pub fn html_element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Element with the given id, if the page has one.
#[cfg(not(target_arch = "wasm32"))]
pub fn html_element_by_id(_id: &str) -> Option<web_sys::HtmlElement> {
    None
}

#[cfg(target_arch = "wasm32")]
fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;

    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

#[cfg(not(target_arch = "wasm32"))]
fn query_param(_name: &str) -> Option<String> {
    None
}

/// Address of the current page.
#[cfg(target_arch = "wasm32")]
pub fn page_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// Address of the current page.
#[cfg(not(target_arch = "wasm32"))]
pub fn page_url() -> Option<String> {
    None
}

/// Show a blocking message.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window()
        && let Err(error) = window.alert_with_message(message)
    {
        warn!(error = %js_value_message(&error, "alert failed"), "could not show message");
    }
}

/// Show a blocking message.
#[cfg(not(target_arch = "wasm32"))]
pub fn alert(_message: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn js_value_message(error: &wasm_bindgen::JsValue, fallback: &str) -> String {
    error.as_string().unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_is_default() {
        assert_eq!(config_or_default(None), StorefrontConfig::default());
        assert_eq!(config_or_default(Some("  \n")), StorefrontConfig::default());
    }

    #[test]
    fn document_overrides_fields() {
        let config = config_or_default(Some(r#"{"confirm_on_add": false}"#));

        assert!(!config.confirm_on_add);
        assert_eq!(config.storage_key, "cart");
    }

    #[test]
    fn broken_document_is_ignored() {
        assert_eq!(
            config_or_default(Some("{not json")),
            StorefrontConfig::default()
        );
    }
}
