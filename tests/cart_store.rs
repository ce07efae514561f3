//! Integration tests for the persisted cart

use std::rc::Rc;

use rust_decimal::Decimal;
use rusty_money::iso::USD;
use testresult::TestResult;

use storefront::{
    cart::{Cart, CartLine, store::CartStore},
    discounts::{DiscountRate, compute_totals},
    products::ProductId,
    storage::{KeyValueStore, MemoryStore},
};

fn line(id: u64, price_cents: i64, quantity: u32) -> CartLine {
    CartLine::new(
        ProductId(id),
        format!("Product {id}"),
        Decimal::new(price_cents, 2),
        format!("img/products/f{id}.jpg"),
        quantity,
    )
}

#[test]
fn repeated_adds_merge_into_one_line() {
    let store = CartStore::with_default_key(MemoryStore::new());

    let cart = store.add_item(store.load(), line(1, 1000, 2));
    let cart = store.add_item(cart, line(1, 1000, 3));

    assert_eq!(cart.len(), 1);
    assert_eq!(store.load().get(ProductId(1)).map(|l| l.quantity), Some(5));
}

#[test]
fn non_positive_quantities_clamp_to_one() {
    let store = CartStore::with_default_key(MemoryStore::new());
    let cart = store.add_item(Cart::new(), line(1, 1000, 4));

    let cart = store.update_quantity(cart, ProductId(1), 0);
    assert_eq!(cart.get(ProductId(1)).map(|l| l.quantity), Some(1));

    let cart = store.update_quantity(cart, ProductId(1), -5);
    assert_eq!(cart.get(ProductId(1)).map(|l| l.quantity), Some(1));
}

#[test]
fn removing_unknown_id_keeps_lines_and_order() {
    let store = CartStore::with_default_key(MemoryStore::new());
    let cart = store.add_item(Cart::new(), line(2, 500, 1));
    let cart = store.add_item(cart, line(1, 1000, 1));
    let before = cart.clone();

    let cart = store.remove_item(cart, ProductId(99));

    assert_eq!(cart, before);
    assert_eq!(store.load(), before);
}

#[test]
fn totals_match_sum_of_lines() -> TestResult {
    let cart = Cart::with_lines([line(1, 1250, 2), line(2, 399, 3), line(3, 1, 7)]);
    let expected = Decimal::new(1250 * 2 + 399 * 3 + 7, 2);

    let plain = compute_totals(&cart, None, USD);
    assert_eq!(*plain.subtotal.amount(), expected);
    assert_eq!(plain.total, plain.subtotal);

    let rate = DiscountRate::new(Decimal::new(15, 2))?;
    let discounted = compute_totals(&cart, Some(rate), USD);
    assert_eq!(*discounted.discount.amount(), expected * rate.value());
    assert_eq!(
        *discounted.total.amount(),
        expected - expected * rate.value()
    );

    Ok(())
}

#[test]
fn reads_cart_written_by_the_browser_script() -> TestResult {
    let stored = r#"[{"id":2,"name":"Floral Summer Shirt","price":49.99,"image":"img/products/f2.jpg","quantity":3}]"#;
    let store = CartStore::with_default_key(MemoryStore::with_value("cart", stored));

    let cart = store.load();

    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.subtotal(), Decimal::new(14997, 2));

    store.save(&cart);
    assert_eq!(store.storage().get("cart")?.as_deref(), Some(stored));

    Ok(())
}

#[test]
fn negative_quantity_from_the_detail_page_keeps_the_cart() {
    let stored = r#"[{"id":1,"name":"Tee","price":10,"image":"1.jpg","quantity":2},{"id":2,"name":"Cap","price":5,"image":"2.jpg","quantity":-1}]"#;
    let store = CartStore::with_default_key(MemoryStore::with_value("cart", stored));

    let cart = store.load();

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.get(ProductId(2)).map(|line| line.quantity), Some(1));
}

#[test]
fn stores_sharing_a_backing_see_last_save() {
    let backing = Rc::new(MemoryStore::new());
    let first_tab = CartStore::with_default_key(Rc::clone(&backing));
    let second_tab = CartStore::with_default_key(Rc::clone(&backing));

    let stale = first_tab.load();
    second_tab.add_item(second_tab.load(), line(1, 1000, 1));
    first_tab.add_item(stale, line(2, 500, 1));

    let cart = second_tab.load();

    assert!(cart.get(ProductId(1)).is_none());
    assert!(cart.get(ProductId(2)).is_some());
}
