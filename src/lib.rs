//! Storefront
//!
//! Storefront is the client-side cart engine behind a static shop page: a product catalog,
//! a cart persisted in a local key-value store, and the view models the pages render from.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod discounts;
pub mod money;
pub mod prelude;
pub mod products;
pub mod storage;
pub mod views;
