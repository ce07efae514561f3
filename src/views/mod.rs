//! Views
//!
//! Render models for the storefront pages. Each page builds its markup from one of
//! these, so what a page shows is decided here and the UI layer only lays it out.

pub mod badge;
pub mod cart_page;
pub mod detail;
pub mod input;
pub mod listing;
pub mod page;
