//! Table rendering

use storefront::{catalog::Catalog, views::cart_page::CartPageModel};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

/// Catalog as a table: id, name, brand, price and rating.
pub fn catalog_table(catalog: &Catalog) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Product", "Brand", "Price", "Rating"]);

    for product in &catalog.products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.brand.clone(),
            product.price.clone(),
            product.rating.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..5), Alignment::right());

    table.to_string()
}

/// Cart lines as a table followed by the totals.
pub fn cart_table(page: &CartPageModel) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Product", "Unit Price", "Qty", "Line Total"]);

    for row in &page.rows {
        builder.push_record([
            row.id.to_string(),
            row.name.clone(),
            row.unit_price.clone(),
            row.quantity.to_string(),
            row.line_total.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    format!(
        "{table}\n Subtotal: {}\n Discount: {}\n Total:    {}",
        page.subtotal, page.discount, page.total
    )
}
