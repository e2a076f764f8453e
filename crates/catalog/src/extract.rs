//! Price-list extraction: products in, their prices out, order preserved.

use crate::price::Price;
use crate::product::Product;

/// Extract the price of every product, in input order.
///
/// Output length always equals input length; an empty slice yields an empty
/// vector. This is a pure function with no failure modes.
pub fn price_list(products: &[Product]) -> Vec<Price> {
    products.iter().map(|product| product.price().clone()).collect()
}

/// Accumulation-style equivalent of [`price_list`].
///
/// Observably identical for every input; retained so the two styles can be
/// compared side by side.
pub fn price_list_iterative(products: &[Product]) -> Vec<Price> {
    let mut prices = Vec::with_capacity(products.len());
    for product in products {
        prices.push(product.price().clone());
    }
    prices
}
