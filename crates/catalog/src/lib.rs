//! Catalog domain module.
//!
//! This crate contains the catalog's value objects (`Price`, `Product`) and the
//! price-list extraction, implemented purely as deterministic domain logic
//! (no IO, no storage).

pub mod extract;
pub mod price;
pub mod product;

pub use extract::{price_list, price_list_iterative};
pub use price::{DEFAULT_CURRENCY, Price};
pub use product::Product;
