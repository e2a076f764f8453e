//! Catalog product.

use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId, ValueObject};

use crate::price::Price;

/// A catalog entry: an identifier and the price it is sold at.
///
/// The price is owned by value; products are immutable once constructed and
/// compared structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    price: Price,
}

impl Product {
    pub fn new(id: ProductId, price: Price) -> Self {
        Self { id, price }
    }

    pub fn price(&self) -> &Price {
        &self.price
    }
}

impl ValueObject for Product {}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
