//! Cart model.

use serde::{Deserialize, Serialize};

use cartlock_catalog::Product;
use cartlock_core::LineKey;

/// One cart line: the product snapshot the host keeps alongside the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    key: LineKey,
    product: Product,
    quantity: u32,
}

impl CartItem {
    pub fn key(&self) -> LineKey {
        self.key
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// The current cart: line items in insertion order.
///
/// Owned by the host in production; this model carries just enough for the
/// enforcement points and their tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item. Policy enforcement happens in
    /// [`crate::enforcement::guarded_add_to_cart`], which calls this only
    /// after an allowing decision.
    pub fn add(&mut self, product: Product, quantity: u32) -> LineKey {
        let key = LineKey::new();
        self.items.push(CartItem {
            key,
            product,
            quantity,
        });
        key
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Enumeration of the current cart's line items, in iteration order.
///
/// Implemented by [`Cart`]; hosts with their own cart type implement this to
/// plug into the validation pass.
pub trait CartProvider {
    fn line_items(&self) -> Box<dyn Iterator<Item = (LineKey, &Product)> + '_>;
}

impl CartProvider for Cart {
    fn line_items(&self) -> Box<dyn Iterator<Item = (LineKey, &Product)> + '_> {
        Box::new(self.items.iter().map(|item| (item.key, &item.product)))
    }
}
