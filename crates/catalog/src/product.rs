//! Product records and catalog lookup.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use cartlock_core::{DomainError, DomainResult, Entity, ProductId};

/// A purchasable catalog record.
///
/// Variations are catalog records in their own right: a variation carries its
/// own `ProductId` and references its parent. Flags attached to a variation
/// are fully independent of the parent's flag (no inheritance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    parent: Option<ProductId>,
}

impl Product {
    /// A simple (non-variable) product.
    pub fn simple(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
        }
    }

    /// A variation of `parent`.
    pub fn variation_of(id: ProductId, name: impl Into<String>, parent: ProductId) -> Self {
        Self {
            id,
            name: name.into(),
            parent: Some(parent),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<ProductId> {
        self.parent
    }

    pub fn is_variation(&self) -> bool {
        self.parent.is_some()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Catalog lookup boundary (owned by the host in production).
pub trait Catalog {
    fn product(&self, id: ProductId) -> DomainResult<Product>;
}

/// In-memory catalog for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: Mutex<HashMap<ProductId, Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, product: Product) {
        if let Ok(mut products) = self.products.lock() {
            products.insert(product.id_typed(), product);
        }
    }
}

impl Catalog for InMemoryCatalog {
    fn product(&self, id: ProductId) -> DomainResult<Product> {
        self.products
            .lock()
            .ok()
            .and_then(|products| products.get(&id).cloned())
            .ok_or(DomainError::NotFound)
    }
}
