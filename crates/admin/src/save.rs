//! Save handler for the require-login flag.

use serde::{Deserialize, Serialize};

use cartlock_catalog::{FlagStore, RequireLoginFlag};
use cartlock_core::ProductId;

use crate::form::ProductForm;

/// Value a checked checkbox submits.
pub const CHECKED_VALUE: &str = "yes";

/// What is being saved.
///
/// The host's save hooks identify variations positionally and whole products
/// by object; callers translate that into this explicit variant instead of
/// inspecting argument types at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveTarget {
    Product { id: ProductId },
    Variation { id: ProductId, index: usize },
}

impl SaveTarget {
    pub fn id(&self) -> ProductId {
        match *self {
            SaveTarget::Product { id } => id,
            SaveTarget::Variation { id, .. } => id,
        }
    }
}

/// Write the flag for `target` from the submitted form.
///
/// Both branches normalize the submitted value to the canonical marker or
/// the empty string before writing; a raw non-canonical submission is never
/// persisted.
pub fn save_require_login<S>(store: &S, target: SaveTarget, form: &ProductForm)
where
    S: FlagStore + ?Sized,
{
    let submitted = match target {
        SaveTarget::Variation { index, .. } => form.variation_value(index),
        SaveTarget::Product { .. } => form.product_value(),
    };

    let flag = RequireLoginFlag::from_stored(submitted);
    store.set_flag(target.id(), flag.as_stored());
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartlock_catalog::{InMemoryFlagStore, REQUIRE_LOGIN_YES};

    #[test]
    fn checked_product_round_trips_truthy() {
        let store = InMemoryFlagStore::new();
        let id = ProductId::new();
        let form = ProductForm::new().with_product_checked();

        save_require_login(&store, SaveTarget::Product { id }, &form);

        assert_eq!(store.get_flag(id).as_deref(), Some(REQUIRE_LOGIN_YES));
        assert!(store.require_login(id).required());
    }

    #[test]
    fn unchecked_product_round_trips_falsy() {
        let store = InMemoryFlagStore::new();
        let id = ProductId::new();
        store.set_flag(id, REQUIRE_LOGIN_YES);

        save_require_login(&store, SaveTarget::Product { id }, &ProductForm::new());

        assert_eq!(store.get_flag(id).as_deref(), Some(""));
        assert!(!store.require_login(id).required());
    }

    #[test]
    fn variation_save_reads_its_own_index_only() {
        let store = InMemoryFlagStore::new();
        let first = ProductId::new();
        let second = ProductId::new();
        let form = ProductForm::new().with_variation_checked(1);

        save_require_login(&store, SaveTarget::Variation { id: first, index: 0 }, &form);
        save_require_login(&store, SaveTarget::Variation { id: second, index: 1 }, &form);

        assert!(!store.require_login(first).required());
        assert!(store.require_login(second).required());
    }

    #[test]
    fn non_canonical_submission_is_normalized_before_writing() {
        let store = InMemoryFlagStore::new();
        let id = ProductId::new();
        let form = ProductForm::new().with_product_value("on");

        save_require_login(&store, SaveTarget::Product { id }, &form);

        // The raw "on" is never persisted; it collapses to the falsy marker.
        assert_eq!(store.get_flag(id).as_deref(), Some(""));
    }

    #[test]
    fn variation_flag_stays_independent_of_parent_save() {
        let store = InMemoryFlagStore::new();
        let parent = ProductId::new();
        let variation = ProductId::new();

        let form = ProductForm::new().with_product_checked();
        save_require_login(&store, SaveTarget::Product { id: parent }, &form);

        assert!(store.require_login(parent).required());
        assert!(!store.require_login(variation).required());
    }
}
