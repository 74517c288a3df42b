//! Flag storage boundary.

use std::collections::HashMap;
use std::sync::Mutex;

use cartlock_core::ProductId;

use crate::flag::RequireLoginFlag;

/// Get/set the stored flag value keyed by product-or-variation id.
///
/// In production this is backed by the host's persistence layer, which owns
/// its own consistency guarantees; the trait deliberately exposes the raw
/// string value so the storage layer stays three-state (unset / `"yes"` /
/// other).
pub trait FlagStore {
    fn get_flag(&self, id: ProductId) -> Option<String>;

    fn set_flag(&self, id: ProductId, value: &str);

    /// Collapsed boolean view of the stored flag for `id`.
    fn require_login(&self, id: ProductId) -> RequireLoginFlag {
        RequireLoginFlag::from_stored(self.get_flag(id).as_deref())
    }
}

/// In-memory flag store for tests/dev.
///
/// - No IO / no async
/// - A poisoned lock degrades (reads see no value, writes are dropped)
///   rather than panicking
#[derive(Debug, Default)]
pub struct InMemoryFlagStore {
    flags: Mutex<HashMap<ProductId, String>>,
}

impl InMemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for InMemoryFlagStore {
    fn get_flag(&self, id: ProductId) -> Option<String> {
        self.flags
            .lock()
            .ok()
            .and_then(|flags| flags.get(&id).cloned())
    }

    fn set_flag(&self, id: ProductId, value: &str) {
        tracing::debug!(product_id = %id, value, "flag write");

        if let Ok(mut flags) = self.flags.lock() {
            flags.insert(id, value.to_string());
        }
    }
}
