//! The "require login" flag and its storage representation.

use serde::{Deserialize, Serialize};

/// Storage key under which the flag is persisted on a catalog record.
pub const REQUIRE_LOGIN_KEY: &str = "_require_login";

/// Canonical truthy marker. Any other stored value (including the empty
/// string or absence) is falsy.
pub const REQUIRE_LOGIN_YES: &str = "yes";

/// Collapsed boolean view of the stored flag.
///
/// The flag is three-state at the storage layer (unset / `"yes"` / any other
/// string); this type collapses it to a strict bool. An absent value behaves
/// identically to an explicitly falsy one.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequireLoginFlag(bool);

impl RequireLoginFlag {
    /// Collapse a stored value: true iff it equals the canonical marker.
    pub fn from_stored(value: Option<&str>) -> Self {
        Self(value == Some(REQUIRE_LOGIN_YES))
    }

    pub fn required(self) -> bool {
        self.0
    }

    /// The value to persist for this flag: the canonical marker when set,
    /// the empty string (falsy) otherwise.
    pub fn as_stored(self) -> &'static str {
        if self.0 { REQUIRE_LOGIN_YES } else { "" }
    }
}

impl From<bool> for RequireLoginFlag {
    fn from(required: bool) -> Self {
        Self(required)
    }
}
