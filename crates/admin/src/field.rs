//! Checkbox field descriptors for the product edit form.
//!
//! These are render-ready descriptions; the host UI owns the actual markup.

use serde::Serialize;

use cartlock_catalog::{REQUIRE_LOGIN_KEY, RequireLoginFlag};

/// Simple-product checkbox, bound to the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxField {
    pub id: &'static str,
    /// Bound value: `"yes"` when the flag is set, `"no"` otherwise.
    pub value: &'static str,
    pub wrapper_class: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Per-variation checkbox. `index` is the variation's position within its
/// parent's variation list; it only correlates the submitted field with the
/// variation id and carries no other meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariationCheckboxField {
    /// Submitted field name, e.g. `_require_login[2]`.
    pub name: String,
    pub index: usize,
    pub checked: bool,
    pub label: &'static str,
    pub tooltip: &'static str,
}

/// Descriptor for the simple-product field, pre-bound to the current flag.
pub fn product_options_field(flag: RequireLoginFlag) -> CheckboxField {
    CheckboxField {
        id: REQUIRE_LOGIN_KEY,
        value: if flag.required() { "yes" } else { "no" },
        wrapper_class: "show_if_simple",
        label: "Require login?",
        description: "Require user to be logged in to purchase",
    }
}

/// Descriptor for one variation's field, pre-bound to that variation's flag.
pub fn variation_options_field(index: usize, flag: RequireLoginFlag) -> VariationCheckboxField {
    VariationCheckboxField {
        name: format!("{REQUIRE_LOGIN_KEY}[{index}]"),
        index,
        checked: flag.required(),
        label: "Require login?",
        tooltip: "Enable this option if users are required to be logged in to purchase this product",
    }
}
