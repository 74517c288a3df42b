//! Submitted product-edit form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The require-login portion of a submitted product edit form.
///
/// Checkbox semantics: an unchecked box is simply absent from the
/// submission. Variation entries are keyed by position within the parent's
/// variation list, matching the rendered `_require_login[index]` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    require_login: Option<String>,
    variation_require_login: BTreeMap<usize, String>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the simple-product checkbox as checked.
    pub fn with_product_checked(mut self) -> Self {
        self.require_login = Some(crate::save::CHECKED_VALUE.to_string());
        self
    }

    /// Record a raw submitted value for the simple-product field.
    pub fn with_product_value(mut self, value: impl Into<String>) -> Self {
        self.require_login = Some(value.into());
        self
    }

    /// Record the checkbox for the variation at `index` as checked.
    pub fn with_variation_checked(mut self, index: usize) -> Self {
        self.variation_require_login
            .insert(index, crate::save::CHECKED_VALUE.to_string());
        self
    }

    /// Submitted value for the simple-product field, if any.
    pub fn product_value(&self) -> Option<&str> {
        self.require_login.as_deref()
    }

    /// Submitted value for the variation at `index`, if any.
    pub fn variation_value(&self, index: usize) -> Option<&str> {
        self.variation_require_login.get(&index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_boxes_are_absent() {
        let form = ProductForm::new();
        assert_eq!(form.product_value(), None);
        assert_eq!(form.variation_value(0), None);
    }

    #[test]
    fn variation_values_are_positional() {
        let form = ProductForm::new().with_variation_checked(1);
        assert_eq!(form.variation_value(0), None);
        assert_eq!(form.variation_value(1), Some("yes"));
    }
}
