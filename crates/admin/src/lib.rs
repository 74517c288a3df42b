//! `cartlock-admin` — flag editors for the product edit form.
//!
//! Field descriptors the host admin UI renders, the submitted-form model,
//! and the save handler that writes the flag back through the store.

pub mod field;
pub mod form;
pub mod save;

pub use field::{CheckboxField, VariationCheckboxField, product_options_field, variation_options_field};
pub use form::ProductForm;
pub use save::{SaveTarget, save_require_login};
