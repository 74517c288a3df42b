//! `cartlock-plugin` — host integration surface.
//!
//! Composes the catalog, flag store and message filters behind the hook
//! callbacks a host dispatcher invokes: the two purchase enforcement points,
//! the admin field renderers and the save handler. The caller's identity is
//! request-scoped, so it is passed per call rather than owned here.

use thiserror::Error;

use cartlock_admin::{
    CheckboxField, ProductForm, SaveTarget, VariationCheckboxField, product_options_field,
    save_require_login, variation_options_field,
};
use cartlock_auth::IdentityProvider;
use cartlock_cart::{AddToCartRequest, Cart, CartProvider, NoticeSink, check_cart_items, guarded_add_to_cart};
use cartlock_catalog::{Catalog, FlagStore, Product};
use cartlock_core::ProductId;
use cartlock_policy::{AccessDenied, MessageFilters};

/// Failure of the add-to-cart hook.
///
/// `Denied` is the policy outcome and carries the user-facing message.
/// `UnknownProduct` surfaces a host bug (an id with no catalog record)
/// instead of panicking; it never occurs when the host passes ids it
/// resolved itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddToCartError {
    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// The plugin: everything the host wires into its hook system.
pub struct CartlockPlugin<C, S> {
    catalog: C,
    flags: S,
    filters: MessageFilters,
}

impl<C, S> CartlockPlugin<C, S>
where
    C: Catalog,
    S: FlagStore,
{
    pub fn new(catalog: C, flags: S) -> Self {
        Self {
            catalog,
            flags,
            filters: MessageFilters::new(),
        }
    }

    /// Override the add-to-cart denial message.
    pub fn with_add_to_cart_message(
        mut self,
        filter: impl Fn(String, &Product) -> String + Send + Sync + 'static,
    ) -> Self {
        self.filters = self.filters.on_add_to_cart_message(filter);
        self
    }

    /// Override the cart-validation denial message.
    pub fn with_cart_message(
        mut self,
        filter: impl Fn(String, &Product) -> String + Send + Sync + 'static,
    ) -> Self {
        self.filters = self.filters.on_cart_message(filter);
        self
    }

    pub fn flags(&self) -> &S {
        &self.flags
    }

    /// Hook: add-to-cart attempt. Resolves the effective record (variation
    /// over base product), runs the guard, and mutates the cart only on an
    /// allowing decision. The host aborts the action on `Err`.
    pub fn on_add_to_cart(
        &self,
        cart: &mut Cart,
        identity: &dyn IdentityProvider,
        request: AddToCartRequest,
    ) -> Result<(), AddToCartError> {
        let effective_id = request.effective_id();
        let product = self
            .catalog
            .product(effective_id)
            .map_err(|_| AddToCartError::UnknownProduct(effective_id))?;

        guarded_add_to_cart(
            cart,
            product,
            request.quantity,
            &self.flags,
            identity,
            &self.filters,
        )?;
        Ok(())
    }

    /// Hook: cart validation before checkout. Returns the cart's validity;
    /// the first violation lands in `notices`.
    pub fn on_check_cart_items(
        &self,
        cart: &dyn CartProvider,
        identity: &dyn IdentityProvider,
        notices: &mut dyn NoticeSink,
    ) -> bool {
        check_cart_items(cart, &self.flags, identity, &self.filters, notices)
    }

    /// Hook: render the simple-product options field.
    pub fn product_options(&self, product_id: ProductId) -> CheckboxField {
        product_options_field(self.flags.require_login(product_id))
    }

    /// Hook: render one variation's options field at its list position.
    pub fn variation_options(
        &self,
        variation_id: ProductId,
        index: usize,
    ) -> VariationCheckboxField {
        variation_options_field(index, self.flags.require_login(variation_id))
    }

    /// Hook: product/variation save. Writes the flag from the submitted form.
    pub fn on_save(&self, target: SaveTarget, form: &ProductForm) {
        save_require_login(&self.flags, target, form);
    }
}
