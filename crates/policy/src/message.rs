//! Denial message templates and the customization extension point.

use cartlock_catalog::Product;

/// Default denial message at the add-to-cart enforcement point.
pub const DEFAULT_ADD_TO_CART_MESSAGE: &str =
    "You must be logged in to purchase this product.";

/// Default denial message at the cart-validation enforcement point,
/// parameterized by the product display name.
pub fn default_cart_message(product_name: &str) -> String {
    format!(
        "Sorry, you must be logged in to purchase \"{product_name}\". \
         Please login or edit your cart and try again. \
         We apologize for any inconvenience caused."
    )
}

/// A message override: receives the default message and the product the
/// denial is about, returns the message to surface.
pub type MessageFilter = Box<dyn Fn(String, &Product) -> String + Send + Sync>;

/// Registered message overrides, one per enforcement point.
///
/// With no filter registered, the defaults above are used verbatim.
#[derive(Default)]
pub struct MessageFilters {
    add_to_cart: Option<MessageFilter>,
    cart_check: Option<MessageFilter>,
}

impl MessageFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_add_to_cart_message(
        mut self,
        filter: impl Fn(String, &Product) -> String + Send + Sync + 'static,
    ) -> Self {
        self.add_to_cart = Some(Box::new(filter));
        self
    }

    pub fn on_cart_message(
        mut self,
        filter: impl Fn(String, &Product) -> String + Send + Sync + 'static,
    ) -> Self {
        self.cart_check = Some(Box::new(filter));
        self
    }

    /// Effective add-to-cart denial message for `product`.
    pub fn add_to_cart_message(&self, product: &Product) -> String {
        let default = DEFAULT_ADD_TO_CART_MESSAGE.to_string();
        match &self.add_to_cart {
            Some(filter) => filter(default, product),
            None => default,
        }
    }

    /// Effective cart-validation denial message for `product`.
    pub fn cart_message(&self, product: &Product) -> String {
        let default = default_cart_message(product.name());
        match &self.cart_check {
            Some(filter) => filter(default, product),
            None => default,
        }
    }
}

impl core::fmt::Debug for MessageFilters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MessageFilters")
            .field("add_to_cart", &self.add_to_cart.is_some())
            .field("cart_check", &self.cart_check.is_some())
            .finish()
    }
}
