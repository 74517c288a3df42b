//! The two enforcement points of the access-gating rule.

use serde::{Deserialize, Serialize};

use cartlock_auth::IdentityProvider;
use cartlock_catalog::{FlagStore, Product};
use cartlock_core::{LineKey, ProductId};
use cartlock_policy::{AccessDenied, MessageFilters, evaluate};

use crate::cart::{Cart, CartProvider};
use crate::notice::{Notice, NoticeSink};

/// An add-to-cart attempt as the host hook delivers it.
///
/// `quantity` is carried through to the cart line but plays no part in the
/// access decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub variation_id: Option<ProductId>,
    pub quantity: u32,
}

impl AddToCartRequest {
    /// The record whose flag governs this attempt: the variation when one is
    /// selected, the base product otherwise.
    pub fn effective_id(&self) -> ProductId {
        self.variation_id.unwrap_or(self.product_id)
    }
}

/// Enforcement Point A: add-to-cart interception.
///
/// Fetches the flag for the effective record, evaluates the rule, and only
/// mutates the cart on an allowing decision. A denied attempt returns the
/// user-facing message and leaves the cart untouched.
pub fn guarded_add_to_cart<S, I>(
    cart: &mut Cart,
    product: Product,
    quantity: u32,
    flags: &S,
    identity: &I,
    filters: &MessageFilters,
) -> Result<LineKey, AccessDenied>
where
    S: FlagStore + ?Sized,
    I: IdentityProvider + ?Sized,
{
    let flag = flags.require_login(product.id_typed());
    let decision = evaluate(flag.required(), identity.is_authenticated());

    if decision.denied() {
        tracing::warn!(product_id = %product.id_typed(), "add-to-cart denied: login required");
        return Err(AccessDenied::new(filters.add_to_cart_message(&product)));
    }

    Ok(cart.add(product, quantity))
}

/// Enforcement Point B: cart validation pass.
///
/// Walks the line items in iteration order; on the first denial, emits one
/// error notice and fails the whole cart. Further items are not inspected,
/// so simultaneous violations surface one at a time.
pub fn check_cart_items<P, S, I>(
    cart: &P,
    flags: &S,
    identity: &I,
    filters: &MessageFilters,
    notices: &mut dyn NoticeSink,
) -> bool
where
    P: CartProvider + ?Sized,
    S: FlagStore + ?Sized,
    I: IdentityProvider + ?Sized,
{
    for (line_key, product) in cart.line_items() {
        let flag = flags.require_login(product.id_typed());
        let decision = evaluate(flag.required(), identity.is_authenticated());

        if decision.denied() {
            tracing::warn!(
                product_id = %product.id_typed(),
                line_key = %line_key,
                "cart validation failed: login required"
            );
            notices.push(Notice::error(filters.cart_message(product)));
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartlock_auth::{Anonymous, Session};
    use cartlock_catalog::{InMemoryFlagStore, REQUIRE_LOGIN_YES};
    use cartlock_core::UserId;

    use crate::notice::CollectedNotices;

    fn flagged(store: &InMemoryFlagStore, name: &str) -> Product {
        let product = Product::simple(ProductId::new(), name);
        store.set_flag(product.id_typed(), REQUIRE_LOGIN_YES);
        product
    }

    #[test]
    fn denied_add_leaves_cart_unchanged() {
        let store = InMemoryFlagStore::new();
        let product = flagged(&store, "Members Mug");
        let mut cart = Cart::new();
        let filters = MessageFilters::new();

        let err =
            guarded_add_to_cart(&mut cart, product, 1, &store, &Anonymous, &filters).unwrap_err();

        assert_eq!(err.message, "You must be logged in to purchase this product.");
        assert!(cart.is_empty());
    }

    #[test]
    fn authenticated_caller_may_add_flagged_product() {
        let store = InMemoryFlagStore::new();
        let product = flagged(&store, "Members Mug");
        let mut cart = Cart::new();
        let session = Session::logged_in(UserId::new());
        let filters = MessageFilters::new();

        guarded_add_to_cart(&mut cart, product, 2, &store, &session, &filters).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity(), 2);
    }

    #[test]
    fn unflagged_product_adds_for_anonymous_caller() {
        let store = InMemoryFlagStore::new();
        let product = Product::simple(ProductId::new(), "Plain Mug");
        let mut cart = Cart::new();
        let filters = MessageFilters::new();

        guarded_add_to_cart(&mut cart, product, 1, &store, &Anonymous, &filters).unwrap();
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn variation_flag_governs_over_unflagged_parent() {
        let store = InMemoryFlagStore::new();
        let parent = Product::simple(ProductId::new(), "T-Shirt");
        let variation =
            Product::variation_of(ProductId::new(), "T-Shirt - Large", parent.id_typed());
        store.set_flag(variation.id_typed(), REQUIRE_LOGIN_YES);

        let request = AddToCartRequest {
            product_id: parent.id_typed(),
            variation_id: Some(variation.id_typed()),
            quantity: 1,
        };
        assert_eq!(request.effective_id(), variation.id_typed());

        let mut cart = Cart::new();
        let filters = MessageFilters::new();
        let result =
            guarded_add_to_cart(&mut cart, variation, 1, &store, &Anonymous, &filters);
        assert!(result.is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn unflagged_variation_of_flagged_parent_is_allowed() {
        let store = InMemoryFlagStore::new();
        let parent = Product::simple(ProductId::new(), "T-Shirt");
        store.set_flag(parent.id_typed(), REQUIRE_LOGIN_YES);
        let variation =
            Product::variation_of(ProductId::new(), "T-Shirt - Small", parent.id_typed());

        let mut cart = Cart::new();
        let filters = MessageFilters::new();
        guarded_add_to_cart(&mut cart, variation, 1, &store, &Anonymous, &filters).unwrap();
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn effective_id_falls_back_to_base_product() {
        let product_id = ProductId::new();
        let request = AddToCartRequest {
            product_id,
            variation_id: None,
            quantity: 3,
        };
        assert_eq!(request.effective_id(), product_id);
    }

    #[test]
    fn valid_cart_passes_with_no_notices() {
        let store = InMemoryFlagStore::new();
        let mut cart = Cart::new();
        cart.add(Product::simple(ProductId::new(), "Plain Mug"), 1);
        cart.add(Product::simple(ProductId::new(), "Plain Cap"), 1);

        let filters = MessageFilters::new();
        let mut notices = CollectedNotices::new();
        let valid = check_cart_items(&cart, &store, &Anonymous, &filters, &mut notices);

        assert!(valid);
        assert!(notices.notices().is_empty());
    }

    #[test]
    fn first_violation_short_circuits_with_one_notice() {
        let store = InMemoryFlagStore::new();
        let first = flagged(&store, "Members Mug");
        let second = flagged(&store, "Members Cap");

        let mut cart = Cart::new();
        cart.add(first, 1);
        cart.add(second, 1);

        let filters = MessageFilters::new();
        let mut notices = CollectedNotices::new();
        let valid = check_cart_items(&cart, &store, &Anonymous, &filters, &mut notices);

        assert!(!valid);
        assert_eq!(notices.notices().len(), 1);
        assert!(notices.notices()[0].text.contains("\"Members Mug\""));
    }

    #[test]
    fn logged_in_caller_passes_cart_check_with_flagged_items() {
        let store = InMemoryFlagStore::new();
        let product = flagged(&store, "Members Mug");
        let mut cart = Cart::new();
        cart.add(product, 1);

        let session = Session::logged_in(UserId::new());
        let filters = MessageFilters::new();
        let mut notices = CollectedNotices::new();

        assert!(check_cart_items(&cart, &store, &session, &filters, &mut notices));
        assert!(notices.notices().is_empty());
    }

    #[test]
    fn cart_message_filter_rewrites_the_notice() {
        let store = InMemoryFlagStore::new();
        let product = flagged(&store, "Members Mug");
        let mut cart = Cart::new();
        cart.add(product, 1);

        let filters = MessageFilters::new()
            .on_cart_message(|_, product| format!("{}: members only", product.name()));
        let mut notices = CollectedNotices::new();
        check_cart_items(&cart, &store, &Anonymous, &filters, &mut notices);

        assert_eq!(notices.notices()[0].text, "Members Mug: members only");
    }
}
