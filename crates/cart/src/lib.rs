//! `cartlock-cart` — cart model and the two purchase enforcement points.
//!
//! Enforcement Point A guards add-to-cart: the rule is evaluated before the
//! cart is mutated, so a denied attempt leaves the cart untouched.
//! Enforcement Point B validates the whole cart before checkout, reporting
//! the first violation as a user-visible notice.

pub mod cart;
pub mod enforcement;
pub mod notice;

pub use cart::{Cart, CartItem, CartProvider};
pub use enforcement::{AddToCartRequest, check_cart_items, guarded_add_to_cart};
pub use notice::{CollectedNotices, Notice, NoticeLevel, NoticeSink};
