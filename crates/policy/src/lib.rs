//! `cartlock-policy` — the access-gating rule.
//!
//! One rule, evaluated at the purchase enforcement points: a flagged product
//! may only be purchased by an authenticated caller. The evaluator is a pure
//! policy check, decoupled from storage and transport.

pub mod evaluate;
pub mod message;

pub use evaluate::{AccessDenied, Decision, evaluate};
pub use message::{
    DEFAULT_ADD_TO_CART_MESSAGE, MessageFilter, MessageFilters, default_cart_message,
};
