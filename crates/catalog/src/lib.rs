//! Catalog domain module.
//!
//! This crate models the slice of the host catalog the access policy needs:
//! products, their variations, and the per-record "require login" flag.
//! No IO, no HTTP; the in-memory store is the reference implementation used
//! by tests and embedding hosts without their own persistence.

pub mod flag;
pub mod product;
pub mod store;

pub use flag::{REQUIRE_LOGIN_KEY, REQUIRE_LOGIN_YES, RequireLoginFlag};
pub use product::{Catalog, InMemoryCatalog, Product};
pub use store::{FlagStore, InMemoryFlagStore};
