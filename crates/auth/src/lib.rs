//! `cartlock-auth` — identity boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage. The ambient
//! "is the current user logged in?" signal of the host becomes an injected
//! dependency so policy evaluation stays pure and unit-testable.

pub mod session;

pub use session::{Anonymous, IdentityProvider, Session};
