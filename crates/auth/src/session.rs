//! Identity provider trait and the request-scoped session.

use serde::{Deserialize, Serialize};

use cartlock_core::UserId;

/// Is the acting caller authenticated?
///
/// Implementations answer for the current request scope only; there is no
/// notion of roles or tiers at this boundary.
pub trait IdentityProvider {
    fn is_authenticated(&self) -> bool;
}

/// Request-scoped session: authenticated iff a user identity is attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<UserId>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn logged_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<UserId> {
        self.user
    }
}

impl IdentityProvider for Session {
    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Always-unauthenticated provider (guest checkout paths, tests).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anonymous;

impl IdentityProvider for Anonymous {
    fn is_authenticated(&self) -> bool {
        false
    }
}
