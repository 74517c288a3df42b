//! The access decision.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::DEFAULT_ADD_TO_CART_MESSAGE;

/// Outcome of evaluating the access rule for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub allowed: bool,
    /// Populated when denied. Carries the default template; callers holding
    /// the product may substitute a customized message via `with_reason`.
    pub reason: Option<String>,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }

    /// Replace the denial reason (message customization extension point).
    /// No-op on an allowing decision.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        if !self.allowed {
            self.reason = Some(reason.into());
        }
        self
    }

    pub fn denied(&self) -> bool {
        !self.allowed
    }
}

/// The only error the policy layer produces: a flagged product reached by an
/// unauthenticated caller. The message is user-facing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AccessDenied {
    pub message: String,
}

impl AccessDenied {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<Decision> for Result<(), AccessDenied> {
    fn from(decision: Decision) -> Self {
        if decision.allowed {
            Ok(())
        } else {
            Err(AccessDenied::new(
                decision
                    .reason
                    .unwrap_or_else(|| DEFAULT_ADD_TO_CART_MESSAGE.to_string()),
            ))
        }
    }
}

/// Decide whether a purchase action on a product should proceed.
///
/// `allowed = !(product_flag && !is_authenticated)` — the only denying
/// combination is a flagged product and an unauthenticated caller.
///
/// - No IO
/// - No panics
/// - No side effects (pure function)
pub fn evaluate(product_flag: bool, is_authenticated: bool) -> Decision {
    if product_flag && !is_authenticated {
        Decision::deny(DEFAULT_ADD_TO_CART_MESSAGE)
    } else {
        Decision::allow()
    }
}
