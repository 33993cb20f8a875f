//! Route access policy.
//!
//! Pure, stateless checks the routing shell runs on every protected
//! view transition. Two rules, evaluated strictly in order:
//! 1. No actor → `NotAuthenticated` (shell redirects to login)
//! 2. Required role set and actor's role differs → `WrongRole`
//!    (shell redirects to its unauthorized view)
//! 3. Otherwise → allowed
//!
//! The role check is exact equality; admin carries no implicit
//! superuser privilege here.

use crate::models::{Actor, UserRole};

/// Why a protected view was refused. The two variants route to
/// different shell destinations, so the distinction is part of the
/// contract, not a diagnostic nicety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Authenticated but role not permitted")]
    WrongRole,
}

/// Check whether `actor` may enter a view gated on `required`.
///
/// `required = None` means the view only needs authentication.
pub fn check(actor: Option<&Actor>, required: Option<UserRole>) -> Result<(), AccessDenied> {
    // Rule 1: authentication, strictly before any role consideration
    let actor = actor.ok_or(AccessDenied::NotAuthenticated)?;

    // Rule 2: exact role match when the view demands one
    match required {
        Some(role) if actor.role != role => Err(AccessDenied::WrongRole),
        _ => Ok(()),
    }
}

/// Boolean convenience over [`check`] for callers that do not route
/// the two failure shapes differently.
pub fn can_access(actor: Option<&Actor>, required: Option<UserRole>) -> bool {
    check(actor, required).is_ok()
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
