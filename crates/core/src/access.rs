//! Ownership and visibility policy.
//!
//! Two rules cover every object access in the system:
//!
//! - An object is *visible* to a caller when it is global (no owner) or
//!   owned by the caller. Invisible objects must be reported as not
//!   found, never as forbidden.
//! - An object is *writable* only by its owner. Global objects are
//!   read-only through the API; they are written solely by provisioning.
//!
//! Identity is compared by stable user id, never by reference.

use crate::types::UserId;

/// Outcome of a write-permission check against an optionally-owned object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAccess {
    /// Caller owns the object.
    Allowed,
    /// Object is global: visible to the caller but not writable.
    Forbidden,
    /// Object belongs to another user: indistinguishable from nonexistent.
    Hidden,
}

/// May `requester` read an object with the given owner?
///
/// Global objects (owner `None`) are readable by every authenticated user.
pub fn can_view(owner: Option<UserId>, requester: UserId) -> bool {
    match owner {
        None => true,
        Some(owner) => owner == requester,
    }
}

/// May `requester` mutate or delete an object with the given owner?
pub fn check_write(owner: Option<UserId>, requester: UserId) -> WriteAccess {
    match owner {
        None => WriteAccess::Forbidden,
        Some(owner) if owner == requester => WriteAccess::Allowed,
        Some(_) => WriteAccess::Hidden,
    }
}
