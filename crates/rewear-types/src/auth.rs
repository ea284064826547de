//! Caller identity supplied by the session boundary.
//!
//! The core trusts this context completely: credential verification,
//! session cookies, and password storage all live outside the workspace.
//! Every operation that mutates shared state receives an [`AuthContext`]
//! naming the caller and whether they hold the admin capability.

use serde::{Deserialize, Serialize};

use crate::{Email, Result, RewearError};

/// The authenticated caller for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// The caller's unique email.
    pub email: Email,
    /// Whether the caller holds the admin capability.
    pub is_admin: bool,
}

impl AuthContext {
    /// Context for a regular member.
    #[must_use]
    pub fn member(email: impl Into<Email>) -> Self {
        Self {
            email: email.into(),
            is_admin: false,
        }
    }

    /// Context for an administrator.
    #[must_use]
    pub fn admin(email: impl Into<Email>) -> Self {
        Self {
            email: email.into(),
            is_admin: true,
        }
    }

    /// Guard an admin-only operation.
    ///
    /// # Errors
    /// Returns [`RewearError::AdminRequired`] for non-admin callers.
    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(RewearError::AdminRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_is_not_admin() {
        let ctx = AuthContext::member("alice@example.com");
        assert!(!ctx.is_admin);
        assert!(matches!(
            ctx.require_admin().unwrap_err(),
            RewearError::AdminRequired
        ));
    }

    #[test]
    fn admin_passes_guard() {
        let ctx = AuthContext::admin("root@rewear.io");
        assert!(ctx.require_admin().is_ok());
    }

    #[test]
    fn serde_roundtrip() {
        let ctx = AuthContext::admin("root@rewear.io");
        let json = serde_json::to_string(&ctx).unwrap();
        let back: AuthContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, back);
    }
}
