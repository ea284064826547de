//! User account record.
//!
//! The points balance is mutated only by the Account Ledger; everything
//! else is profile data owned by the user. Accounts are never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Email, UserId};

/// A registered ReWear account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    /// Unique identity reference. Items and swaps point at this, not at `id`.
    pub email: Email,
    /// Current points balance. Non-negative by construction.
    pub points: u32,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// Create a fresh account with the given starting balance.
    #[must_use]
    pub fn new(email: impl Into<Email>, is_admin: bool, starting_balance: u32) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: email.into(),
            points: starting_balance,
            is_admin,
            created_at: now,
            updated_at: now,
        }
    }
}
