//! Account ledger — the source of truth for points balances.
//!
//! All mutations are atomic read-modify-write on a single account record:
//! either the full operation succeeds or the balance is unchanged. There
//! is deliberately no cross-account conservation invariant — redemptions
//! debit without a matching credit and acceptance rewards credit without
//! a matching debit. That asymmetry is the platform's reward policy.

use std::collections::HashMap;

use chrono::Utc;
use rewear_types::{Email, PointsPolicy, Result, RewearError, UserAccount};

/// Owns every account record and its points balance.
///
/// Sessions and presentation layers must read through this ledger on
/// every request rather than caching balances — it is the only component
/// allowed to mutate points.
pub struct AccountLedger {
    accounts: HashMap<Email, UserAccount>,
    policy: PointsPolicy,
}

impl AccountLedger {
    /// Create an empty ledger with the default points policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(PointsPolicy::default())
    }

    /// Create an empty ledger with a custom points policy.
    #[must_use]
    pub fn with_policy(policy: PointsPolicy) -> Self {
        Self {
            accounts: HashMap::new(),
            policy,
        }
    }

    /// Open an account at signup, seeded with the starting balance.
    ///
    /// # Errors
    /// Returns `DuplicateEmail` if the email is already registered.
    pub fn open_account(&mut self, email: impl Into<Email>, is_admin: bool) -> Result<&UserAccount> {
        let email = email.into();
        if self.accounts.contains_key(&email) {
            return Err(RewearError::DuplicateEmail(email));
        }
        let account = UserAccount::new(email.clone(), is_admin, self.policy.starting_balance);
        self.accounts.insert(email.clone(), account);
        Ok(&self.accounts[&email])
    }

    /// Look up an account (profile read model).
    ///
    /// # Errors
    /// Returns `UserNotFound` if absent.
    pub fn account(&self, email: &str) -> Result<&UserAccount> {
        self.accounts
            .get(email)
            .ok_or_else(|| RewearError::UserNotFound(email.to_string()))
    }

    /// Current points balance for an account.
    ///
    /// # Errors
    /// Returns `UserNotFound` if absent.
    pub fn balance(&self, email: &str) -> Result<u32> {
        self.account(email).map(|acct| acct.points)
    }

    /// Whether an account exists for this email.
    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.accounts.contains_key(email)
    }

    /// Remove points from an account. Returns the new balance.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount` is zero
    /// - `UserNotFound` if absent
    /// - `InsufficientPoints` if the balance cannot cover the debit; the
    ///   balance is unchanged
    pub fn debit(&mut self, email: &str, amount: u32) -> Result<u32> {
        if amount == 0 {
            return Err(RewearError::InvalidAmount);
        }
        let account = self
            .accounts
            .get_mut(email)
            .ok_or_else(|| RewearError::UserNotFound(email.to_string()))?;

        if account.points < amount {
            return Err(RewearError::InsufficientPoints {
                needed: amount,
                available: account.points,
            });
        }

        account.points -= amount;
        account.updated_at = Utc::now();
        Ok(account.points)
    }

    /// Add points to an account. Returns the new balance. No upper bound.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount` is zero
    /// - `UserNotFound` if absent
    pub fn credit(&mut self, email: &str, amount: u32) -> Result<u32> {
        if amount == 0 {
            return Err(RewearError::InvalidAmount);
        }
        let account = self
            .accounts
            .get_mut(email)
            .ok_or_else(|| RewearError::UserNotFound(email.to_string()))?;

        account.points += amount;
        account.updated_at = Utc::now();
        Ok(account.points)
    }

    /// The points policy this ledger applies.
    #[must_use]
    pub fn policy(&self) -> PointsPolicy {
        self.policy
    }
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::new()
    }
}
