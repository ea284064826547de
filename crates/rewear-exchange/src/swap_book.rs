//! Swap book — owned storage for swap transaction records.
//!
//! Besides the records themselves, the book maintains the pending index
//! that enforces "at most one pending swap per (item, requester) pair".
//! Resolving a swap through [`SwapBook::resolve`] keeps the index in sync,
//! so a declined requester may ask again while a pending one may not.

use std::collections::{BTreeMap, HashSet};

use chrono::Utc;
use rewear_types::{Email, ItemId, Result, RewearError, Swap, SwapId, SwapStatus};

/// All swap records, keyed by [`SwapId`] (UUIDv7 — reverse key order is
/// newest-first creation order).
pub struct SwapBook {
    swaps: BTreeMap<SwapId, Swap>,
    /// (item, requester) pairs with a swap currently PENDING.
    pending: HashSet<(ItemId, Email)>,
}

impl SwapBook {
    /// Create an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self {
            swaps: BTreeMap::new(),
            pending: HashSet::new(),
        }
    }

    /// Whether a pending swap exists for this (item, requester) pair.
    #[must_use]
    pub fn has_pending(&self, item_id: ItemId, requester_email: &str) -> bool {
        self.pending
            .contains(&(item_id, requester_email.to_string()))
    }

    /// Record a new swap.
    ///
    /// # Errors
    /// Returns `DuplicateRequest` when inserting a pending swap for an
    /// (item, requester) pair that already has one.
    pub fn insert(&mut self, swap: Swap) -> Result<&Swap> {
        if swap.status == SwapStatus::Pending {
            let key = (swap.item_id, swap.requester_email.clone());
            if !self.pending.insert(key) {
                return Err(RewearError::DuplicateRequest);
            }
        }
        let id = swap.id;
        self.swaps.insert(id, swap);
        Ok(&self.swaps[&id])
    }

    /// Look up a swap by id.
    ///
    /// # Errors
    /// Returns `SwapNotFound` if absent.
    pub fn get(&self, id: SwapId) -> Result<&Swap> {
        self.swaps.get(&id).ok_or(RewearError::SwapNotFound(id))
    }

    /// Resolve a pending swap to a terminal state and release its slot in
    /// the pending index.
    ///
    /// # Errors
    /// - `SwapNotFound` if absent
    /// - `SwapNotPending` if the swap is already terminal
    pub fn resolve(&mut self, id: SwapId, target: SwapStatus) -> Result<&Swap> {
        let swap = self.swaps.get_mut(&id).ok_or(RewearError::SwapNotFound(id))?;
        if !swap.status.can_transition_to(target) {
            return Err(RewearError::SwapNotPending { actual: swap.status });
        }
        swap.status = target;
        swap.updated_at = Utc::now();
        self.pending
            .remove(&(swap.item_id, swap.requester_email.clone()));
        Ok(swap)
    }

    /// Every swap involving this email as requester or owner, newest first.
    #[must_use]
    pub fn involving(&self, email: &str) -> Vec<&Swap> {
        self.swaps
            .values()
            .rev()
            .filter(|swap| swap.involves(email))
            .collect()
    }

    /// Number of swaps recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    /// Whether the book holds no swaps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }
}

impl Default for SwapBook {
    fn default() -> Self {
        Self::new()
    }
}
