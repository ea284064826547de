//! Item registry — the source of truth for listing records.
//!
//! The registry exclusively owns item status mutation. Every transition
//! goes through [`ItemStatus::can_transition_to`], so the monotonic
//! lifecycle (pending → approved → unavailable, rejection deletes) holds
//! for every record at all times.

use std::collections::BTreeMap;

use chrono::Utc;
use rewear_types::{
    AuthContext, Category, Condition, Email, Item, ItemId, ItemStatus, ListingDraft,
    ListingLimits, Result, RewearError,
};

/// Filter for listing scans. Unset fields pass everything through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub status: Option<ItemStatus>,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    pub owner_email: Option<Email>,
}

impl ItemFilter {
    /// Match everything.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    #[must_use]
    pub fn owner(mut self, email: impl Into<Email>) -> Self {
        self.owner_email = Some(email.into());
        self
    }

    fn matches(&self, item: &Item) -> bool {
        self.status.is_none_or(|s| item.status == s)
            && self.category.is_none_or(|c| item.category == c)
            && self.condition.is_none_or(|c| item.condition == c)
            && self
                .owner_email
                .as_ref()
                .is_none_or(|e| &item.owner_email == e)
    }
}

/// Owns all listing records and their lifecycle.
///
/// Keyed by [`ItemId`] (UUIDv7), so iterating the map in reverse key
/// order yields newest-first creation order without a secondary index.
pub struct ItemRegistry {
    items: BTreeMap<ItemId, Item>,
    limits: ListingLimits,
}

impl ItemRegistry {
    /// Create an empty registry with default listing limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(ListingLimits::default())
    }

    /// Create an empty registry with custom listing limits.
    #[must_use]
    pub fn with_limits(limits: ListingLimits) -> Self {
        Self {
            items: BTreeMap::new(),
            limits,
        }
    }

    /// Create a listing from a draft.
    ///
    /// Admin callers get `APPROVED` immediately; everyone else starts
    /// `PENDING` and waits for moderation.
    ///
    /// # Errors
    /// Returns `InvalidListing` if a required attribute is blank or the
    /// draft carries more images than the configured maximum.
    pub fn create_listing(&mut self, caller: &AuthContext, draft: ListingDraft) -> Result<&Item> {
        self.validate_draft(&draft)?;

        let status = if caller.is_admin {
            ItemStatus::Approved
        } else {
            ItemStatus::Pending
        };
        let item = Item::from_draft(caller.email.clone(), draft, status);
        let id = item.id;
        self.items.insert(id, item);
        Ok(&self.items[&id])
    }

    fn validate_draft(&self, draft: &ListingDraft) -> Result<()> {
        for (field, value) in [
            ("title", &draft.title),
            ("description", &draft.description),
            ("type", &draft.item_type),
            ("size", &draft.size),
        ] {
            if value.trim().is_empty() {
                return Err(RewearError::InvalidListing {
                    reason: format!("{field} is required"),
                });
            }
        }
        if draft.images.len() > self.limits.max_images_per_item {
            return Err(RewearError::InvalidListing {
                reason: format!(
                    "At most {} images per listing (got {})",
                    self.limits.max_images_per_item,
                    draft.images.len()
                ),
            });
        }
        Ok(())
    }

    /// Scan listings matching the filter, newest first.
    #[must_use]
    pub fn list(&self, filter: &ItemFilter) -> Vec<&Item> {
        self.items
            .values()
            .rev()
            .filter(|item| filter.matches(item))
            .collect()
    }

    /// Look up a listing by id.
    ///
    /// # Errors
    /// Returns `ItemNotFound` if absent.
    pub fn get(&self, id: ItemId) -> Result<&Item> {
        self.items.get(&id).ok_or(RewearError::ItemNotFound(id))
    }

    /// Approve a pending listing. Idempotent when already approved.
    ///
    /// # Errors
    /// - `ItemNotFound` if absent
    /// - `InvalidTransition` for an unavailable listing — the lifecycle
    ///   never regresses
    pub fn approve(&mut self, id: ItemId) -> Result<&Item> {
        self.transition(id, ItemStatus::Approved)
    }

    /// Take a listing off the market. Idempotent when already unavailable.
    ///
    /// Invoked by the swap orchestrator when a redemption completes or a
    /// swap is accepted; not a public moderation action.
    ///
    /// # Errors
    /// - `ItemNotFound` if absent
    /// - `InvalidTransition` for a pending listing
    pub fn mark_unavailable(&mut self, id: ItemId) -> Result<&Item> {
        self.transition(id, ItemStatus::Unavailable)
    }

    fn transition(&mut self, id: ItemId, target: ItemStatus) -> Result<&Item> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or(RewearError::ItemNotFound(id))?;
        if !item.status.can_transition_to(target) {
            return Err(RewearError::InvalidTransition {
                from: item.status,
                to: target,
            });
        }
        if item.status != target {
            item.status = target;
            item.updated_at = Utc::now();
        }
        Ok(item)
    }

    /// Delete a listing permanently (moderation rejection).
    ///
    /// # Errors
    /// Returns `ItemNotFound` if absent.
    pub fn reject(&mut self, id: ItemId) -> Result<Item> {
        self.items.remove(&id).ok_or(RewearError::ItemNotFound(id))
    }

    /// Number of listings tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry holds no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
