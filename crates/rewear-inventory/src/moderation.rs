//! Moderation gate — admin-only transitions on the item registry.
//!
//! A thin authorization wrapper with no state of its own: the caller's
//! admin capability is checked, then the registry does the work.

use rewear_types::{AuthContext, Item, ItemId, Result};

use crate::item_registry::{ItemFilter, ItemRegistry};

/// Approve a pending listing, making it visible and tradeable.
///
/// # Errors
/// - `AdminRequired` for non-admin callers
/// - `ItemNotFound` / `InvalidTransition` from the registry
pub fn approve_item<'a>(
    registry: &'a mut ItemRegistry,
    caller: &AuthContext,
    id: ItemId,
) -> Result<&'a Item> {
    caller.require_admin()?;
    let item = registry.approve(id)?;
    tracing::info!(item_id = %id, moderator = %caller.email, "listing approved");
    Ok(item)
}

/// Reject a listing, deleting the record permanently.
///
/// # Errors
/// - `AdminRequired` for non-admin callers
/// - `ItemNotFound` from the registry
pub fn reject_item(registry: &mut ItemRegistry, caller: &AuthContext, id: ItemId) -> Result<Item> {
    caller.require_admin()?;
    let item = registry.reject(id)?;
    tracing::info!(item_id = %id, moderator = %caller.email, "listing rejected and deleted");
    Ok(item)
}

/// The full review queue: every listing regardless of status, newest first.
///
/// # Errors
/// Returns `AdminRequired` for non-admin callers.
pub fn review_queue<'a>(registry: &'a ItemRegistry, caller: &AuthContext) -> Result<Vec<&'a Item>> {
    caller.require_admin()?;
    Ok(registry.list(&ItemFilter::any()))
}
