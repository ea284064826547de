//! Swap orchestrator — coordinates transactions across the item registry,
//! the account ledger, and the swap book.
//!
//! Compound operations (points redemption, swap acceptance) mutate two or
//! three components and must appear atomic to external observers. The
//! orchestrator achieves this by running every fallible precondition
//! before the first mutation; the single mutation that can still fail
//! after another has landed is compensated in place.
//!
//! The points economy is asymmetric on purpose: a redemption debits the
//! requester without crediting the owner, an acceptance credits the owner
//! without debiting anyone, and a decline refunds nothing. Accepting one
//! of several pending requests on an item leaves the others pending.

use rewear_inventory::ItemRegistry;
use rewear_types::{
    AuthContext, Email, Item, ItemId, ItemStatus, PointsPolicy, Result, RewearError, Swap, SwapId,
    SwapStatus,
};

use crate::account_ledger::AccountLedger;
use crate::swap_book::SwapBook;

/// Result of a successful points redemption.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Redemption {
    pub swap: Swap,
    pub new_balance: u32,
}

/// A swap joined with a snapshot of its referenced item, as consumed by
/// the presentation layer. The snapshot is `None` when the item was
/// rejected after the swap was recorded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SwapView {
    pub swap: Swap,
    pub item: Option<Item>,
}

/// Coordinates swap requests and redemptions. Holds the swap book; the
/// registry and ledger are injected per operation so each compound
/// sequence runs under exclusive borrows of everything it touches.
pub struct SwapOrchestrator {
    book: SwapBook,
    policy: PointsPolicy,
}

impl SwapOrchestrator {
    /// Create an orchestrator with the default points policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(PointsPolicy::default())
    }

    /// Create an orchestrator with a custom points policy.
    #[must_use]
    pub fn with_policy(policy: PointsPolicy) -> Self {
        Self {
            book: SwapBook::new(),
            policy,
        }
    }

    /// Request a direct garment exchange.
    ///
    /// Preconditions, in order, each a distinct failure:
    /// 1. the item exists and is approved — `InvalidItem`
    /// 2. the caller is not the owner — `SelfSwapForbidden`
    /// 3. no pending request for this (item, caller) — `DuplicateRequest`
    pub fn request_swap(
        &mut self,
        registry: &ItemRegistry,
        caller: &AuthContext,
        item_id: ItemId,
    ) -> Result<Swap> {
        let owner = self.tradeable_counterparty(registry, caller, item_id)?;
        if self.book.has_pending(item_id, &caller.email) {
            return Err(RewearError::DuplicateRequest);
        }

        let swap = Swap::exchange_request(item_id, owner, caller.email.clone());
        let swap = self.book.insert(swap)?.clone();
        tracing::debug!(swap_id = %swap.id, item_id = %item_id, requester = %caller.email, "swap requested");
        Ok(swap)
    }

    /// Redeem an item with points at the fixed platform price.
    ///
    /// Effects, atomically: debit the caller, record a completed
    /// points-type swap, take the item off the market.
    pub fn redeem_with_points(
        &mut self,
        registry: &mut ItemRegistry,
        ledger: &mut AccountLedger,
        caller: &AuthContext,
        item_id: ItemId,
    ) -> Result<Redemption> {
        let owner = self.tradeable_counterparty(registry, caller, item_id)?;
        let price = self.policy.redemption_price;

        // Debit first: the only check left (balance) lives inside it, and
        // it mutates nothing on failure.
        let new_balance = ledger.debit(&caller.email, price)?;

        if let Err(err) = registry.mark_unavailable(item_id) {
            // The item vanished between the check and the transition.
            // Undo the debit so no partial state is visible.
            tracing::warn!(item_id = %item_id, %err, "redemption aborted, refunding debit");
            ledger.credit(&caller.email, price)?;
            return Err(err);
        }

        let swap = Swap::redemption(item_id, owner, caller.email.clone(), price);
        let swap = self.book.insert(swap)?.clone();
        tracing::info!(
            swap_id = %swap.id,
            item_id = %item_id,
            requester = %caller.email,
            points = price,
            "redemption completed"
        );
        Ok(Redemption { swap, new_balance })
    }

    /// Accept a pending swap request. Owner-only.
    ///
    /// Effects, atomically: credit the owner the acceptance reward, take
    /// the item off the market, mark the swap accepted. Other pending
    /// requests on the same item are left untouched.
    pub fn accept_swap(
        &mut self,
        registry: &mut ItemRegistry,
        ledger: &mut AccountLedger,
        caller: &AuthContext,
        swap_id: SwapId,
    ) -> Result<Swap> {
        let (item_id, owner) = self.resolvable_by(caller, swap_id)?;

        // The item must still exist; a redemption may already have made it
        // unavailable, which the transition treats as idempotent.
        let item = registry
            .get(item_id)
            .map_err(|_| RewearError::InvalidItem(item_id))?;
        if !item.status.can_transition_to(ItemStatus::Unavailable) {
            return Err(RewearError::InvalidItem(item_id));
        }

        let reward = self.policy.acceptance_reward;
        ledger.credit(&owner, reward)?;

        if let Err(err) = registry.mark_unavailable(item_id) {
            tracing::warn!(swap_id = %swap_id, %err, "acceptance aborted, reversing reward");
            ledger.debit(&owner, reward)?;
            return Err(err);
        }

        let swap = self.book.resolve(swap_id, SwapStatus::Accepted)?.clone();
        tracing::info!(
            swap_id = %swap_id,
            item_id = %item_id,
            owner = %owner,
            reward,
            "swap accepted"
        );
        Ok(swap)
    }

    /// Decline a pending swap request. Owner-only.
    ///
    /// The only effect is the swap's own status; no points move and the
    /// item stays on the market.
    pub fn decline_swap(&mut self, caller: &AuthContext, swap_id: SwapId) -> Result<Swap> {
        self.resolvable_by(caller, swap_id)?;
        let swap = self.book.resolve(swap_id, SwapStatus::Declined)?.clone();
        tracing::debug!(swap_id = %swap_id, owner = %caller.email, "swap declined");
        Ok(swap)
    }

    /// Every swap where `email` is requester or owner, newest first, each
    /// joined with a snapshot of its item.
    #[must_use]
    pub fn swaps_for(&self, registry: &ItemRegistry, email: &str) -> Vec<SwapView> {
        self.book
            .involving(email)
            .into_iter()
            .map(|swap| SwapView {
                swap: swap.clone(),
                item: registry.get(swap.item_id).ok().cloned(),
            })
            .collect()
    }

    /// Read access to the underlying swap book.
    #[must_use]
    pub fn book(&self) -> &SwapBook {
        &self.book
    }

    /// Shared preconditions for request/redeem: the item exists, is
    /// approved, and the caller is not its owner. Returns the owner email.
    fn tradeable_counterparty(
        &self,
        registry: &ItemRegistry,
        caller: &AuthContext,
        item_id: ItemId,
    ) -> Result<Email> {
        let item = registry
            .get(item_id)
            .map_err(|_| RewearError::InvalidItem(item_id))?;
        if !item.is_tradeable() {
            return Err(RewearError::InvalidItem(item_id));
        }
        if item.owner_email == caller.email {
            return Err(RewearError::SelfSwapForbidden);
        }
        Ok(item.owner_email.clone())
    }

    /// Shared preconditions for accept/decline: the swap exists, the
    /// caller is the item's owner, and the swap is still pending.
    fn resolvable_by(&self, caller: &AuthContext, swap_id: SwapId) -> Result<(ItemId, Email)> {
        let swap = self.book.get(swap_id)?;
        if swap.item_owner_email != caller.email {
            return Err(RewearError::NotItemOwner);
        }
        if swap.status != SwapStatus::Pending {
            return Err(RewearError::SwapNotPending { actual: swap.status });
        }
        Ok((swap.item_id, swap.item_owner_email.clone()))
    }
}

impl Default for SwapOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rewear_types::{ListingDraft, SwapType};

    use super::*;

    struct Fixture {
        registry: ItemRegistry,
        ledger: AccountLedger,
        orch: SwapOrchestrator,
        alice: AuthContext,
        bob: AuthContext,
    }

    /// Bob owns an approved item; Alice and Bob both have fresh accounts.
    fn fixture() -> (Fixture, ItemId) {
        let mut registry = ItemRegistry::new();
        let mut ledger = AccountLedger::new();
        let alice = AuthContext::member("alice@example.com");
        let bob = AuthContext::member("bob@example.com");

        ledger.open_account("alice@example.com", false).unwrap();
        ledger.open_account("bob@example.com", false).unwrap();

        let item_id = registry
            .create_listing(&bob, ListingDraft::dummy())
            .unwrap()
            .id;
        registry.approve(item_id).unwrap();

        (
            Fixture {
                registry,
                ledger,
                orch: SwapOrchestrator::new(),
                alice,
                bob,
            },
            item_id,
        )
    }

    #[test]
    fn request_swap_creates_pending_record() {
        let (mut fx, item_id) = fixture();
        let swap = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, item_id)
            .unwrap();
        assert_eq!(swap.status, SwapStatus::Pending);
        assert_eq!(swap.swap_type, SwapType::Swap);
        assert_eq!(swap.points_used, 0);
        assert_eq!(swap.item_owner_email, "bob@example.com");
    }

    #[test]
    fn request_on_pending_item_fails() {
        let (mut fx, _) = fixture();
        let pending_id = fx
            .registry
            .create_listing(&fx.bob, ListingDraft::dummy())
            .unwrap()
            .id;
        let err = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, pending_id)
            .unwrap_err();
        assert!(matches!(err, RewearError::InvalidItem(_)));
    }

    #[test]
    fn request_on_missing_item_fails() {
        let (mut fx, _) = fixture();
        let err = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, ItemId::new())
            .unwrap_err();
        assert!(matches!(err, RewearError::InvalidItem(_)));
    }

    #[test]
    fn owner_cannot_request_own_item() {
        let (mut fx, item_id) = fixture();
        let err = fx
            .orch
            .request_swap(&fx.registry, &fx.bob, item_id)
            .unwrap_err();
        assert!(matches!(err, RewearError::SelfSwapForbidden));
    }

    #[test]
    fn duplicate_request_blocked_until_declined() {
        let (mut fx, item_id) = fixture();
        let swap = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, item_id)
            .unwrap();

        let err = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, item_id)
            .unwrap_err();
        assert!(matches!(err, RewearError::DuplicateRequest));

        fx.orch.decline_swap(&fx.bob, swap.id).unwrap();

        // After the decline the same requester may ask again.
        fx.orch
            .request_swap(&fx.registry, &fx.alice, item_id)
            .unwrap();
    }

    #[test]
    fn redeem_debits_and_takes_item() {
        let (mut fx, item_id) = fixture();
        let redemption = fx
            .orch
            .redeem_with_points(&mut fx.registry, &mut fx.ledger, &fx.alice, item_id)
            .unwrap();

        assert_eq!(redemption.new_balance, 50);
        assert_eq!(fx.ledger.balance("alice@example.com").unwrap(), 50);
        assert_eq!(redemption.swap.status, SwapStatus::Completed);
        assert_eq!(redemption.swap.swap_type, SwapType::Points);
        assert_eq!(redemption.swap.points_used, 50);
        assert_eq!(
            fx.registry.get(item_id).unwrap().status,
            ItemStatus::Unavailable
        );
        // Owner is not credited by a redemption.
        assert_eq!(fx.ledger.balance("bob@example.com").unwrap(), 100);
    }

    #[test]
    fn redeem_insufficient_points_leaves_no_trace() {
        let (mut fx, item_id) = fixture();
        fx.ledger.debit("alice@example.com", 60).unwrap(); // balance 40 < 50

        let err = fx
            .orch
            .redeem_with_points(&mut fx.registry, &mut fx.ledger, &fx.alice, item_id)
            .unwrap_err();
        assert!(matches!(err, RewearError::InsufficientPoints { .. }));

        assert_eq!(fx.ledger.balance("alice@example.com").unwrap(), 40);
        assert_eq!(fx.registry.get(item_id).unwrap().status, ItemStatus::Approved);
        assert!(fx.orch.book().is_empty());
    }

    #[test]
    fn owner_cannot_redeem_own_item() {
        let (mut fx, item_id) = fixture();
        let err = fx
            .orch
            .redeem_with_points(&mut fx.registry, &mut fx.ledger, &fx.bob, item_id)
            .unwrap_err();
        assert!(matches!(err, RewearError::SelfSwapForbidden));
        assert_eq!(fx.ledger.balance("bob@example.com").unwrap(), 100);
    }

    #[test]
    fn redeemed_item_cannot_be_requested() {
        let (mut fx, item_id) = fixture();
        fx.orch
            .redeem_with_points(&mut fx.registry, &mut fx.ledger, &fx.alice, item_id)
            .unwrap();

        let carol = AuthContext::member("carol@example.com");
        let err = fx
            .orch
            .request_swap(&fx.registry, &carol, item_id)
            .unwrap_err();
        assert!(matches!(err, RewearError::InvalidItem(_)));
    }

    #[test]
    fn accept_credits_owner_and_takes_item() {
        let (mut fx, item_id) = fixture();
        let swap = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, item_id)
            .unwrap();

        let accepted = fx
            .orch
            .accept_swap(&mut fx.registry, &mut fx.ledger, &fx.bob, swap.id)
            .unwrap();

        assert_eq!(accepted.status, SwapStatus::Accepted);
        assert_eq!(fx.ledger.balance("bob@example.com").unwrap(), 125);
        assert_eq!(
            fx.registry.get(item_id).unwrap().status,
            ItemStatus::Unavailable
        );
        // The requester pays nothing for a direct exchange.
        assert_eq!(fx.ledger.balance("alice@example.com").unwrap(), 100);
    }

    #[test]
    fn only_owner_may_resolve() {
        let (mut fx, item_id) = fixture();
        let swap = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, item_id)
            .unwrap();

        let err = fx
            .orch
            .accept_swap(&mut fx.registry, &mut fx.ledger, &fx.alice, swap.id)
            .unwrap_err();
        assert!(matches!(err, RewearError::NotItemOwner));

        let err = fx.orch.decline_swap(&fx.alice, swap.id).unwrap_err();
        assert!(matches!(err, RewearError::NotItemOwner));
    }

    #[test]
    fn resolved_swap_is_terminal() {
        let (mut fx, item_id) = fixture();
        let swap = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, item_id)
            .unwrap();
        fx.orch
            .accept_swap(&mut fx.registry, &mut fx.ledger, &fx.bob, swap.id)
            .unwrap();

        let balance_after = fx.ledger.balance("bob@example.com").unwrap();
        let err = fx.orch.decline_swap(&fx.bob, swap.id).unwrap_err();
        assert!(matches!(err, RewearError::SwapNotPending { .. }));

        let err = fx
            .orch
            .accept_swap(&mut fx.registry, &mut fx.ledger, &fx.bob, swap.id)
            .unwrap_err();
        assert!(matches!(err, RewearError::SwapNotPending { .. }));
        // No double reward.
        assert_eq!(fx.ledger.balance("bob@example.com").unwrap(), balance_after);
    }

    #[test]
    fn decline_moves_no_points_and_keeps_item_listed() {
        let (mut fx, item_id) = fixture();
        let swap = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, item_id)
            .unwrap();

        let declined = fx.orch.decline_swap(&fx.bob, swap.id).unwrap();
        assert_eq!(declined.status, SwapStatus::Declined);
        assert_eq!(fx.ledger.balance("alice@example.com").unwrap(), 100);
        assert_eq!(fx.ledger.balance("bob@example.com").unwrap(), 100);
        assert_eq!(fx.registry.get(item_id).unwrap().status, ItemStatus::Approved);
    }

    #[test]
    fn accept_fails_when_item_was_rejected() {
        let (mut fx, item_id) = fixture();
        let swap = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, item_id)
            .unwrap();

        // Admin rejects the item while the request is pending.
        fx.registry.reject(item_id).unwrap();

        let err = fx
            .orch
            .accept_swap(&mut fx.registry, &mut fx.ledger, &fx.bob, swap.id)
            .unwrap_err();
        assert!(matches!(err, RewearError::InvalidItem(_)));

        // All-or-nothing: no reward paid, swap still pending.
        assert_eq!(fx.ledger.balance("bob@example.com").unwrap(), 100);
        assert_eq!(fx.orch.book().get(swap.id).unwrap().status, SwapStatus::Pending);
    }

    #[test]
    fn accepting_one_request_leaves_others_pending() {
        let (mut fx, item_id) = fixture();
        let carol = AuthContext::member("carol@example.com");
        ledger_open(&mut fx.ledger, "carol@example.com");

        let alice_swap = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, item_id)
            .unwrap();
        let carol_swap = fx
            .orch
            .request_swap(&fx.registry, &carol, item_id)
            .unwrap();

        fx.orch
            .accept_swap(&mut fx.registry, &mut fx.ledger, &fx.bob, alice_swap.id)
            .unwrap();

        // No cascade decline: Carol's request stays pending indefinitely.
        assert_eq!(
            fx.orch.book().get(carol_swap.id).unwrap().status,
            SwapStatus::Pending
        );
    }

    #[test]
    fn swaps_for_joins_item_snapshots() {
        let (mut fx, item_id) = fixture();
        let swap = fx
            .orch
            .request_swap(&fx.registry, &fx.alice, item_id)
            .unwrap();

        for email in ["alice@example.com", "bob@example.com"] {
            let views = fx.orch.swaps_for(&fx.registry, email);
            assert_eq!(views.len(), 1);
            assert_eq!(views[0].swap.id, swap.id);
            assert_eq!(views[0].item.as_ref().unwrap().id, item_id);
        }

        fx.registry.reject(item_id).unwrap();
        let views = fx.orch.swaps_for(&fx.registry, "alice@example.com");
        assert!(views[0].item.is_none());
    }

    fn ledger_open(ledger: &mut AccountLedger, email: &str) {
        ledger.open_account(email, false).unwrap();
    }
}
