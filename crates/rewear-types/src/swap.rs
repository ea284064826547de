//! Swap transaction types.
//!
//! A `Swap` links a requester to an item's owner. Direct exchanges start
//! `Pending` and are resolved by the owner; points redemptions are born
//! `Completed`.
//!
//! ```text
//!   ┌─────────┐  owner accepts  ┌──────────┐
//!   │ PENDING ├────────────────▶│ ACCEPTED │
//!   └────┬────┘                 └──────────┘
//!        │ owner declines       ┌──────────┐
//!        └─────────────────────▶│ DECLINED │
//!                               └──────────┘
//!   (points redemption)         ┌───────────┐
//!        ─────────────────────▶ │ COMPLETED │
//!                               └───────────┘
//! ```
//!
//! Accepted, Declined, and Completed are absorbing — no transition leaves
//! them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Email, ItemId, SwapId};

/// How the requester wants to obtain the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapType {
    /// A direct garment-for-garment exchange, resolved by the owner.
    Swap,
    /// A points redemption at the fixed platform price.
    Points,
}

impl std::fmt::Display for SwapType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Swap => write!(f, "SWAP"),
            Self::Points => write!(f, "POINTS"),
        }
    }
}

/// Lifecycle status of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    /// Awaiting the owner's decision.
    Pending,
    /// Owner accepted. Terminal.
    Accepted,
    /// Owner declined. Terminal; points are never refunded.
    Declined,
    /// Points redemption executed. Terminal.
    Completed,
}

impl SwapStatus {
    /// Whether this status admits no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Accepted | Self::Declined | Self::Completed)
    }

    /// Can a swap in this status transition to the given target?
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Accepted | Self::Declined)
        )
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Accepted => write!(f, "ACCEPTED"),
            Self::Declined => write!(f, "DECLINED"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// A swap or redemption transaction record.
///
/// Created only by the Swap Orchestrator. References exactly one item;
/// the owner and requester are distinct by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    pub id: SwapId,
    pub item_id: ItemId,
    pub item_owner_email: Email,
    pub requester_email: Email,
    pub swap_type: SwapType,
    /// Points spent by the requester. Zero unless `swap_type` is Points.
    pub points_used: u32,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Swap {
    /// A pending direct-exchange request.
    #[must_use]
    pub fn exchange_request(
        item_id: ItemId,
        item_owner_email: impl Into<Email>,
        requester_email: impl Into<Email>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SwapId::new(),
            item_id,
            item_owner_email: item_owner_email.into(),
            requester_email: requester_email.into(),
            swap_type: SwapType::Swap,
            points_used: 0,
            status: SwapStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// An already-completed points redemption.
    #[must_use]
    pub fn redemption(
        item_id: ItemId,
        item_owner_email: impl Into<Email>,
        requester_email: impl Into<Email>,
        points_used: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SwapId::new(),
            item_id,
            item_owner_email: item_owner_email.into(),
            requester_email: requester_email.into(),
            swap_type: SwapType::Points,
            points_used,
            status: SwapStatus::Completed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given email is a party to this swap.
    #[must_use]
    pub fn involves(&self, email: &str) -> bool {
        self.requester_email == email || self.item_owner_email == email
    }
}
