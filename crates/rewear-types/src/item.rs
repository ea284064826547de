//! Listing types for the ReWear item registry.
//!
//! Every listed garment moves through a one-directional lifecycle:
//!
//! ```text
//!   ┌─────────┐  moderation   ┌──────────┐  swap/redeem   ┌─────────────┐
//!   │ PENDING ├──────────────▶│ APPROVED ├───────────────▶│ UNAVAILABLE │
//!   └────┬────┘               └────┬─────┘                └─────────────┘
//!        │ admin reject            │ admin reject
//!        ▼                         ▼
//!     (record deleted)         (record deleted)
//! ```
//!
//! Transitions are **monotonic** — a listing never becomes tradeable again
//! once taken, and rejection removes the record entirely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Email, ItemId, RewearError};

/// Opaque reference returned by the media store. The core stores and
/// echoes these, never interprets the underlying bytes.
pub type ImageRef = String;

/// Garment category. Closed set; unknown strings fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Accessories,
    Shoes,
    Outerwear,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Tops,
        Self::Bottoms,
        Self::Dresses,
        Self::Accessories,
        Self::Shoes,
        Self::Outerwear,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tops => write!(f, "Tops"),
            Self::Bottoms => write!(f, "Bottoms"),
            Self::Dresses => write!(f, "Dresses"),
            Self::Accessories => write!(f, "Accessories"),
            Self::Shoes => write!(f, "Shoes"),
            Self::Outerwear => write!(f, "Outerwear"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = RewearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tops" => Ok(Self::Tops),
            "Bottoms" => Ok(Self::Bottoms),
            "Dresses" => Ok(Self::Dresses),
            "Accessories" => Ok(Self::Accessories),
            "Shoes" => Ok(Self::Shoes),
            "Outerwear" => Ok(Self::Outerwear),
            other => Err(RewearError::InvalidListing {
                reason: format!("Unknown category: {other}"),
            }),
        }
    }
}

/// Garment condition. Closed set; unknown strings fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Condition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Fair,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "New"),
            Self::LikeNew => write!(f, "Like New"),
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = RewearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(Self::New),
            "Like New" => Ok(Self::LikeNew),
            "Good" => Ok(Self::Good),
            "Fair" => Ok(Self::Fair),
            other => Err(RewearError::InvalidListing {
                reason: format!("Unknown condition: {other}"),
            }),
        }
    }
}

/// Lifecycle status of a listing.
///
/// Transitions are **monotonic** (never go backwards):
/// - `Pending → Approved` (moderation)
/// - `Approved → Unavailable` (taken by a swap or redemption)
///
/// Rejection is not a state — the record is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Awaiting moderation. Not visible to browsers, not tradeable.
    Pending,
    /// Listed and tradeable.
    Approved,
    /// Taken by a completed redemption or an accepted swap. Terminal.
    Unavailable,
}

impl ItemStatus {
    /// Can this listing transition to the given target state?
    ///
    /// Re-entering the current state counts as a valid (idempotent)
    /// transition for `Approved` and `Unavailable`.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending | Self::Approved, Self::Approved)
                | (Self::Approved | Self::Unavailable, Self::Unavailable)
        )
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Unavailable => write!(f, "UNAVAILABLE"),
        }
    }
}

/// The attributes a lister submits. Validated by the registry before a
/// record is created; category and condition arrive already parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Free-form garment type (e.g., "T-shirt", "Jeans").
    pub item_type: String,
    pub size: String,
    pub condition: Condition,
    pub tags: Vec<String>,
    pub images: Vec<ImageRef>,
}

/// A listed garment. Owned by exactly one user, referenced by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub owner_email: Email,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub item_type: String,
    pub size: String,
    pub condition: Condition,
    pub tags: Vec<String>,
    pub status: ItemStatus,
    pub images: Vec<ImageRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Build a record from a validated draft.
    #[must_use]
    pub fn from_draft(owner_email: impl Into<Email>, draft: ListingDraft, status: ItemStatus) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::new(),
            owner_email: owner_email.into(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            item_type: draft.item_type,
            size: draft.size,
            condition: draft.condition,
            tags: draft.tags,
            status,
            images: draft.images,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this listing can be the subject of a new swap or redemption.
    #[must_use]
    pub fn is_tradeable(&self) -> bool {
        self.status == ItemStatus::Approved
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl ListingDraft {
    pub fn dummy() -> Self {
        Self {
            title: "Denim jacket".to_string(),
            description: "Lightly worn, size M".to_string(),
            category: Category::Outerwear,
            item_type: "Jacket".to_string(),
            size: "M".to_string(),
            condition: Condition::Good,
            tags: vec!["denim".to_string(), "casual".to_string()],
            images: vec!["/uploads/images-1.jpg".to_string()],
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Item {
    /// Create a dummy listing for unit tests.
    pub fn dummy(owner_email: &str, status: ItemStatus) -> Self {
        Self::from_draft(owner_email, ListingDraft::dummy(), status)
    }
}
