//! Configuration for the ReWear marketplace policy constants.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Top-level marketplace configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MarketplaceConfig {
    /// Points economy policy.
    pub points: PointsPolicy,
    /// Listing and media limits.
    pub listing: ListingLimits,
}

/// The points economy. Deliberately non-conservative: redemption debits
/// the requester without crediting the owner, and acceptance credits the
/// owner without a corresponding debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsPolicy {
    /// Balance seeded into every new account.
    pub starting_balance: u32,
    /// Fixed price of redeeming any listing.
    pub redemption_price: u32,
    /// Reward paid to an owner who accepts a swap request.
    pub acceptance_reward: u32,
}

impl Default for PointsPolicy {
    fn default() -> Self {
        Self {
            starting_balance: constants::STARTING_BALANCE,
            redemption_price: constants::REDEMPTION_PRICE,
            acceptance_reward: constants::ACCEPTANCE_REWARD,
        }
    }
}

/// Limits applied to listing submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingLimits {
    /// Maximum image references per listing.
    pub max_images_per_item: usize,
    /// Maximum uploaded image size in bytes. Enforced at the media-store
    /// boundary; carried here so every surface agrees on the number.
    pub max_image_bytes: u64,
}

impl Default for ListingLimits {
    fn default() -> Self {
        Self {
            max_images_per_item: constants::MAX_IMAGES_PER_ITEM,
            max_image_bytes: constants::MAX_IMAGE_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_policy() {
        let policy = PointsPolicy::default();
        assert_eq!(policy.starting_balance, 100);
        assert_eq!(policy.redemption_price, 50);
        assert_eq!(policy.acceptance_reward, 25);
    }

    #[test]
    fn default_listing_limits() {
        let limits = ListingLimits::default();
        assert_eq!(limits.max_images_per_item, 5);
        assert_eq!(limits.max_image_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = MarketplaceConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: MarketplaceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
