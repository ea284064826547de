//! System-wide policy constants for the ReWear marketplace.

/// Points granted to every account at signup.
pub const STARTING_BALANCE: u32 = 100;

/// Fixed price of redeeming any listing with points.
pub const REDEMPTION_PRICE: u32 = 50;

/// Points awarded to an item's owner when they accept a swap request.
pub const ACCEPTANCE_REWARD: u32 = 25;

/// Maximum image references attached to a single listing.
pub const MAX_IMAGES_PER_ITEM: usize = 5;

/// Maximum size of a single uploaded image in bytes (5 MiB). Enforced by
/// the media-store boundary; recorded here so every surface agrees.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Platform name.
pub const PLATFORM_NAME: &str = "ReWear";
