//! # rewear-types
//!
//! Shared types, errors, and configuration for the **ReWear** marketplace
//! core.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ItemId`], [`SwapId`], [`UserId`], [`Email`]
//! - **Authorization**: [`AuthContext`]
//! - **Account model**: [`UserAccount`]
//! - **Item model**: [`Item`], [`ListingDraft`], [`Category`], [`Condition`], [`ItemStatus`]
//! - **Swap model**: [`Swap`], [`SwapType`], [`SwapStatus`]
//! - **Configuration**: [`MarketplaceConfig`], [`PointsPolicy`], [`ListingLimits`]
//! - **Errors**: [`RewearError`] with `RW_ERR_` prefix codes
//! - **Constants**: policy defaults and listing limits

pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod item;
pub mod swap;
pub mod user;

// Re-export all primary types at crate root for ergonomic imports:
//   use rewear_types::{Item, ItemStatus, Swap, SwapStatus, ...};

pub use auth::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use item::*;
pub use swap::*;
pub use user::*;

// Constants are accessed via `rewear_types::constants::FOO`
// (not re-exported to avoid name collisions).
