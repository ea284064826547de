//! # rewear-inventory
//!
//! **Item plane**: listing creation and validation, the item lifecycle
//! state machine, filtered scans, and the admin moderation gate.
//!
//! ## Architecture
//!
//! 1. **ItemRegistry**: owns every listing record and is the only place
//!    an item's status ever changes
//! 2. **Moderation gate**: admin-gated approve/reject wrappers plus the
//!    review queue feed
//!
//! ## Listing Flow
//!
//! ```text
//! caller → ItemRegistry.create_listing() → PENDING
//!        → moderation::approve_item()    → APPROVED
//!        → SwapOrchestrator (exchange crate) → UNAVAILABLE
//! ```
//!
//! Admin-submitted listings skip moderation and are born APPROVED — a
//! deliberate privilege, not a gap.

pub mod item_registry;
pub mod moderation;

pub use item_registry::{ItemFilter, ItemRegistry};
