//! Error types for the ReWear marketplace core.
//!
//! All errors use the `RW_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Item / listing errors
//! - 2xx: Account / points errors
//! - 3xx: Swap errors
//! - 4xx: Authorization errors
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::{ItemId, ItemStatus, SwapId, SwapStatus};

/// Central error enum for all ReWear operations.
///
/// Every variant is recoverable at the caller boundary and maps to a
/// distinct user-visible message — none are fatal to the process.
#[derive(Debug, Error)]
pub enum RewearError {
    // =================================================================
    // Item / Listing Errors (1xx)
    // =================================================================
    /// The requested item was not found in the registry.
    #[error("RW_ERR_100: Item not found: {0}")]
    ItemNotFound(ItemId),

    /// The listing draft failed validation (missing fields, bad values, etc.).
    #[error("RW_ERR_101: Invalid listing: {reason}")]
    InvalidListing { reason: String },

    /// The item is absent or not approved for trading.
    #[error("RW_ERR_102: Invalid item or item not available")]
    InvalidItem(ItemId),

    /// The item cannot move to the requested lifecycle state.
    #[error("RW_ERR_103: Invalid item transition: {from} -> {to}")]
    InvalidTransition { from: ItemStatus, to: ItemStatus },

    // =================================================================
    // Account / Points Errors (2xx)
    // =================================================================
    /// Not enough points to perform the operation.
    #[error("RW_ERR_200: Insufficient points: need {needed}, have {available}")]
    InsufficientPoints { needed: u32, available: u32 },

    /// No account exists for the given email.
    #[error("RW_ERR_201: User not found: {0}")]
    UserNotFound(String),

    /// An account with this email already exists.
    #[error("RW_ERR_202: Email already exists: {0}")]
    DuplicateEmail(String),

    /// A ledger amount must be positive.
    #[error("RW_ERR_203: Point amount must be positive")]
    InvalidAmount,

    // =================================================================
    // Swap Errors (3xx)
    // =================================================================
    /// The requested swap was not found.
    #[error("RW_ERR_300: Swap not found: {0}")]
    SwapNotFound(SwapId),

    /// An owner attempted a swap or redemption on their own item.
    #[error("RW_ERR_301: Cannot swap or redeem your own item")]
    SelfSwapForbidden,

    /// A pending swap for this (item, requester) pair already exists.
    #[error("RW_ERR_302: Swap request already exists")]
    DuplicateRequest,

    /// The swap is not pending; accepted/declined/completed are terminal.
    #[error("RW_ERR_303: Swap is not pending (currently {actual})")]
    SwapNotPending { actual: SwapStatus },

    // =================================================================
    // Authorization Errors (4xx)
    // =================================================================
    /// The caller lacks the admin capability.
    #[error("RW_ERR_400: Admin access required")]
    AdminRequired,

    /// Only the item's owner may resolve this swap.
    #[error("RW_ERR_401: Not authorized to resolve this swap")]
    NotItemOwner,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("RW_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, RewearError>;
