//! # rewear-exchange
//!
//! **Transaction plane**: the points ledger and the swap orchestrator.
//!
//! ## Architecture
//!
//! 1. **AccountLedger**: source of truth for every points balance; all
//!    mutations are atomic read-modify-write on one account record
//! 2. **SwapBook**: owned storage for swap records plus the
//!    one-pending-request-per-(item, requester) index
//! 3. **SwapOrchestrator**: coordinates the compound operations that span
//!    the registry, the ledger, and the book
//!
//! ## Transaction Flow
//!
//! ```text
//! caller → SwapOrchestrator.request_swap()      → Swap{PENDING}
//!        → SwapOrchestrator.redeem_with_points() → debit + Swap{COMPLETED} + item UNAVAILABLE
//!        → SwapOrchestrator.accept_swap()        → credit + item UNAVAILABLE + Swap{ACCEPTED}
//!        → SwapOrchestrator.decline_swap()       → Swap{DECLINED}
//! ```
//!
//! Compound operations are all-or-nothing: every fallible check runs
//! before the first cross-entity mutation, and the one edge that can
//! still fail afterwards is compensated explicitly.

pub mod account_ledger;
pub mod orchestrator;
pub mod swap_book;

pub use account_ledger::AccountLedger;
pub use orchestrator::{Redemption, SwapOrchestrator, SwapView};
pub use swap_book::SwapBook;
