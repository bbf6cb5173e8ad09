//! The transaction ledger: every rule that moves gold or inventory.
//!
//! All operations are pure transforms over an immutable snapshot; they
//! either return the updated character or a tagged error with the input
//! untouched. Outside the battle settlement (which clamps at zero), any
//! debit that would overdraw fails closed.

pub mod ledger;

use thiserror::Error;

/// Why a ledger operation was refused. All variants are recoverable; the
/// caller keeps the unchanged snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("item already owned")]
    AlreadyOwned,

    #[error("not owned")]
    NotOwned,

    #[error("insufficient shares")]
    InsufficientShares,

    #[error("missing ingredients")]
    MissingIngredients,

    #[error("vault is already at the highest tier")]
    MaxTierReached,

    #[error("unknown catalog id: {0}")]
    UnknownCatalogId(String),
}
