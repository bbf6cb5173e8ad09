//! The dueling club: opponent generation, outcome resolution and the
//! cosmetic narration that plays out afterwards.
//!
//! Resolution is authoritative and instantaneous; the narrated exchange
//! is flavor derived from stats that are already final. Cancelling a
//! narration mid-playback can never change game state.

pub mod logic;
pub mod types;

pub use logic::resolve;
pub use types::{DuelOutcome, DuelPhase, DuelSession, Opponent};
