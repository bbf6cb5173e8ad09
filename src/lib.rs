//! Arcanum - Simulation Core for a Wizarding Life Game
//!
//! The authoritative state engine: duel resolution, the periodic world
//! tick (creature upkeep, market movement, passive income), and the
//! transaction ledger shared by the shop, bank, menagerie and potions
//! lab. Rendering and input live elsewhere; this crate turns intents and
//! elapsed time into new character snapshots.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod catalog;
pub mod character;
pub mod core;
pub mod duel;
pub mod economy;
pub mod world;
