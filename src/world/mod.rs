//! The world tick: everything that advances on its own while the player
//! does nothing. Creature gauges decay, eligible gold finders roll for
//! income, and every instrument takes one bounded random-walk step. The
//! scheduler decides when; the tick itself is a pure transform.

pub mod creatures;
pub mod market;
pub mod scheduler;
pub mod tick;

pub use scheduler::{TickScheduler, TickerHandle};
pub use tick::{world_tick, WorldTickEvent, WorldTickOutcome};
