//! One world tick over the whole character: every creature, then every
//! instrument, merged into a single fresh snapshot. A tick either applies
//! completely or not at all; there is no partially-ticked state.

use crate::catalog;
use crate::character::Character;
use crate::world::creatures::tick_creature;
use crate::world::market::step_price;
use rand::Rng;

/// Something noteworthy that happened during a tick. The presentation
/// layer turns these into toasts or log lines; the engine only records
/// them.
#[derive(Debug, Clone)]
pub enum WorldTickEvent {
    /// A companion found gold.
    GoldFound { creature_name: String, amount: u64 },
}

/// Result of advancing the world by one tick.
#[derive(Debug, Clone)]
pub struct WorldTickOutcome {
    /// The fully-updated snapshot: decayed creatures, new prices, income
    /// merged into gold.
    pub character: Character,
    pub events: Vec<WorldTickEvent>,
    /// Total passive income this tick, already included in the snapshot.
    pub gold_found: u64,
}

/// Advances creatures and market by one tick and merges the effects.
pub fn world_tick<R: Rng>(character: &Character, rng: &mut R) -> WorldTickOutcome {
    let mut next = character.clone();
    let mut events = Vec::new();
    let mut gold_found = 0u64;

    // Creatures first: decay plus income rolls.
    let mut ticked = Vec::with_capacity(next.creatures.len());
    for creature in &next.creatures {
        let result = tick_creature(creature, rng);
        if result.gold_found > 0 {
            gold_found += result.gold_found;
            events.push(WorldTickEvent::GoldFound {
                creature_name: result.creature.name.clone(),
                amount: result.gold_found,
            });
        }
        ticked.push(result.creature);
    }
    next.creatures = ticked;

    // Then one price step per catalog instrument. Instruments missing
    // from the map (older saves) start from their base price.
    for stock in catalog::STOCKS {
        let current = next.market_price(stock.id);
        let stepped = step_price(stock, current, rng);
        next.market_prices.insert(stock.id.to_string(), stepped);
    }

    next.gold += gold_found;
    if gold_found > 0 {
        log::debug!("world tick: companions found {gold_found} gold");
    }

    WorldTickOutcome {
        character: next,
        events,
        gold_found,
    }
}
