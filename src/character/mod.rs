//! The player character: the single mutable aggregate every subsystem
//! reads and transforms. All mutation flows through the ledger, the duel
//! resolver and the world tick; this module only defines the shape,
//! construction defaults and a few small bookkeeping helpers.

pub mod save;
pub mod stats;

use crate::catalog::{self, BonusKind, CreatureDef, GameItem};
use crate::core::constants::{
    ADOPTION_STARTING_GAUGE, BONUS_HAPPINESS_MIN, BONUS_HUNGER_MIN, INCOME_HAPPINESS_MIN,
    INCOME_HUNGER_MIN, MATCH_HISTORY_CAP,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Cosmetic affiliation. Affects UI theming only, never simulation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum House {
    #[default]
    Emberfall,
    Frosthollow,
    Galewind,
    Briarwood,
}

/// UI palette entry for a house. Consumed by the presentation layer; the
/// engine itself only stores the [`House`].
#[derive(Debug, Clone, Copy)]
pub struct HouseTheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

impl House {
    pub fn name(&self) -> &'static str {
        match self {
            House::Emberfall => "Emberfall",
            House::Frosthollow => "Frosthollow",
            House::Galewind => "Galewind",
            House::Briarwood => "Briarwood",
        }
    }

    pub fn theme(&self) -> HouseTheme {
        match self {
            House::Emberfall => HouseTheme {
                primary: "#b91c1c",
                secondary: "#f59e0b",
                accent: "#450a0a",
            },
            House::Frosthollow => HouseTheme {
                primary: "#38bdf8",
                secondary: "#e2e8f0",
                accent: "#0c4a6e",
            },
            House::Galewind => HouseTheme {
                primary: "#34d399",
                secondary: "#a7f3d0",
                accent: "#064e3b",
            },
            House::Briarwood => HouseTheme {
                primary: "#eab308",
                secondary: "#fde68a",
                accent: "#422006",
            },
        }
    }
}

/// Base combat stats and the lifetime duel record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: u32,
    pub defense: u32,
    pub wins: u32,
    pub losses: u32,
}

/// Immutable record of one resolved duel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    pub victory: bool,
    /// Reward or penalty, excluding the entry fee.
    pub gold_delta: i64,
    pub opponent_name: String,
    pub log: Vec<String>,
    pub timestamp: i64,
}

/// An adopted companion. The catalog definition is embedded at adoption
/// time so owned creatures stay readable even if the catalog shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedCreature {
    pub instance_id: String,
    pub creature_id: String,
    pub species: String,
    pub name: String,
    pub bonus: BonusKind,
    pub bonus_value: f64,
    /// Clamped to [0, 100].
    pub happiness: f64,
    /// Clamped to [0, 100]. Higher means better fed.
    pub hunger: f64,
    pub last_interaction: i64,
}

impl OwnedCreature {
    /// Instantiates a companion from its catalog definition.
    pub fn adopt(def: &CreatureDef, now: i64) -> Self {
        Self {
            instance_id: uuid::Uuid::new_v4().to_string(),
            creature_id: def.id.to_string(),
            species: def.species.to_string(),
            name: def.name.to_string(),
            bonus: def.bonus,
            bonus_value: def.bonus_value,
            happiness: ADOPTION_STARTING_GAUGE,
            hunger: ADOPTION_STARTING_GAUGE,
            last_interaction: now,
        }
    }

    /// Whether this companion currently grants its stat or discount bonus.
    pub fn bonus_eligible(&self) -> bool {
        self.happiness > BONUS_HAPPINESS_MIN && self.hunger > BONUS_HUNGER_MIN
    }

    /// Whether this companion can roll passive income this tick. Stricter
    /// on hunger than [`Self::bonus_eligible`]; see the constants module.
    pub fn income_eligible(&self) -> bool {
        self.happiness > INCOME_HAPPINESS_MIN && self.hunger > INCOME_HUNGER_MIN
    }
}

/// A held stock position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub shares: u32,
    /// Cumulative amount paid for the shares currently held. Reduced
    /// pro-rata on partial sales; never negative.
    pub total_cost: f64,
}

fn default_vault_level() -> u32 {
    1
}

/// Prices for a save that predates the market: every instrument opens at
/// its catalog base price.
fn default_market_prices() -> BTreeMap<String, f64> {
    catalog::STOCKS
        .iter()
        .map(|s| (s.id.to_string(), s.base_price))
        .collect()
}

/// All persistent player state. Serialized whole as a single JSON object;
/// every field added after the first release carries a `serde` default so
/// old saves load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub house: House,
    pub gold: u64,
    pub inventory: Vec<GameItem>,
    pub equipped: Vec<GameItem>,
    pub stats: BaseStats,
    /// Item id -> replacement image, managed by the UI layer.
    #[serde(default)]
    pub custom_item_images: BTreeMap<u32, String>,
    /// Newest last; capped at [`MATCH_HISTORY_CAP`].
    #[serde(default)]
    pub match_history: VecDeque<BattleResult>,
    #[serde(default)]
    pub solved_questions: BTreeSet<String>,
    /// Ingredient id -> quantity.
    #[serde(default)]
    pub ingredients: BTreeMap<String, u32>,
    /// Recipe id -> quantity of brewed potions.
    #[serde(default)]
    pub potions: BTreeMap<String, u32>,
    #[serde(default)]
    pub creatures: Vec<OwnedCreature>,
    #[serde(default = "default_vault_level")]
    pub vault_level: u32,
    /// Stock id -> held position.
    #[serde(default)]
    pub portfolio: BTreeMap<String, PortfolioItem>,
    /// Stock id -> live price, advanced by the world tick.
    #[serde(default = "default_market_prices")]
    pub market_prices: BTreeMap<String, f64>,
}

impl Character {
    /// Creates a fresh character with zero-valued progress.
    pub fn new(name: String, house: House) -> Self {
        Self {
            name,
            house,
            gold: 0,
            inventory: Vec::new(),
            equipped: Vec::new(),
            stats: BaseStats::default(),
            custom_item_images: BTreeMap::new(),
            match_history: VecDeque::new(),
            solved_questions: BTreeSet::new(),
            ingredients: BTreeMap::new(),
            potions: BTreeMap::new(),
            creatures: Vec::new(),
            vault_level: 1,
            portfolio: BTreeMap::new(),
            market_prices: default_market_prices(),
        }
    }

    /// True if the item id is anywhere in the inventory or equipped set.
    pub fn owns(&self, item_id: u32) -> bool {
        self.inventory.iter().any(|i| i.id == item_id)
            || self.equipped.iter().any(|i| i.id == item_id)
    }

    pub fn creature(&self, instance_id: &str) -> Option<&OwnedCreature> {
        self.creatures.iter().find(|c| c.instance_id == instance_id)
    }

    /// Appends a battle record, evicting the oldest entry past the cap.
    pub fn push_battle_result(&mut self, result: BattleResult) {
        self.match_history.push_back(result);
        while self.match_history.len() > MATCH_HISTORY_CAP {
            self.match_history.pop_front();
        }
    }

    /// Live price for an instrument, falling back to its base price when
    /// the map has no entry yet.
    pub fn market_price(&self, stock_id: &str) -> f64 {
        self.market_prices.get(stock_id).copied().unwrap_or_else(|| {
            catalog::stock(stock_id).map(|s| s.base_price).unwrap_or(0.0)
        })
    }

    /// Market value of all held shares at current prices.
    pub fn portfolio_value(&self) -> f64 {
        self.portfolio
            .iter()
            .map(|(id, pos)| self.market_price(id) * pos.shares as f64)
            .sum()
    }

    /// Gold on hand plus portfolio value.
    pub fn net_worth(&self) -> f64 {
        self.gold as f64 + self.portfolio_value()
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub fn switch_house(&mut self, house: House) {
        self.house = house;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(n: usize) -> BattleResult {
        BattleResult {
            victory: n % 2 == 0,
            gold_delta: 100,
            opponent_name: format!("Opponent {n}"),
            log: vec![],
            timestamp: n as i64,
        }
    }

    #[test]
    fn test_new_character_defaults() {
        let c = Character::new("Wren".to_string(), House::Galewind);
        assert_eq!(c.gold, 0);
        assert_eq!(c.vault_level, 1);
        assert!(c.inventory.is_empty());
        assert!(c.equipped.is_empty());
        assert!(c.match_history.is_empty());
        assert_eq!(c.stats, BaseStats::default());
        // Market opens at catalog base prices
        for stock in crate::catalog::STOCKS {
            assert_eq!(c.market_price(stock.id), stock.base_price);
        }
    }

    #[test]
    fn test_owns_checks_both_sets() {
        let mut c = Character::new("Wren".to_string(), House::Emberfall);
        let item = crate::catalog::SHOP_ITEMS[0].to_item();
        assert!(!c.owns(item.id));

        c.inventory.push(item.clone());
        assert!(c.owns(item.id));

        let moved = c.inventory.pop().unwrap();
        c.equipped.push(moved);
        assert!(c.owns(item.id));
    }

    #[test]
    fn test_match_history_fifo_eviction() {
        let mut c = Character::new("Wren".to_string(), House::Emberfall);
        for n in 0..25 {
            c.push_battle_result(sample_result(n));
        }
        assert_eq!(c.match_history.len(), MATCH_HISTORY_CAP);
        // Oldest five evicted; remaining entries are 5..25 in order
        assert_eq!(c.match_history.front().unwrap().opponent_name, "Opponent 5");
        assert_eq!(c.match_history.back().unwrap().opponent_name, "Opponent 24");
        let timestamps: Vec<i64> = c.match_history.iter().map(|r| r.timestamp).collect();
        let mut sorted = timestamps.clone();
        sorted.sort();
        assert_eq!(timestamps, sorted);
    }

    #[test]
    fn test_adopted_creature_starts_balanced() {
        let def = crate::catalog::creature("moon_owl").unwrap();
        let pet = OwnedCreature::adopt(def, 1_700_000_000);
        assert_eq!(pet.happiness, ADOPTION_STARTING_GAUGE);
        assert_eq!(pet.hunger, ADOPTION_STARTING_GAUGE);
        assert_eq!(pet.last_interaction, 1_700_000_000);
        assert_eq!(pet.creature_id, "moon_owl");
        assert_eq!(pet.instance_id.len(), 36);
    }

    #[test]
    fn test_adoption_instance_ids_unique() {
        let def = crate::catalog::creature("marsh_toad").unwrap();
        let a = OwnedCreature::adopt(def, 0);
        let b = OwnedCreature::adopt(def, 0);
        assert_ne!(a.instance_id, b.instance_id);
    }

    #[test]
    fn test_bonus_eligibility_thresholds() {
        let def = crate::catalog::creature("griffon").unwrap();
        let mut pet = OwnedCreature::adopt(def, 0);

        // Fresh adoption: happiness 50 is not strictly above the line
        assert!(!pet.bonus_eligible());

        pet.happiness = 51.0;
        pet.hunger = 31.0;
        assert!(pet.bonus_eligible());
        assert!(!pet.income_eligible());

        pet.hunger = 51.0;
        assert!(pet.income_eligible());

        pet.hunger = 30.0;
        assert!(!pet.bonus_eligible());
    }

    #[test]
    fn test_portfolio_value_uses_live_prices() {
        let mut c = Character::new("Wren".to_string(), House::Emberfall);
        c.portfolio.insert(
            "whimsy".to_string(),
            PortfolioItem {
                shares: 10,
                total_cost: 500.0,
            },
        );
        c.market_prices.insert("whimsy".to_string(), 60.0);
        assert_eq!(c.portfolio_value(), 600.0);

        c.gold = 400;
        assert_eq!(c.net_worth(), 1000.0);
    }

    #[test]
    fn test_market_price_falls_back_to_base() {
        let mut c = Character::new("Wren".to_string(), House::Emberfall);
        c.market_prices.clear();
        let stock = crate::catalog::stock("zephyr").unwrap();
        assert_eq!(c.market_price("zephyr"), stock.base_price);
    }
}
