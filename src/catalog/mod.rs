//! Static catalog tables: items, creatures, instruments, recipes, vault
//! tiers, trivia questions and wand components.
//!
//! The simulation core only ever reads these; nothing here is mutable at
//! runtime. Owned copies of catalog entries (items a character buys,
//! creatures it adopts) are produced by the conversion helpers below.

pub mod data;

use serde::{Deserialize, Serialize};

pub use data::{
    CREATURES, INGREDIENTS, OPPONENT_NAMES, RECIPES, SHOP_ITEMS, STOCKS, TRIVIA_QUESTIONS,
    VAULT_TIERS, WAND_CORES, WAND_FINISHES, WAND_WOODS,
};

/// Broad item category. Purely descriptive; all kinds share the same
/// purchase/equip/sell rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Wand,
    Spell,
    Equipment,
}

/// What an eligible companion contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    AttackBoost,
    DefenseBoost,
    Discount,
    GoldFinder,
}

/// Catalog entry for a purchasable item.
#[derive(Debug, Clone, Copy)]
pub struct ItemDef {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ItemKind,
    pub price: u64,
    pub attack: u32,
    pub defense: u32,
}

/// An owned item as it lives in a character's inventory or equipped set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameItem {
    pub id: u32,
    pub name: String,
    pub kind: ItemKind,
    pub price: u64,
    pub attack: u32,
    pub defense: u32,
}

impl ItemDef {
    /// Produces the owned copy stored on a character after purchase.
    pub fn to_item(&self) -> GameItem {
        GameItem {
            id: self.id,
            name: self.name.to_string(),
            kind: self.kind,
            price: self.price,
            attack: self.attack,
            defense: self.defense,
        }
    }
}

/// Catalog entry for an adoptable creature.
#[derive(Debug, Clone, Copy)]
pub struct CreatureDef {
    pub id: &'static str,
    pub species: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u64,
    pub bonus: BonusKind,
    /// Flat stat points for boosts, a fraction for discounts, gold per
    /// find for gold finders.
    pub bonus_value: f64,
}

/// A tradable instrument. Live prices are kept on the character; the
/// catalog holds the base price and volatility only.
#[derive(Debug, Clone, Copy)]
pub struct StockDef {
    pub id: &'static str,
    pub ticker: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_price: f64,
    /// Fraction in [0, 1]; scales the per-tick random walk.
    pub volatility: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct IngredientDef {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct RecipeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub sell_price: u64,
    pub ingredients: &'static [&'static str],
    /// Failure chance in percent; success probability is (100 - difficulty)%.
    pub difficulty: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct VaultTier {
    pub level: u32,
    pub name: &'static str,
    pub cost: u64,
    pub capacity: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct TriviaQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
}

/// Wand crafting components. A wood carries the attack bonus, a core the
/// defense bonus, a finish is cosmetic.
#[derive(Debug, Clone, Copy)]
pub struct WandWood {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: u64,
    pub attack_bonus: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct WandCore {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: u64,
    pub defense_bonus: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct WandFinish {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: u64,
}

pub fn item(id: u32) -> Option<&'static ItemDef> {
    SHOP_ITEMS.iter().find(|i| i.id == id)
}

pub fn creature(id: &str) -> Option<&'static CreatureDef> {
    CREATURES.iter().find(|c| c.id == id)
}

pub fn stock(id: &str) -> Option<&'static StockDef> {
    STOCKS.iter().find(|s| s.id == id)
}

pub fn ingredient(id: &str) -> Option<&'static IngredientDef> {
    INGREDIENTS.iter().find(|i| i.id == id)
}

pub fn recipe(id: &str) -> Option<&'static RecipeDef> {
    RECIPES.iter().find(|r| r.id == id)
}

/// Tier for a given vault level (levels are 1-based).
pub fn vault_tier(level: u32) -> Option<&'static VaultTier> {
    VAULT_TIERS.iter().find(|t| t.level == level)
}

pub fn wand_wood(id: &str) -> Option<&'static WandWood> {
    WAND_WOODS.iter().find(|w| w.id == id)
}

pub fn wand_core(id: &str) -> Option<&'static WandCore> {
    WAND_CORES.iter().find(|c| c.id == id)
}

pub fn wand_finish(id: &str) -> Option<&'static WandFinish> {
    WAND_FINISHES.iter().find(|f| f.id == id)
}
