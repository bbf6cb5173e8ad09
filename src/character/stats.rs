//! Effective combat stats: base values plus equipped item bonuses plus
//! whatever eligible companions contribute. Pure reads, used by the duel
//! resolver and by the shop's discount math.

use crate::catalog::BonusKind;
use crate::character::Character;
use crate::core::constants::DISCOUNT_CAP;

/// Total attack: base stat + equipped items + eligible `AttackBoost`
/// companions.
pub fn effective_attack(character: &Character) -> u32 {
    character.stats.attack
        + equipped_bonus(character, |i| i.0)
        + companion_stat_bonus(character, BonusKind::AttackBoost)
}

/// Total defense: base stat + equipped items + eligible `DefenseBoost`
/// companions.
pub fn effective_defense(character: &Character) -> u32 {
    character.stats.defense
        + equipped_bonus(character, |i| i.1)
        + companion_stat_bonus(character, BonusKind::DefenseBoost)
}

/// Combined power used by the duel resolver.
pub fn total_power(character: &Character) -> u32 {
    effective_attack(character) + effective_defense(character)
}

/// Summed shop discount from eligible `Discount` companions, capped at
/// [`DISCOUNT_CAP`].
pub fn companion_discount(character: &Character) -> f64 {
    let total: f64 = character
        .creatures
        .iter()
        .filter(|c| c.bonus == BonusKind::Discount && c.bonus_eligible())
        .map(|c| c.bonus_value)
        .sum();
    total.min(DISCOUNT_CAP)
}

fn equipped_bonus(character: &Character, pick: fn((u32, u32)) -> u32) -> u32 {
    character
        .equipped
        .iter()
        .map(|i| pick((i.attack, i.defense)))
        .sum()
}

fn companion_stat_bonus(character: &Character, kind: BonusKind) -> u32 {
    character
        .creatures
        .iter()
        .filter(|c| c.bonus == kind && c.bonus_eligible())
        .map(|c| c.bonus_value as u32)
        .sum()
}
