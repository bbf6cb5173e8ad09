//! The action layer: everything the UI can ask the engine to do, as one
//! enum, and the dispatcher that applies it as a pure transform.
//!
//! `apply_action` never mutates its input. It returns the next snapshot
//! plus events describing what happened, or a tagged error with the
//! world unchanged.

use crate::catalog;
use crate::character::{BattleResult, Character, House};
use crate::economy::ledger;
use crate::economy::LedgerError;
use rand::Rng;

/// A player intent, exactly as the UI layer dispatches it. Catalog
/// entries are referenced by id; the engine does the lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    BuyItem { item_id: u32 },
    EquipItem { item_id: u32 },
    UnequipItem { item_id: u32 },
    SellItem { item_id: u32 },
    StartDuel,
    BuyIngredient { ingredient_id: String },
    BrewPotion { recipe_id: String },
    SellPotion { recipe_id: String },
    AdoptCreature { creature_id: String },
    FeedCreature { instance_id: String },
    PlayWithCreature { instance_id: String },
    BuyStock { stock_id: String, amount: u32 },
    SellStock { stock_id: String, amount: u32 },
    UpgradeVault,
    EnterTrivia,
    AnswerTrivia { question: String, answer: usize },
    CraftWand {
        wood_id: String,
        core_id: String,
        finish_id: String,
    },
    Rename { name: String },
    SwitchHouse { house: House },
}

/// What an applied action did, for logs and notifications.
#[derive(Debug, Clone)]
pub enum ActionEvent {
    ItemPurchased { item_id: u32, price_paid: u64 },
    ItemEquipped { item_id: u32 },
    ItemUnequipped { item_id: u32 },
    ItemSold { item_id: u32, price: u64 },
    DuelResolved { result: BattleResult },
    IngredientPurchased { ingredient_id: String },
    PotionBrewed { recipe_id: String, success: bool },
    PotionSold { recipe_id: String, price: u64 },
    CreatureAdopted { instance_id: String },
    CreatureTended { instance_id: String },
    StockBought { stock_id: String, amount: u32, cost: u64 },
    StockSold {
        stock_id: String,
        amount: u32,
        revenue: u64,
    },
    VaultUpgraded { new_level: u32 },
    TriviaEntered,
    TriviaAnswered { correct: bool },
    WandCrafted { item_id: u32 },
    IdentityUpdated,
}

/// An applied action: the next snapshot plus its events.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub character: Character,
    pub events: Vec<ActionEvent>,
}

impl ActionOutcome {
    fn one(character: Character, event: ActionEvent) -> Self {
        Self {
            character,
            events: vec![event],
        }
    }
}

fn unknown(id: &str) -> LedgerError {
    LedgerError::UnknownCatalogId(id.to_string())
}

/// Applies one action to the snapshot. `now` is the timestamp recorded
/// on anything the action creates (battle records, adoption times).
pub fn apply_action<R: Rng>(
    character: &Character,
    action: Action,
    rng: &mut R,
    now: i64,
) -> Result<ActionOutcome, LedgerError> {
    match action {
        Action::BuyItem { item_id } => {
            let def = catalog::item(item_id).ok_or_else(|| unknown(&item_id.to_string()))?;
            let price_paid = ledger::item_final_price(character, def);
            let next = ledger::buy_item(character, def)?;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::ItemPurchased { item_id, price_paid },
            ))
        }
        Action::EquipItem { item_id } => {
            let next = ledger::equip_item(character, item_id)?;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::ItemEquipped { item_id },
            ))
        }
        Action::UnequipItem { item_id } => {
            let next = ledger::unequip_item(character, item_id)?;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::ItemUnequipped { item_id },
            ))
        }
        Action::SellItem { item_id } => {
            let next = ledger::sell_item(character, item_id)?;
            let price = next.gold - character.gold;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::ItemSold { item_id, price },
            ))
        }
        Action::StartDuel => {
            let outcome = crate::duel::resolve(character, rng, now)?;
            Ok(ActionOutcome::one(
                outcome.character,
                ActionEvent::DuelResolved {
                    result: outcome.result,
                },
            ))
        }
        Action::BuyIngredient { ingredient_id } => {
            let def = catalog::ingredient(&ingredient_id).ok_or_else(|| unknown(&ingredient_id))?;
            let next = ledger::buy_ingredient(character, def)?;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::IngredientPurchased { ingredient_id },
            ))
        }
        Action::BrewPotion { recipe_id } => {
            let recipe = catalog::recipe(&recipe_id).ok_or_else(|| unknown(&recipe_id))?;
            let outcome = ledger::brew_potion(character, recipe, rng)?;
            Ok(ActionOutcome::one(
                outcome.character,
                ActionEvent::PotionBrewed {
                    recipe_id,
                    success: outcome.success,
                },
            ))
        }
        Action::SellPotion { recipe_id } => {
            let recipe = catalog::recipe(&recipe_id).ok_or_else(|| unknown(&recipe_id))?;
            let next = ledger::sell_potion(character, recipe)?;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::PotionSold {
                    recipe_id,
                    price: recipe.sell_price,
                },
            ))
        }
        Action::AdoptCreature { creature_id } => {
            let def = catalog::creature(&creature_id).ok_or_else(|| unknown(&creature_id))?;
            let next = ledger::adopt_creature(character, def, now)?;
            let instance_id = next
                .creatures
                .last()
                .expect("adoption just pushed")
                .instance_id
                .clone();
            Ok(ActionOutcome::one(
                next,
                ActionEvent::CreatureAdopted { instance_id },
            ))
        }
        Action::FeedCreature { instance_id } => {
            let next = ledger::feed_creature(character, &instance_id, now)?;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::CreatureTended { instance_id },
            ))
        }
        Action::PlayWithCreature { instance_id } => {
            let next = ledger::play_with_creature(character, &instance_id, now)?;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::CreatureTended { instance_id },
            ))
        }
        Action::BuyStock { stock_id, amount } => {
            let def = catalog::stock(&stock_id).ok_or_else(|| unknown(&stock_id))?;
            let next = ledger::buy_stock(character, def, amount)?;
            let cost = character.gold - next.gold;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::StockBought {
                    stock_id,
                    amount,
                    cost,
                },
            ))
        }
        Action::SellStock { stock_id, amount } => {
            let def = catalog::stock(&stock_id).ok_or_else(|| unknown(&stock_id))?;
            let next = ledger::sell_stock(character, def, amount)?;
            let revenue = next.gold - character.gold;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::StockSold {
                    stock_id,
                    amount,
                    revenue,
                },
            ))
        }
        Action::UpgradeVault => {
            let next = ledger::upgrade_vault(character)?;
            let new_level = next.vault_level;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::VaultUpgraded { new_level },
            ))
        }
        Action::EnterTrivia => {
            let next = ledger::enter_trivia(character)?;
            Ok(ActionOutcome::one(next, ActionEvent::TriviaEntered))
        }
        Action::AnswerTrivia { question, answer } => {
            let def = catalog::TRIVIA_QUESTIONS
                .iter()
                .find(|q| q.question == question)
                .ok_or_else(|| unknown(&question))?;
            let (next, correct) = ledger::answer_trivia(character, def, answer);
            Ok(ActionOutcome::one(
                next,
                ActionEvent::TriviaAnswered { correct },
            ))
        }
        Action::CraftWand {
            wood_id,
            core_id,
            finish_id,
        } => {
            let wood = catalog::wand_wood(&wood_id).ok_or_else(|| unknown(&wood_id))?;
            let core = catalog::wand_core(&core_id).ok_or_else(|| unknown(&core_id))?;
            let finish = catalog::wand_finish(&finish_id).ok_or_else(|| unknown(&finish_id))?;
            let next = ledger::craft_wand(character, wood, core, finish)?;
            let item_id = next
                .inventory
                .last()
                .expect("craft just pushed")
                .id;
            Ok(ActionOutcome::one(
                next,
                ActionEvent::WandCrafted { item_id },
            ))
        }
        Action::Rename { name } => {
            let mut next = character.clone();
            next.rename(name);
            Ok(ActionOutcome::one(next, ActionEvent::IdentityUpdated))
        }
        Action::SwitchHouse { house } => {
            let mut next = character.clone();
            next.switch_house(house);
            Ok(ActionOutcome::one(next, ActionEvent::IdentityUpdated))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rich() -> Character {
        let mut c = Character::new("Test".to_string(), House::Emberfall);
        c.gold = 50_000;
        c.stats.attack = 100;
        c.stats.defense = 100;
        c
    }

    #[test]
    fn test_failed_action_leaves_snapshot_unchanged() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut c = rich();
        c.gold = 0;
        let before = c.clone();
        let err = apply_action(
            &c,
            Action::BuyItem { item_id: 1001 },
            &mut rng,
            0,
        )
        .unwrap_err();
        assert_eq!(err, LedgerError::InsufficientFunds);
        assert_eq!(c, before);
    }

    #[test]
    fn test_unknown_ids_are_tagged() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let c = rich();
        let err = apply_action(
            &c,
            Action::BuyStock {
                stock_id: "tulips".to_string(),
                amount: 1,
            },
            &mut rng,
            0,
        )
        .unwrap_err();
        assert_eq!(err, LedgerError::UnknownCatalogId("tulips".to_string()));
    }

    #[test]
    fn test_buy_equip_sell_flow_through_actions() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let c = rich();

        let bought = apply_action(&c, Action::BuyItem { item_id: 2001 }, &mut rng, 0).unwrap();
        assert!(matches!(
            bought.events[0],
            ActionEvent::ItemPurchased { item_id: 2001, price_paid: 250 }
        ));

        let equipped = apply_action(
            &bought.character,
            Action::EquipItem { item_id: 2001 },
            &mut rng,
            0,
        )
        .unwrap();
        assert!(equipped.character.equipped.iter().any(|i| i.id == 2001));

        let unequipped = apply_action(
            &equipped.character,
            Action::UnequipItem { item_id: 2001 },
            &mut rng,
            0,
        )
        .unwrap();
        let sold = apply_action(
            &unequipped.character,
            Action::SellItem { item_id: 2001 },
            &mut rng,
            0,
        )
        .unwrap();
        match &sold.events[0] {
            ActionEvent::ItemSold { price, .. } => assert_eq!(*price, 125),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(!sold.character.owns(2001));
    }

    #[test]
    fn test_duel_action_records_history() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let c = rich();
        let outcome = apply_action(&c, Action::StartDuel, &mut rng, 77).unwrap();
        assert_eq!(outcome.character.match_history.len(), 1);
        match &outcome.events[0] {
            ActionEvent::DuelResolved { result } => {
                assert_eq!(result.timestamp, 77);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_stock_round_trip_events_carry_gold_moves() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let c = rich();
        let bought = apply_action(
            &c,
            Action::BuyStock {
                stock_id: "whimsy".to_string(),
                amount: 4,
            },
            &mut rng,
            0,
        )
        .unwrap();
        match &bought.events[0] {
            ActionEvent::StockBought { cost, .. } => assert_eq!(*cost, 210), // floor(50*4*1.05)
            other => panic!("unexpected event {other:?}"),
        }

        let sold = apply_action(
            &bought.character,
            Action::SellStock {
                stock_id: "whimsy".to_string(),
                amount: 4,
            },
            &mut rng,
            0,
        )
        .unwrap();
        match &sold.events[0] {
            ActionEvent::StockSold { revenue, .. } => assert_eq!(*revenue, 200),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(sold.character.portfolio.is_empty());
    }

    #[test]
    fn test_identity_actions() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let c = rich();
        let renamed = apply_action(
            &c,
            Action::Rename {
                name: "Marlow".to_string(),
            },
            &mut rng,
            0,
        )
        .unwrap();
        assert_eq!(renamed.character.name, "Marlow");

        let moved = apply_action(
            &renamed.character,
            Action::SwitchHouse {
                house: House::Frosthollow,
            },
            &mut rng,
            0,
        )
        .unwrap();
        assert_eq!(moved.character.house, House::Frosthollow);
    }
}
