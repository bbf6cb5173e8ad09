//! Duel resolution. The outcome is a pure function of the challenger's
//! aggregated power and the generated opponent's total; narration is
//! produced afterwards from the same numbers and has no say in it.

use crate::catalog::OPPONENT_NAMES;
use crate::character::stats::{effective_attack, total_power};
use crate::character::{BattleResult, Character};
use crate::core::constants::{
    DUEL_DEFEAT_PENALTY, DUEL_ENTRY_FEE, DUEL_EXCHANGES, DUEL_VICTORY_REWARD,
    OPPONENT_ATTACK_SHARE_MAX, OPPONENT_ATTACK_SHARE_MIN, OPPONENT_STRONGER_MAX,
    OPPONENT_STRONGER_MIN, OPPONENT_WEAKER_MAX, OPPONENT_WEAKER_MIN,
};
use crate::duel::types::{DuelOutcome, Opponent};
use crate::economy::LedgerError;
use rand::Rng;

/// Draws an opponent balanced around the challenger's total power: a fair
/// coin picks the weaker or stronger band, the total lands uniformly in
/// that band, and an attack share in [0.30, 0.70] splits it.
pub fn generate_opponent<R: Rng>(challenger_power: u32, rng: &mut R) -> Opponent {
    let name = OPPONENT_NAMES[rng.gen_range(0..OPPONENT_NAMES.len())].to_string();

    let factor = if rng.gen_bool(0.5) {
        rng.gen_range(OPPONENT_WEAKER_MIN..OPPONENT_WEAKER_MAX)
    } else {
        rng.gen_range(OPPONENT_STRONGER_MIN..OPPONENT_STRONGER_MAX)
    };
    let total = challenger_power as f64 * factor;

    let attack_share = rng.gen_range(OPPONENT_ATTACK_SHARE_MIN..OPPONENT_ATTACK_SHARE_MAX);
    Opponent {
        name,
        attack: total * attack_share,
        defense: total * (1.0 - attack_share),
    }
}

/// The victory rule, and nothing else: a direct total-power comparison.
pub fn challenger_wins(challenger_power: u32, opponent_total: f64) -> bool {
    challenger_power as f64 >= opponent_total
}

/// Resolves a full duel against the given snapshot: entry fee, opponent
/// generation, verdict, settlement and history. Returns the new snapshot
/// inside the outcome; the input is untouched.
pub fn resolve<R: Rng>(
    character: &Character,
    rng: &mut R,
    now: i64,
) -> Result<DuelOutcome, LedgerError> {
    if character.gold < DUEL_ENTRY_FEE {
        return Err(LedgerError::InsufficientFunds);
    }

    let power = total_power(character);
    let opponent = generate_opponent(power, rng);
    let victory = challenger_wins(power, opponent.total_power());
    let gold_delta = if victory {
        DUEL_VICTORY_REWARD
    } else {
        DUEL_DEFEAT_PENALTY
    };

    let log = narrate(character, &opponent, victory, rng);

    let mut next = character.clone();
    // The one settlement that clamps instead of failing closed: the fee
    // was affordable, the penalty may overdraw.
    let settled = (next.gold - DUEL_ENTRY_FEE) as i64 + gold_delta;
    next.gold = settled.max(0) as u64;
    if victory {
        next.stats.wins += 1;
    } else {
        next.stats.losses += 1;
    }

    let result = BattleResult {
        victory,
        gold_delta,
        opponent_name: opponent.name.clone(),
        log,
        timestamp: now,
    };
    next.push_battle_result(result.clone());

    Ok(DuelOutcome {
        character: next,
        result,
        opponent,
    })
}

/// Scripted exchange log. Damage figures riff on the real stats but the
/// verdict is already decided when this runs.
fn narrate<R: Rng>(
    character: &Character,
    opponent: &Opponent,
    victory: bool,
    rng: &mut R,
) -> Vec<String> {
    let attack = effective_attack(character) as f64;
    let mut log = Vec::with_capacity(2 + 2 * DUEL_EXCHANGES as usize + 1);
    log.push(format!("Duel started against {}!", opponent.name));
    log.push("Entry fee paid.".to_string());

    for _ in 0..DUEL_EXCHANGES {
        let dealt = (attack * rng.gen_range(0.8..1.2)).floor() as u64;
        log.push(format!(
            "You cast a spell! Hit {} for {} damage.",
            opponent.name, dealt
        ));
        let taken = (opponent.attack * rng.gen_range(0.8..1.2)).floor() as u64;
        log.push(format!(
            "{} retaliates! You take {} damage.",
            opponent.name, taken
        ));
    }

    if victory {
        log.push(format!("You stunned {}! Victory!", opponent.name));
    } else {
        log.push(format!("You were disarmed by {}. Defeat.", opponent.name));
    }
    log
}
