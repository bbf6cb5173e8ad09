//! Arcanum Headless Simulator
//!
//! Runs the world tick loop plus a scripted player policy with no UI,
//! collecting economy metrics for balance analysis. Uses the same engine
//! the real game drives.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --ticks N     Ticks to simulate (default: 8640 = one day at 10s/tick)
//!   --seed N      RNG seed (default: 42)
//!   --gold N      Starting gold (default: 2000)
//!   --verbose     Per-tick event logging
//!   --help        Show usage

use arcanum::catalog;
use arcanum::character::{Character, House};
use arcanum::core::actions::{Action, ActionEvent};
use arcanum::core::engine::Engine;
use arcanum::world::tick::WorldTickEvent;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    ticks: u64,
    seed: u64,
    gold: u64,
    verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: 8_640,
            seed: 42,
            gold: 2_000,
            verbose: false,
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                i += 1;
                config.ticks = args[i].parse().expect("--ticks requires a number");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("--seed requires a number");
            }
            "--gold" => {
                i += 1;
                config.gold = args[i].parse().expect("--gold requires a number");
            }
            "--verbose" => config.verbose = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn print_usage() {
    eprintln!(
        "Arcanum Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --ticks N     Ticks to simulate (default: 8640 = one day)\n\
         \x20 --seed N      RNG seed (default: 42)\n\
         \x20 --gold N      Starting gold (default: 2000)\n\
         \x20 --verbose     Per-tick event logging\n\
         \x20 --help, -h    Show this help"
    );
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Default)]
struct SimStats {
    duels_won: u64,
    duels_lost: u64,
    passive_income: u64,
    income_events: u64,
    brews_succeeded: u64,
    brews_failed: u64,
    stock_spent: u64,
    stock_earned: u64,
    feeds: u64,
    plays: u64,
}

fn main() {
    env_logger::init();
    let config = parse_args();

    println!(
        "arcanum simulator {} ({})  seed={} ticks={} gold={}",
        env!("CARGO_PKG_VERSION"),
        arcanum::build_info::BUILD_DATE,
        config.seed,
        config.ticks,
        config.gold
    );

    let mut character = Character::new("Simulated Apprentice".to_string(), House::Galewind);
    character.gold = config.gold;
    character.stats.attack = 60;
    character.stats.defense = 40;

    let rng = StdRng::seed_from_u64(config.seed);
    let mut engine = Engine::new(character, rng);
    let mut stats = SimStats::default();

    // Opening moves: a gold finder, a bargain hunter, basic kit.
    for action in [
        Action::AdoptCreature {
            creature_id: "moon_owl".to_string(),
        },
        Action::AdoptCreature {
            creature_id: "lynx_familiar".to_string(),
        },
        Action::BuyItem { item_id: 1001 },
        Action::EquipItem { item_id: 1001 },
    ] {
        if let Err(e) = engine.apply_at(action.clone(), 0) {
            log::info!("opening move {action:?} skipped: {e}");
        }
    }

    for tick in 0..config.ticks {
        let now = tick as i64;

        for event in engine.tick() {
            let WorldTickEvent::GoldFound { creature_name, amount } = &event;
            stats.passive_income += amount;
            stats.income_events += 1;
            if config.verbose {
                println!("[{tick}] {creature_name} found {amount} gold");
            }
        }

        run_policy(&mut engine, &mut stats, tick, now, config.verbose);
    }

    print_summary(&engine, &stats, config.ticks);
}

/// A deliberately simple player: keep companions tended, duel on a
/// cadence, dabble in stocks and potions when the purse allows.
fn run_policy(
    engine: &mut Engine<StdRng>,
    stats: &mut SimStats,
    tick: u64,
    now: i64,
    verbose: bool,
) {
    // Tend neglected companions before anything else.
    let needy: Vec<(String, bool, bool)> = engine
        .character()
        .creatures
        .iter()
        .map(|c| (c.instance_id.clone(), c.hunger < 40.0, c.happiness < 40.0))
        .collect();
    for (instance_id, hungry, bored) in needy {
        if hungry
            && engine
                .apply_at(
                    Action::FeedCreature {
                        instance_id: instance_id.clone(),
                    },
                    now,
                )
                .is_ok()
        {
            stats.feeds += 1;
        }
        if bored
            && engine
                .apply_at(Action::PlayWithCreature { instance_id }, now)
                .is_ok()
        {
            stats.plays += 1;
        }
    }

    // Duel every 30 ticks with a cushion for the fee.
    if tick % 30 == 0 && engine.character().gold >= 200 {
        if let Ok(events) = engine.apply_at(Action::StartDuel, now) {
            for event in events {
                if let ActionEvent::DuelResolved { result } = event {
                    if result.victory {
                        stats.duels_won += 1;
                    } else {
                        stats.duels_lost += 1;
                    }
                    if verbose {
                        println!(
                            "[{tick}] duel vs {}: {}",
                            result.opponent_name,
                            if result.victory { "victory" } else { "defeat" }
                        );
                    }
                }
            }
        }
    }

    // Drip into the market, cash out periodically.
    if tick % 50 == 10 && engine.character().gold > 500 {
        if let Ok(events) = engine.apply_at(
            Action::BuyStock {
                stock_id: "whimsy".to_string(),
                amount: 2,
            },
            now,
        ) {
            for event in events {
                if let ActionEvent::StockBought { cost, .. } = event {
                    stats.stock_spent += cost;
                }
            }
        }
    }
    if tick % 400 == 399 {
        let held = engine
            .character()
            .portfolio
            .get("whimsy")
            .map(|p| p.shares)
            .unwrap_or(0);
        if held > 0 {
            if let Ok(events) = engine.apply_at(
                Action::SellStock {
                    stock_id: "whimsy".to_string(),
                    amount: held,
                },
                now,
            ) {
                for event in events {
                    if let ActionEvent::StockSold { revenue, .. } = event {
                        stats.stock_earned += revenue;
                    }
                }
            }
        }
    }

    // Keep a boil-cure pipeline going: stock up, brew, sell the output.
    if tick % 25 == 5 && engine.character().gold > 300 {
        let recipe = catalog::recipe("boil_cure").expect("catalog recipe");
        for ingredient_id in recipe.ingredients {
            let _ = engine.apply_at(
                Action::BuyIngredient {
                    ingredient_id: ingredient_id.to_string(),
                },
                now,
            );
        }
        if let Ok(events) = engine.apply_at(
            Action::BrewPotion {
                recipe_id: recipe.id.to_string(),
            },
            now,
        ) {
            for event in events {
                if let ActionEvent::PotionBrewed { success, .. } = event {
                    if success {
                        stats.brews_succeeded += 1;
                        let _ = engine.apply_at(
                            Action::SellPotion {
                                recipe_id: recipe.id.to_string(),
                            },
                            now,
                        );
                    } else {
                        stats.brews_failed += 1;
                    }
                }
            }
        }
    }
}

fn print_summary(engine: &Engine<StdRng>, stats: &SimStats, ticks: u64) {
    let character = engine.character();
    println!();
    println!("== after {ticks} ticks ==");
    println!(
        "gold {:>8}   net worth {:>10.0}   vault L{}",
        character.gold,
        character.net_worth(),
        character.vault_level
    );
    println!(
        "duels {}W/{}L   history {} entries",
        stats.duels_won,
        stats.duels_lost,
        character.match_history.len()
    );
    println!(
        "passive income {} gold over {} finds",
        stats.passive_income, stats.income_events
    );
    println!(
        "brews {} ok / {} failed   stocks spent {} / earned {}",
        stats.brews_succeeded, stats.brews_failed, stats.stock_spent, stats.stock_earned
    );
    println!(
        "care: {} feeds, {} plays across {} companions",
        stats.feeds,
        stats.plays,
        character.creatures.len()
    );
    println!();
    println!("{:<6} {:>10} {:>10}", "ticker", "base", "last");
    for stock in catalog::STOCKS {
        println!(
            "{:<6} {:>10.2} {:>10.2}",
            stock.ticker,
            stock.base_price,
            character.market_price(stock.id)
        );
    }
}
