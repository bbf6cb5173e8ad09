// World tick cadence
pub const TICK_INTERVAL_SECS: u64 = 10;

// Dueling
pub const DUEL_ENTRY_FEE: u64 = 50;
pub const DUEL_VICTORY_REWARD: i64 = 100;
pub const DUEL_DEFEAT_PENALTY: i64 = -100;
pub const DUEL_EXCHANGES: u32 = 3;
pub const MATCH_HISTORY_CAP: usize = 20;

// Opponent generation: total power as a multiple of the challenger's,
// split into attack/defense by a uniform share draw.
pub const OPPONENT_WEAKER_MIN: f64 = 0.80;
pub const OPPONENT_WEAKER_MAX: f64 = 0.99;
pub const OPPONENT_STRONGER_MIN: f64 = 1.01;
pub const OPPONENT_STRONGER_MAX: f64 = 1.21;
pub const OPPONENT_ATTACK_SHARE_MIN: f64 = 0.30;
pub const OPPONENT_ATTACK_SHARE_MAX: f64 = 0.70;

// Economy
pub const SELL_PRICE_RATIO: f64 = 0.5;
pub const DISCOUNT_CAP: f64 = 0.5;
pub const STOCK_BUY_FEE: f64 = 1.05;

// Trivia hall
pub const TRIVIA_ENTRY_FEE: u64 = 100;
pub const TRIVIA_REWARD: u64 = 100;
pub const TRIVIA_PENALTY: u64 = 100;

// Creature care
pub const FEED_COST: u64 = 10;
pub const PLAY_COST: u64 = 20;
pub const FEED_HUNGER_RESTORE: f64 = 30.0;
pub const PLAY_HAPPINESS_RESTORE: f64 = 30.0;
pub const GAUGE_MAX: f64 = 100.0;
pub const ADOPTION_STARTING_GAUGE: f64 = 50.0;

// Per-tick decay; 1.0 per 10s tick drains a full gauge in ~17 minutes.
pub const HAPPINESS_DECAY_PER_TICK: f64 = 1.0;
pub const HUNGER_DECAY_PER_TICK: f64 = 1.0;

// Companion eligibility thresholds. Stat and discount bonuses tolerate a
// hungrier creature than passive income does; the two limits are distinct
// on purpose, do not unify them.
pub const BONUS_HAPPINESS_MIN: f64 = 50.0;
pub const BONUS_HUNGER_MIN: f64 = 30.0;
pub const INCOME_HAPPINESS_MIN: f64 = 50.0;
pub const INCOME_HUNGER_MIN: f64 = 50.0;
pub const GOLD_FIND_CHANCE: f64 = 0.30;

// Market walk: step = price * U(-1,1) * volatility * PRICE_STEP_SCALE,
// clamped to [PRICE_FLOOR_RATIO, PRICE_CEIL_RATIO] x base price.
pub const PRICE_STEP_SCALE: f64 = 0.1;
pub const PRICE_FLOOR_RATIO: f64 = 0.1;
pub const PRICE_CEIL_RATIO: f64 = 5.0;

// Crafted wands get ids above this so they never collide with the catalog.
pub const CRAFTED_ITEM_ID_BASE: u32 = 9000;
