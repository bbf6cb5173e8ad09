//! Per-instrument price movement: a volatility-scaled random step,
//! clamped to a band around the base price.

use crate::catalog::StockDef;
use crate::core::constants::{PRICE_CEIL_RATIO, PRICE_FLOOR_RATIO, PRICE_STEP_SCALE};
use rand::Rng;

/// Advances one instrument's price by a single tick.
///
/// `step = price * U(-1,1) * volatility * 0.1`, with the result clamped
/// to `[0.1 * base, 5 * base]`.
pub fn step_price<R: Rng>(stock: &StockDef, current: f64, rng: &mut R) -> f64 {
    let drift = (rng.gen::<f64>() - 0.5) * 2.0;
    let step = current * drift * stock.volatility * PRICE_STEP_SCALE;
    (current + step).clamp(
        stock.base_price * PRICE_FLOOR_RATIO,
        stock.base_price * PRICE_CEIL_RATIO,
    )
}
