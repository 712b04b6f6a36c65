use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

/// Post-sale valuation policy
///
/// A completed trade re-values the player somewhere in
/// `[market_value, market_value * 1.1)`. Production draws the appreciation
/// at random; tests inject a fixed rate so settlements stay reproducible.
pub trait ValuationPolicy: Send + Sync {
    /// Returns the player's new market value after a sale.
    fn appreciate(&self, market_value: Decimal) -> Decimal;
}

/// Uniform random appreciation of up to 10%.
pub struct RandomAppreciation;

impl ValuationPolicy for RandomAppreciation {
    fn appreciate(&self, market_value: Decimal) -> Decimal {
        let draw: f64 = rand::thread_rng().gen_range(0.0..0.1);
        let rate = Decimal::from_f64_retain(draw).unwrap_or(Decimal::ZERO);
        // truncate so the result stays strictly below value * 1.1
        (market_value * (Decimal::ONE + rate))
            .round_dp_with_strategy(2, RoundingStrategy::ToZero)
    }
}

/// Fixed appreciation rate, for deterministic settlements in tests.
pub struct FixedAppreciation {
    rate: Decimal,
}

impl FixedAppreciation {
    /// `rate` is the fractional appreciation, expected in `[0, 0.1)`.
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }
}

impl ValuationPolicy for FixedAppreciation {
    fn appreciate(&self, market_value: Decimal) -> Decimal {
        (market_value * (Decimal::ONE + self.rate))
            .round_dp_with_strategy(2, RoundingStrategy::ToZero)
    }
}
