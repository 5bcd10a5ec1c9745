use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places carried by every monetary figure
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary figure to two decimal places, midpoint away from zero.
///
/// Every tax figure passes through here exactly once; callers never re-round
/// an already-rounded value at a finer scale.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
