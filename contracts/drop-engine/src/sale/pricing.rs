use crate::*;
use primitive_types::U256;

/// Step-function Dutch auction price at `now`.
///
/// `start_price` before the window opens, then one `price_step` down per
/// elapsed `step_interval`, clamped at `bottom_price` from `bottom_time` on.
/// Non-increasing in `now` by construction.
pub(crate) fn auction_price(config: &DutchAuctionConfig, now: u64) -> u128 {
    let start = config.start_price.0;
    let bottom = config.bottom_price.0;
    if now < config.start_time {
        return start;
    }
    if now >= config.bottom_time {
        return bottom;
    }
    let steps = (now - config.start_time) / config.step_interval;
    let drop = U256::from(steps) * U256::from(config.price_step.0);
    if drop >= U256::from(start - bottom) {
        return bottom;
    }
    start - drop.as_u128()
}

/// Required total payment for `count` tokens at the unit `price`.
pub(crate) fn total_price(price: u128, count: u32) -> Result<u128, IssuanceError> {
    price
        .checked_mul(count as u128)
        .ok_or_else(|| IssuanceError::InvalidInput("Price overflow".into()))
}

/// Returns any excess above `price` to the buyer in the same call. The
/// contract never retains an overpayment.
pub(crate) fn refund_excess(buyer: &AccountId, deposit: u128, price: u128) {
    let refund = deposit.saturating_sub(price);
    if refund > 0 {
        let _ = Promise::new(buyer.clone()).transfer(NearToken::from_yoctonear(refund));
    }
}
