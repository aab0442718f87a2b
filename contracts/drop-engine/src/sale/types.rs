use crate::*;

/// Voucher-gated fixed-price phase. Active while
/// `start_time <= now < end_time`; also bounded by `supply_limit`.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct PresaleConfig {
    /// Nanoseconds since epoch, as `env::block_timestamp` reports.
    pub start_time: u64,
    pub end_time: u64,
    pub supply_limit: u32,
    pub mint_price: U128,
}

impl PresaleConfig {
    pub fn validate(&self) -> Result<(), IssuanceError> {
        if self.start_time >= self.end_time {
            return Err(IssuanceError::InvalidInput(
                "Presale start time must precede end time".into(),
            ));
        }
        Ok(())
    }

    pub fn is_active(&self, now: u64) -> bool {
        self.start_time <= now && now < self.end_time
    }
}

/// Declining-price public phase. Open-ended past `start_time`, bounded only
/// by `supply_limit`; the price stops falling at `bottom_time`.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct DutchAuctionConfig {
    pub tx_limit: u32,
    pub supply_limit: u32,
    pub start_time: u64,
    pub bottom_time: u64,
    /// Nanoseconds between price drops.
    pub step_interval: u64,
    pub start_price: U128,
    pub bottom_price: U128,
    pub price_step: U128,
}

impl DutchAuctionConfig {
    pub fn validate(&self) -> Result<(), IssuanceError> {
        if self.start_time >= self.bottom_time {
            return Err(IssuanceError::InvalidInput(
                "Auction start time must precede bottom time".into(),
            ));
        }
        if self.start_price.0 < self.bottom_price.0 {
            return Err(IssuanceError::InvalidInput(
                "Auction start price must not be below bottom price".into(),
            ));
        }
        if self.step_interval == 0 {
            return Err(IssuanceError::InvalidInput(
                "Auction step interval must be positive".into(),
            ));
        }
        if self.tx_limit == 0 {
            return Err(IssuanceError::InvalidInput(
                "Auction transaction limit must be positive".into(),
            ));
        }
        if self.supply_limit == 0 {
            return Err(IssuanceError::InvalidInput(
                "Auction supply limit must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn is_active(&self, now: u64) -> bool {
        now >= self.start_time
    }
}
