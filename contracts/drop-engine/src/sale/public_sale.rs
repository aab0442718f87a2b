use crate::*;

#[near]
impl Contract {
    /// Dutch-auction public purchase. Payment must cover the current price;
    /// the exact excess is refunded in the same call.
    #[payable]
    #[handle_result]
    pub fn enter_public_sale(&mut self, count: u32) -> Result<Vec<u64>, IssuanceError> {
        let buyer_id = env::predecessor_account_id();
        let now = env::block_timestamp();
        let deposit = env::attached_deposit().as_yoctonear();

        if !self.auction_config.is_active(now) {
            return Err(IssuanceError::sale_not_active());
        }
        if count == 0 || count > self.auction_config.tx_limit {
            return Err(IssuanceError::TransactionLimitExceeded(format!(
                "Count must be 1-{}",
                self.auction_config.tx_limit
            )));
        }
        if self.genesis.total_minted() + count > self.auction_config.supply_limit {
            return Err(IssuanceError::not_enough_remaining("public sale"));
        }

        let unit_price = crate::sale::pricing::auction_price(&self.auction_config, now);
        let total = crate::sale::pricing::total_price(unit_price, count)?;
        if deposit < total {
            return Err(IssuanceError::IncorrectPayment(format!(
                "Required {}, got {}",
                total, deposit
            )));
        }

        let token_ids = self.genesis.mint_batch(&buyer_id, count);
        self.proceeds += total;

        crate::sale::pricing::refund_excess(&buyer_id, deposit, total);

        events::emit_public_purchase(&buyer_id, count, U128(unit_price), U128(total), &token_ids);
        Ok(token_ids)
    }
}
