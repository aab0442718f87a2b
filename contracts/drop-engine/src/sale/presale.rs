use crate::*;
use near_sdk::json_types::Base64VecU8;

#[near]
impl Contract {
    /// Voucher-gated presale purchase. `limit` must match the signed voucher
    /// exactly; the per-wallet counter in the claim book, not the signature,
    /// bounds cumulative use.
    #[payable]
    #[handle_result]
    pub fn enter_presale(
        &mut self,
        signature: Base64VecU8,
        count: u32,
        limit: u32,
    ) -> Result<Vec<u64>, IssuanceError> {
        let buyer_id = env::predecessor_account_id();
        let now = env::block_timestamp();
        let deposit = env::attached_deposit().as_yoctonear();

        if !self.presale_config.is_active(now) {
            return Err(IssuanceError::presale_not_active());
        }
        if count == 0 {
            return Err(IssuanceError::InvalidInput(
                "Count must be at least 1".into(),
            ));
        }
        if self.genesis.total_minted() + count > self.presale_config.supply_limit {
            return Err(IssuanceError::not_enough_remaining("presale"));
        }

        crate::voucher::verify_presale_voucher(
            self.trusted_signer.as_ref(),
            &buyer_id,
            limit,
            &signature.0,
        )?;

        let minted = self.claims.presale_minted_for(&buyer_id);
        if minted + count > limit {
            return Err(IssuanceError::LimitExceeded(format!(
                "Mint limit exceeded: minted {}, requesting {}, limit {}",
                minted, count, limit
            )));
        }

        let total = crate::sale::pricing::total_price(self.presale_config.mint_price.0, count)?;
        if deposit < total {
            return Err(IssuanceError::IncorrectPayment(format!(
                "Required {}, got {}",
                total, deposit
            )));
        }

        self.claims.consume_allowance(&buyer_id, count, limit)?;
        let token_ids = self.genesis.mint_batch(&buyer_id, count);
        self.presale_minted += count;
        self.proceeds += total;

        crate::sale::pricing::refund_excess(&buyer_id, deposit, total);

        events::emit_presale_purchase(&buyer_id, count, U128(total), &token_ids);
        Ok(token_ids)
    }
}
