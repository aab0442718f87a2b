//! Single-recipient secondary-sale royalty, quoted in basis points.

use crate::*;

#[near]
impl Contract {
    /// Royalty quote for a hypothetical sale price. Floor division; the
    /// token id is accepted for interface uniformity, every token carries the
    /// same rate.
    pub fn royalty_info(&self, _token_id: u64, sale_price: U128) -> (AccountId, U128) {
        let amount = sale_price.0 * self.royalty_bps as u128 / BASIS_POINTS as u128;
        (self.royalty_recipient.clone(), U128(amount))
    }

    #[payable]
    #[handle_result]
    pub fn set_royalties(
        &mut self,
        recipient: AccountId,
        bps: u16,
    ) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if bps > MAX_ROYALTY_BPS {
            return Err(IssuanceError::InvalidInput(format!(
                "Royalty must be at most {} bps",
                MAX_ROYALTY_BPS
            )));
        }
        self.royalty_recipient = recipient;
        self.royalty_bps = bps;
        Ok(())
    }

    pub fn royalty_bps(&self) -> u16 {
        self.royalty_bps
    }

    pub fn royalty_recipient(&self) -> &AccountId {
        &self.royalty_recipient
    }
}
