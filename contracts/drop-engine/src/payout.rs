//! Fixed basis-point revenue split over captured sale proceeds.

use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct PayeeSplit {
    pub account_id: AccountId,
    pub share_bps: u16,
}

/// Who may trigger a withdrawal. The split itself is fixed either way, so
/// opening the trigger to anyone only changes when funds move, never where.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WithdrawAccess {
    Anyone,
    OwnerOnly,
}

/// Payees must be non-empty, each share positive, shares summing to exactly
/// 10000 bps.
pub(crate) fn validate_payees(payees: &[PayeeSplit]) -> Result<(), IssuanceError> {
    if payees.is_empty() {
        return Err(IssuanceError::InvalidInput(
            "At least one payee is required".into(),
        ));
    }
    let mut total: u32 = 0;
    for payee in payees {
        if payee.share_bps == 0 {
            return Err(IssuanceError::InvalidInput(format!(
                "Payee {} has a zero share",
                payee.account_id
            )));
        }
        total += payee.share_bps as u32;
    }
    if total != BASIS_POINTS as u32 {
        return Err(IssuanceError::InvalidInput(format!(
            "Payee shares must sum to {} bps, got {}",
            BASIS_POINTS, total
        )));
    }
    Ok(())
}

#[near]
impl Contract {
    /// Disburses all captured proceeds to the fixed payee set. The balance is
    /// captured and zeroed before any transfer is issued, so a re-entrant or
    /// concurrent call sees an empty balance. Floor division per payee; the
    /// sub-yocto remainder goes to the first payee.
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<U128, IssuanceError> {
        if self.withdraw_access == WithdrawAccess::OwnerOnly {
            self.check_contract_owner(&env::predecessor_account_id())?;
        }
        if self.proceeds == 0 {
            return Err(IssuanceError::NoBalance(
                "No proceeds to withdraw".into(),
            ));
        }

        let balance = self.proceeds;
        self.proceeds = 0;

        let mut amounts = Vec::with_capacity(self.payees.len());
        let mut distributed: u128 = 0;
        for payee in &self.payees {
            let amount = balance * payee.share_bps as u128 / BASIS_POINTS as u128;
            distributed += amount;
            amounts.push(amount);
        }
        amounts[0] += balance - distributed;

        for (payee, amount) in self.payees.iter().zip(&amounts) {
            if *amount > 0 {
                let _ = Promise::new(payee.account_id.clone())
                    .transfer(NearToken::from_yoctonear(*amount));
            }
        }

        events::emit_withdrawal(&env::predecessor_account_id(), U128(balance));
        Ok(U128(balance))
    }

    #[payable]
    #[handle_result]
    pub fn set_withdraw_access(
        &mut self,
        access: WithdrawAccess,
    ) -> Result<(), IssuanceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.withdraw_access = access;
        Ok(())
    }
}
