use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), IssuanceError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(IssuanceError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), IssuanceError> {
        if actor_id != &self.owner_id {
            return Err(IssuanceError::only_owner("contract owner"));
        }
        Ok(())
    }
}

/// Storage key for a `(collection, token id)` ownership fact.
pub(crate) fn input_key(collection: &AccountId, token_id: u64) -> String {
    format!("{}:{}", collection, token_id)
}
