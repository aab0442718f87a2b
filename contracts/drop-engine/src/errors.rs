use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum IssuanceError {
    AccessDenied(String),
    PhaseNotActive(String),
    SupplyExceeded(String),
    TransactionLimitExceeded(String),
    LimitExceeded(String),
    InvalidSignature(String),
    AlreadyUsed(String),
    NotOwner(String),
    IncorrectPayment(String),
    AlreadySet(String),
    AlreadyRolled(String),
    ProvenanceNotSet(String),
    TooEarly(String),
    NoBalance(String),
    InputDisabled(String),
    InvalidInput(String),
    NotFound(String),
    InsufficientDeposit(String),
}

impl std::fmt::Display for IssuanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessDenied(msg) => write!(f, "Access denied: {}", msg),
            Self::PhaseNotActive(msg) => write!(f, "Phase not active: {}", msg),
            Self::SupplyExceeded(msg) => write!(f, "Supply exceeded: {}", msg),
            Self::TransactionLimitExceeded(msg) => {
                write!(f, "Transaction limit exceeded: {}", msg)
            }
            Self::LimitExceeded(msg) => write!(f, "Limit exceeded: {}", msg),
            Self::InvalidSignature(msg) => write!(f, "Invalid signature: {}", msg),
            Self::AlreadyUsed(msg) => write!(f, "Already used: {}", msg),
            Self::NotOwner(msg) => write!(f, "Not owner: {}", msg),
            Self::IncorrectPayment(msg) => write!(f, "Incorrect payment: {}", msg),
            Self::AlreadySet(msg) => write!(f, "Already set: {}", msg),
            Self::AlreadyRolled(msg) => write!(f, "Already rolled: {}", msg),
            Self::ProvenanceNotSet(msg) => write!(f, "Provenance not set: {}", msg),
            Self::TooEarly(msg) => write!(f, "Too early: {}", msg),
            Self::NoBalance(msg) => write!(f, "No balance: {}", msg),
            Self::InputDisabled(msg) => write!(f, "Input disabled: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
        }
    }
}

impl IssuanceError {
    pub fn only_owner(what: &str) -> Self {
        Self::AccessDenied(format!("Only {} can perform this action", what))
    }
    pub fn presale_not_active() -> Self {
        Self::PhaseNotActive("Presale is not active".into())
    }
    pub fn sale_not_active() -> Self {
        Self::PhaseNotActive("Sale is not active".into())
    }
    pub fn mint_not_active() -> Self {
        Self::PhaseNotActive("Mint is not active".into())
    }
    pub fn not_enough_remaining(phase: &str) -> Self {
        Self::SupplyExceeded(format!("Not enough tokens remaining in {}", phase))
    }
    pub fn source_already_used(token_id: u64) -> Self {
        Self::AlreadyUsed(format!("Source token {} has already been used", token_id))
    }
    pub fn input_already_used(collection: &near_sdk::AccountId, token_id: u64) -> Self {
        Self::AlreadyUsed(format!(
            "Input token {}:{} has already been used",
            collection, token_id
        ))
    }
    pub fn source_already_claimed(token_id: u64) -> Self {
        Self::AlreadyUsed(format!("Source token {} has already claimed", token_id))
    }
}
