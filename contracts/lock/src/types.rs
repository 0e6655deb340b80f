use soroban_sdk::{contracttype, Address};

/// Immutable lock record, written once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockData {
    pub owner: Address,
    pub token: Address,
    pub amount: i128,
    pub unlock_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LockState {
    Locked,
    Released,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Lock,
    State,
}
