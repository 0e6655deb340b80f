use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::types::LockData;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockCreated {
    pub owner: Address,
    pub token: Address,
    pub amount: i128,
    pub unlock_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    pub amount: i128,
    pub timestamp: u64,
}

pub fn publish_lock_created(env: &Env, data: &LockData) {
    env.events().publish(
        (Symbol::new(env, "locked"),),
        LockCreated {
            owner: data.owner.clone(),
            token: data.token.clone(),
            amount: data.amount,
            unlock_time: data.unlock_time,
        },
    );
}

pub fn publish_withdrawal(env: &Env, amount: i128, timestamp: u64) {
    env.events().publish(
        (Symbol::new(env, "withdrawal"),),
        Withdrawal { amount, timestamp },
    );
}
