use soroban_sdk::Env;
use crate::types::{DataKey, LockData, LockState};

pub struct LockStorage;

impl LockStorage {
    pub fn create(env: &Env, data: &LockData) {
        env.storage().persistent().set(&DataKey::Lock, data);
        env.storage().persistent().set(&DataKey::State, &LockState::Locked);
    }

    pub fn exists(env: &Env) -> bool {
        env.storage().persistent().has(&DataKey::Lock)
    }

    pub fn get(env: &Env) -> Option<LockData> {
        env.storage().persistent().get(&DataKey::Lock)
    }

    pub fn get_state(env: &Env) -> Option<LockState> {
        env.storage().persistent().get(&DataKey::State)
    }

    pub fn set_state(env: &Env, state: &LockState) {
        env.storage().persistent().set(&DataKey::State, state);
    }
}
