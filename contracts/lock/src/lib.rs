#![no_std]

use soroban_sdk::{
    contract, contractimpl, contractmeta,
    token, Address, Env,
};

pub mod errors;
pub mod events;
pub mod storage;
pub mod timelock;
pub mod types;


pub use errors::*;
pub use events::*;
pub use types::*;

use storage::LockStorage;
use timelock::Timelock;

contractmeta!(
    key = "Description",
    val = "Time-locked single-owner custody of a token balance"
);

#[contract]
pub struct LockContract;

#[contractimpl]
impl LockContract {
    /// Create the lock: the depositor becomes the owner, the deposit moves
    /// into the contract, and nothing can leave before `unlock_time`.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        amount: i128,
        unlock_time: u64,
    ) -> Result<(), LockError> {
        owner.require_auth();

        if LockStorage::exists(&env) {
            return Err(LockError::AlreadyInitialized);
        }
        if amount < 0 {
            return Err(LockError::InvalidAmount);
        }
        // Unlock time must be strictly in the future; checked once, here.
        if !Timelock::new(unlock_time).is_future(&env) {
            return Err(LockError::InvalidUnlockTime);
        }

        let data = LockData {
            owner: owner.clone(),
            token: token.clone(),
            amount,
            unlock_time,
        };

        // Store lock data
        LockStorage::create(&env, &data);

        // Pull the deposit into the contract
        let token_client = token::Client::new(&env, &token);
        token_client.transfer(&owner, &env.current_contract_address(), &amount);

        // Emit event
        events::publish_lock_created(&env, &data);

        Ok(())
    }

    /// Release the full balance to the owner. Permitted only at or after
    /// the unlock time, only for the owner, and only once.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), LockError> {
        caller.require_auth();

        let data = LockStorage::get(&env).ok_or(LockError::NotInitialized)?;

        // Verify timelock
        if !Timelock::new(data.unlock_time).is_open(&env) {
            return Err(LockError::NotYetUnlocked);
        }

        // Only the owner can withdraw
        if caller != data.owner {
            return Err(LockError::Unauthorized);
        }

        // A released lock stays released
        if LockStorage::get_state(&env) != Some(LockState::Locked) {
            return Err(LockError::AlreadyWithdrawn);
        }

        // Emit event
        events::publish_withdrawal(&env, data.amount, env.ledger().timestamp());

        // Pay out the full balance
        let token_client = token::Client::new(&env, &data.token);
        token_client.transfer(&env.current_contract_address(), &data.owner, &data.amount);

        // Update state
        LockStorage::set_state(&env, &LockState::Released);

        Ok(())
    }

    /// Get the owner set at initialization
    pub fn owner(env: Env) -> Result<Address, LockError> {
        let data = LockStorage::get(&env).ok_or(LockError::NotInitialized)?;
        Ok(data.owner)
    }

    /// Get the unlock time set at initialization
    pub fn unlock_time(env: Env) -> Result<u64, LockError> {
        let data = LockStorage::get(&env).ok_or(LockError::NotInitialized)?;
        Ok(data.unlock_time)
    }

    /// Get the held balance: the deposited amount while locked, zero after
    /// withdrawal.
    pub fn balance(env: Env) -> Result<i128, LockError> {
        let data = LockStorage::get(&env).ok_or(LockError::NotInitialized)?;
        match LockStorage::get_state(&env) {
            Some(LockState::Locked) => Ok(data.amount),
            _ => Ok(0),
        }
    }

    /// Get the lock state
    pub fn state(env: Env) -> Result<LockState, LockError> {
        LockStorage::get_state(&env).ok_or(LockError::NotInitialized)
    }
}
