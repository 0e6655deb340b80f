use soroban_sdk::Env;

/// Unlock gate for a lock. Construction requires a strictly future unlock
/// time; withdrawal opens at the unlock time itself (inclusive).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timelock {
    pub unlock_time: u64,
}

impl Timelock {
    pub fn new(unlock_time: u64) -> Self {
        Self { unlock_time }
    }

    pub fn is_future_at(&self, now: u64) -> bool {
        self.unlock_time > now
    }

    pub fn is_open_at(&self, now: u64) -> bool {
        now >= self.unlock_time
    }

    pub fn is_future(&self, env: &Env) -> bool {
        self.is_future_at(env.ledger().timestamp())
    }

    pub fn is_open(&self, env: &Env) -> bool {
        self.is_open_at(env.ledger().timestamp())
    }
}
