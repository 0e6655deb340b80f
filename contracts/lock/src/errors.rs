use soroban_sdk::contracterror;

/// Contract error codes. The numeric values are part of the ABI.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LockError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    InvalidUnlockTime = 4,
    NotYetUnlocked = 5,
    Unauthorized = 6,
    AlreadyWithdrawn = 7,
}
