use soroban_sdk::contracterror;

/// Error codes for the asset registry.
/// Uses codes starting at 600 so they never collide with the auction engine's.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 600,
    NotInitialized = 601,
    Unauthorized = 602,
    AssetNotFound = 603,
}
