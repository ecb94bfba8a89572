use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the asset registry
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Admin,
    Minter,
    Initialized,
    AssetCounter,
    Asset(u64),
}

/// A minted, non-duplicable record
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Asset {
    pub asset_id: u64,
    pub owner: Address,
    pub metadata: String,
    pub minted_at: u64,
}
