use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryInitialized {
    #[topic]
    pub admin: Address,
    pub minter: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetMinted {
    #[topic]
    pub owner: Address,
    pub asset_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinterChanged {
    pub old_minter: Address,
    pub new_minter: Address,
}
