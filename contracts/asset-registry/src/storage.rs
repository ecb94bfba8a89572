use soroban_sdk::{Address, Env};
use crate::types::{Asset, StorageKey};

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

// ========== Roles ==========

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

pub fn get_minter(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Minter)
}

pub fn set_minter(env: &Env, minter: &Address) {
    env.storage().instance().set(&StorageKey::Minter, minter);
}

// ========== Asset Counter ==========

pub fn get_asset_counter(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::AssetCounter).unwrap_or(0)
}

pub fn increment_asset_counter(env: &Env) -> u64 {
    let counter = get_asset_counter(env) + 1;
    env.storage().instance().set(&StorageKey::AssetCounter, &counter);
    counter
}

// ========== Assets ==========

pub fn get_asset(env: &Env, asset_id: u64) -> Option<Asset> {
    let key = StorageKey::Asset(asset_id);
    let asset = env.storage().persistent().get::<_, Asset>(&key);
    if asset.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    asset
}

pub fn set_asset(env: &Env, asset: &Asset) {
    let key = StorageKey::Asset(asset.asset_id);
    env.storage().persistent().set(&key, asset);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
