#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::Asset;

use events::{AssetMinted, MinterChanged, RegistryInitialized};

/// Mint-only ledger of unique records.
///
/// Exactly one address, the minter, may create records. The sealed auction
/// engine is registered as minter and mints one record per finalized auction.
#[contract]
pub struct AssetRegistryContract;

#[contractimpl]
impl AssetRegistryContract {
    // ========== INITIALIZATION ==========

    /// Initialize the registry with an admin and the single authorized minter
    pub fn initialize(env: Env, admin: Address, minter: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_initialized(&env);
        storage::set_admin(&env, &admin);
        storage::set_minter(&env, &minter);

        RegistryInitialized { admin, minter }.publish(&env);

        Ok(())
    }

    // ========== MINTING (Minter Only) ==========

    /// Mint one record owned by `owner`. Ids start at 1 and are never reused.
    pub fn mint_one(
        env: Env,
        minter: Address,
        owner: Address,
        metadata: String,
    ) -> Result<u64, Error> {
        Self::require_initialized(&env)?;
        Self::require_minter(&env, &minter)?;

        let asset_id = storage::increment_asset_counter(&env);

        let asset = Asset {
            asset_id,
            owner: owner.clone(),
            metadata,
            minted_at: env.ledger().timestamp(),
        };
        storage::set_asset(&env, &asset);

        AssetMinted { owner, asset_id }.publish(&env);

        Ok(asset_id)
    }

    // ========== ACCESS CONTROL ==========

    /// Replace the authorized minter
    pub fn set_minter(env: Env, admin: Address, minter: Address) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        Self::require_admin(&env, &admin)?;

        let old_minter = storage::get_minter(&env).ok_or(Error::NotInitialized)?;
        storage::set_minter(&env, &minter);

        MinterChanged {
            old_minter,
            new_minter: minter,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_minter(env: Env) -> Result<Address, Error> {
        storage::get_minter(&env).ok_or(Error::NotInitialized)
    }

    // ========== QUERIES ==========

    pub fn get_asset(env: Env, asset_id: u64) -> Result<Asset, Error> {
        storage::get_asset(&env, asset_id).ok_or(Error::AssetNotFound)
    }

    pub fn owner_of(env: Env, asset_id: u64) -> Result<Address, Error> {
        storage::get_asset(&env, asset_id)
            .map(|asset| asset.owner)
            .ok_or(Error::AssetNotFound)
    }

    /// Number of records minted so far
    pub fn total_minted(env: Env) -> u64 {
        storage::get_asset_counter(&env)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        admin.require_auth();
        let stored_admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        if *admin != stored_admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn require_minter(env: &Env, minter: &Address) -> Result<(), Error> {
        minter.require_auth();
        let stored_minter = storage::get_minter(env).ok_or(Error::NotInitialized)?;
        if *minter != stored_minter {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test;
