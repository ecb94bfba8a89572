#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    Address, Env, String,
};

use crate::{AssetRegistryContract, AssetRegistryContractClient, Error};

fn setup_test() -> (Env, Address, Address, AssetRegistryContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 1000000,
    });

    let contract_id = env.register(AssetRegistryContract, ());
    let client = AssetRegistryContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);

    (env, admin, minter, client)
}

#[test]
fn test_registry_initialization() {
    let (_env, admin, minter, client) = setup_test();

    client.initialize(&admin, &minter);

    assert_eq!(client.get_minter(), minter);
    assert_eq!(client.total_minted(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #600)")] // AlreadyInitialized
fn test_double_initialization() {
    let (_env, admin, minter, client) = setup_test();

    client.initialize(&admin, &minter);
    client.initialize(&admin, &minter);
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let (env, admin, minter, client) = setup_test();
    client.initialize(&admin, &minter);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let first = client.mint_one(&minter, &alice, &String::from_str(&env, "lot-1"));
    let second = client.mint_one(&minter, &bob, &String::from_str(&env, "lot-2"));

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(client.total_minted(), 2);

    let asset = client.get_asset(&first);
    assert_eq!(asset.owner, alice);
    assert_eq!(asset.metadata, String::from_str(&env, "lot-1"));
    assert_eq!(asset.minted_at, 1000);
    assert_eq!(client.owner_of(&second), bob);
}

#[test]
fn test_mint_rejects_non_minter() {
    let (env, admin, minter, client) = setup_test();
    client.initialize(&admin, &minter);

    let intruder = Address::generate(&env);
    let owner = Address::generate(&env);

    let result = client.try_mint_one(&intruder, &owner, &String::from_str(&env, "lot"));
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert_eq!(client.total_minted(), 0);
}

#[test]
fn test_mint_before_initialize_fails() {
    let (env, _, minter, client) = setup_test();
    let owner = Address::generate(&env);

    let result = client.try_mint_one(&minter, &owner, &String::from_str(&env, "lot"));
    assert_eq!(result, Err(Ok(Error::NotInitialized)));
}

#[test]
fn test_set_minter() {
    let (env, admin, minter, client) = setup_test();
    client.initialize(&admin, &minter);

    let new_minter = Address::generate(&env);
    client.set_minter(&admin, &new_minter);
    assert_eq!(client.get_minter(), new_minter);

    let owner = Address::generate(&env);
    let result = client.try_mint_one(&minter, &owner, &String::from_str(&env, "lot"));
    assert_eq!(result, Err(Ok(Error::Unauthorized)));

    let id = client.mint_one(&new_minter, &owner, &String::from_str(&env, "lot"));
    assert_eq!(client.owner_of(&id), owner);
}

#[test]
#[should_panic(expected = "Error(Contract, #602)")] // Unauthorized
fn test_set_minter_requires_admin() {
    let (env, admin, minter, client) = setup_test();
    client.initialize(&admin, &minter);

    let intruder = Address::generate(&env);
    client.set_minter(&intruder, &intruder);
}

#[test]
fn test_unknown_asset() {
    let (_env, admin, minter, client) = setup_test();
    client.initialize(&admin, &minter);

    assert_eq!(client.try_get_asset(&42), Err(Ok(Error::AssetNotFound)));
    assert_eq!(client.try_owner_of(&42), Err(Ok(Error::AssetNotFound)));
}
