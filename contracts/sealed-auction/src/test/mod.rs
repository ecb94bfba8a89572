
use crate::{SealedAuctionContract, SealedAuctionContractClient};
use asset_registry::{AssetRegistryContract, AssetRegistryContractClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger},
    token, Address, BytesN, Env, Event, String, Symbol, TryFromVal,
};

pub const FEE: i128 = 100;
pub const DURATION: u64 = 3600;
pub const START: u64 = 1_000;
pub const BIDDER_FUNDS: i128 = 10_000;

pub struct Setup {
    pub env: Env,
    pub client: SealedAuctionContractClient<'static>,
    pub registry: AssetRegistryContractClient<'static>,
    pub admin: Address,
    pub token_address: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

/// Everything deployed and wired, but the engine not yet initialized.
pub fn setup_uninitialized() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = START);

    let contract_id = env.register(SealedAuctionContract, ());
    let client = SealedAuctionContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);

    let registry_id = env.register(AssetRegistryContract, ());
    let registry = AssetRegistryContractClient::new(&env, &registry_id);
    registry.initialize(&admin, &contract_id);

    let token_issuer = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_issuer);
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin = token::StellarAssetClient::new(&env, &token_address);

    Setup {
        env,
        client,
        registry,
        admin,
        token_address,
        token,
        token_admin,
    }
}

pub fn setup_test() -> Setup {
    let setup = setup_uninitialized();
    setup.client.initialize(
        &setup.admin,
        &setup.token_address,
        &FEE,
        &setup.registry.address,
    );
    setup
}

/// A fresh auction running for `DURATION` seconds from now.
pub fn create_auction(setup: &Setup) -> u64 {
    setup.client.create_auction(&setup.admin, &DURATION)
}

pub fn new_bidder(setup: &Setup) -> Address {
    let bidder = Address::generate(&setup.env);
    setup.token_admin.mint(&bidder, &BIDDER_FUNDS);
    bidder
}

pub fn nonce(env: &Env, seed: u8) -> BytesN<32> {
    let mut bytes = [0u8; 32];
    bytes[0] = seed;
    bytes[31] = seed.wrapping_mul(7);
    BytesN::from_array(env, &bytes)
}

/// Commit `value` for `bidder` with the exact fee.
pub fn commit(setup: &Setup, auction_id: u64, bidder: &Address, value: u128, seed: u8) {
    let hash = setup
        .client
        .compute_commitment(&value, &nonce(&setup.env, seed), bidder);
    setup.client.place_bid(&auction_id, bidder, &hash, &FEE);
}

pub fn reveal(setup: &Setup, auction_id: u64, bidder: &Address, value: u128, seed: u8) {
    setup
        .client
        .reveal_bid(&auction_id, bidder, &value, &nonce(&setup.env, seed));
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

pub fn metadata(env: &Env) -> String {
    String::from_str(env, "ipfs://lot-1")
}

/// Whether the engine published exactly this event, topics and data included.
pub fn published(setup: &Setup, event: &impl Event) -> bool {
    let env = &setup.env;
    env.events().all().contains((
        setup.client.address.clone(),
        event.topics(env),
        event.data(env),
    ))
}

/// Number of engine events whose leading topic is `name`.
pub fn count_published(setup: &Setup, name: &str) -> u32 {
    let env = &setup.env;
    let name = Symbol::new(env, name);
    let mut count = 0;
    for (contract, topics, _) in env.events().all().iter() {
        if contract != setup.client.address {
            continue;
        }
        let leading = topics
            .first()
            .and_then(|topic| Symbol::try_from_val(env, &topic).ok());
        if leading == Some(name.clone()) {
            count += 1;
        }
    }
    count
}
