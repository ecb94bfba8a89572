use soroban_sdk::{token, Address, Env};

/// Pull the application fee from the bidder into the contract.
pub fn collect_fee(env: &Env, fee_token: &Address, bidder: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, fee_token);
    token_client.transfer(bidder, &env.current_contract_address(), &amount);
}

/// Pay the whole escrow of an auction out to `to`.
pub fn release(env: &Env, fee_token: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        let token_client = token::TokenClient::new(env, fee_token);
        token_client.transfer(&env.current_contract_address(), to, &amount);
    }
}
