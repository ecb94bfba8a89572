use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// keccak256(bid_value as 16 big-endian bytes || nonce || XDR(bidder)).
///
/// Hashing the bidder in means a commitment copied from another participant
/// can never be opened by the copier.
pub fn compute(env: &Env, bid_value: u128, nonce: &BytesN<32>, bidder: &Address) -> BytesN<32> {
    let mut preimage = Bytes::from_array(env, &bid_value.to_be_bytes());
    preimage.append(&Bytes::from_array(env, &nonce.to_array()));
    preimage.append(&bidder.clone().to_xdr(env));
    env.crypto().keccak256(&preimage).into()
}

pub fn opens(
    env: &Env,
    stored: &BytesN<32>,
    bid_value: u128,
    nonce: &BytesN<32>,
    bidder: &Address,
) -> bool {
    compute(env, bid_value, nonce, bidder) == *stored
}

pub fn is_zero(hash: &BytesN<32>) -> bool {
    hash.to_array() == [0u8; 32]
}
