use crate::errors::Error;
use crate::types::AuctionConfig;
use soroban_sdk::Address;

/// Gate for operator-only entry points.
pub fn require_operator(config: &AuctionConfig, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if config.admin != *caller {
        return Err(Error::NotOperator);
    }
    Ok(())
}
