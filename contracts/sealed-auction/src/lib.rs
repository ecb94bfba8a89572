#![no_std]

mod admin;
mod commitment;
mod errors;
mod escrow;
mod events;
mod phase;
mod registry;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String};

pub use errors::{Error, ErrorKind};
pub use phase::Phase;
pub use types::{Auction, AuctionConfig, Commitment, FinalizeOutcome, StatusReport};

use events::{
    AdminTransferred, AuctionCreated, AuctionEnded, BidPlaced, FundsWithdrawn, Initialized,
};

/// Sealed-bid auction engine.
///
/// Bidders commit to a hidden value and pay a fixed fee before the deadline,
/// open their commitment after it, and the operator finalizes: the highest
/// revealed value wins a freshly minted record and the collected fees are paid
/// out to the operator.
#[contract]
pub struct SealedAuctionContract;

#[contractimpl]
impl SealedAuctionContract {
    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    pub fn initialize(
        env: Env,
        admin: Address,
        fee_token: Address,
        fee_amount: i128,
        asset_registry: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if fee_amount <= 0 {
            return Err(Error::InvalidFee);
        }

        let config = AuctionConfig {
            admin: admin.clone(),
            fee_token: fee_token.clone(),
            fee_amount,
            asset_registry: asset_registry.clone(),
        };
        storage::set_config(&env, &config);
        storage::set_initialized(&env);
        storage::extend_instance_ttl(&env);

        Initialized {
            admin,
            fee_token,
            fee_amount,
            asset_registry,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<AuctionConfig, Error> {
        load_config(&env)
    }

    /// Change the fee for auctions created afterwards. Running auctions keep
    /// the fee they were created with.
    pub fn set_fee_amount(env: Env, admin: Address, fee_amount: i128) -> Result<(), Error> {
        let mut config = load_config(&env)?;
        admin::require_operator(&config, &admin)?;

        if fee_amount <= 0 {
            return Err(Error::InvalidFee);
        }

        config.fee_amount = fee_amount;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn set_asset_registry(
        env: Env,
        admin: Address,
        asset_registry: Address,
    ) -> Result<(), Error> {
        let mut config = load_config(&env)?;
        admin::require_operator(&config, &admin)?;

        config.asset_registry = asset_registry;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Hand the operator role to `new_admin`, including the payout of
    /// auctions not yet finalized.
    pub fn transfer_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        let mut config = load_config(&env)?;
        admin::require_operator(&config, &admin)?;

        config.admin = new_admin.clone();
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        AdminTransferred {
            old_admin: admin,
            new_admin,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // AUCTION LIFECYCLE
    // ========================================================================

    /// Open a new auction accepting commitments for `duration_seconds`.
    pub fn create_auction(env: Env, admin: Address, duration_seconds: u64) -> Result<u64, Error> {
        let config = load_config(&env)?;
        admin::require_operator(&config, &admin)?;

        if duration_seconds == 0 {
            return Err(Error::InvalidDuration);
        }

        let now = env.ledger().timestamp();
        let deadline = now
            .checked_add(duration_seconds)
            .ok_or(Error::InvalidDuration)?;
        let auction_id = storage::increment_auction_counter(&env);

        let auction = Auction {
            auction_id,
            created_at: now,
            deadline,
            ended: false,
            highest_value: 0,
            winner: None,
            fee_amount: config.fee_amount,
            escrow_balance: 0,
            bid_count: 0,
        };
        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        AuctionCreated {
            auction_id,
            deadline: auction.deadline,
            fee_amount: auction.fee_amount,
        }
        .publish(&env);

        Ok(auction_id)
    }

    /// Commit to a sealed bid. `payment` must equal the auction fee exactly and
    /// is moved into escrow; there is no change given and no refund path.
    pub fn place_bid(
        env: Env,
        auction_id: u64,
        bidder: Address,
        commitment: BytesN<32>,
        payment: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let config = load_config(&env)?;
        let mut auction = load_auction(&env, auction_id)?;

        let now = env.ledger().timestamp();
        if Phase::at(now, auction.deadline, auction.ended) != Phase::Open {
            return Err(Error::AuctionNotOpen);
        }

        if storage::has_committed(&env, auction_id, &bidder) {
            return Err(Error::DuplicateBid);
        }

        if payment != auction.fee_amount {
            return Err(Error::IncorrectFee);
        }

        if commitment::is_zero(&commitment) {
            return Err(Error::InvalidCommitment);
        }

        escrow::collect_fee(&env, &config.fee_token, &bidder, payment);

        let record = Commitment {
            hash: commitment,
            owner: bidder.clone(),
            has_committed: true,
            committed_at: now,
            revealed: false,
            revealed_value: 0,
        };
        storage::save_commitment(&env, auction_id, &record);

        auction.escrow_balance += payment;
        auction.bid_count += 1;
        storage::save_auction(&env, &auction);

        log!(&env, "bid placed", auction_id, bidder.clone());

        BidPlaced {
            auction_id,
            bidder,
            timestamp: now,
        }
        .publish(&env);

        Ok(())
    }

    /// Open a commitment. A strictly higher value takes the lead, so on a tie
    /// the earlier revealer keeps it.
    pub fn reveal_bid(
        env: Env,
        auction_id: u64,
        bidder: Address,
        bid_value: u128,
        nonce: BytesN<32>,
    ) -> Result<(), Error> {
        bidder.require_auth();

        load_config(&env)?;
        let mut auction = load_auction(&env, auction_id)?;

        let phase = Phase::at(env.ledger().timestamp(), auction.deadline, auction.ended);
        if phase == Phase::Open {
            return Err(Error::RevealTooEarly);
        }

        let mut record = storage::get_commitment(&env, auction_id, &bidder)
            .filter(|record| record.has_committed)
            .ok_or(Error::NoBid)?;

        if phase == Phase::Closed {
            return Err(Error::RevealAfterFinalize);
        }

        if record.revealed {
            return Err(Error::AlreadyRevealed);
        }

        if !commitment::opens(&env, &record.hash, bid_value, &nonce, &bidder) {
            return Err(Error::RevealMismatch);
        }

        record.revealed = true;
        record.revealed_value = bid_value;
        storage::save_commitment(&env, auction_id, &record);

        if bid_value > auction.highest_value {
            auction.highest_value = bid_value;
            auction.winner = Some(bidder);
            storage::save_auction(&env, &auction);
        }

        log!(&env, "bid revealed", auction_id, bid_value);

        Ok(())
    }

    /// Close the auction: mint the winner's record (if any) and pay the escrow
    /// out to the operator.
    ///
    /// The terminal flag is the last write. A failing mint or payout aborts the
    /// whole invocation, which leaves the auction in its reveal window so the
    /// operator can retry once the cause is fixed.
    pub fn finalize_auction(
        env: Env,
        auction_id: u64,
        operator: Address,
        metadata: String,
    ) -> Result<FinalizeOutcome, Error> {
        let config = load_config(&env)?;
        admin::require_operator(&config, &operator)?;

        let mut auction = load_auction(&env, auction_id)?;

        match Phase::at(env.ledger().timestamp(), auction.deadline, auction.ended) {
            Phase::Open => return Err(Error::AuctionStillActive),
            Phase::Closed => return Err(Error::AlreadyFinalized),
            Phase::RevealWindow => {}
        }

        let asset_id = match &auction.winner {
            Some(winner) => {
                let asset_id =
                    registry::mint_to(&env, &config.asset_registry, winner, &metadata);
                AuctionEnded {
                    auction_id,
                    winner: winner.clone(),
                    highest_value: auction.highest_value,
                    asset_id,
                }
                .publish(&env);
                Some(asset_id)
            }
            None => None,
        };

        let amount_withdrawn = auction.escrow_balance;
        if amount_withdrawn > 0 {
            escrow::release(&env, &config.fee_token, &operator, amount_withdrawn);
            FundsWithdrawn {
                auction_id,
                operator,
                amount: amount_withdrawn,
            }
            .publish(&env);
        }

        auction.escrow_balance = 0;
        auction.ended = true;
        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction finalized", auction_id, amount_withdrawn);

        Ok(FinalizeOutcome {
            winner: auction.winner,
            highest_value: auction.highest_value,
            asset_id,
            amount_withdrawn,
        })
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        load_auction(&env, auction_id)
    }

    /// Whether commitments are accepted and how many seconds are left to place one.
    pub fn get_status(env: Env, auction_id: u64) -> Result<StatusReport, Error> {
        let auction = load_auction(&env, auction_id)?;
        let now = env.ledger().timestamp();
        let is_active = Phase::at(now, auction.deadline, auction.ended).is_active();
        let time_remaining = if is_active { auction.deadline - now } else { 0 };
        Ok(StatusReport {
            is_active,
            time_remaining,
        })
    }

    pub fn get_phase(env: Env, auction_id: u64) -> Result<Phase, Error> {
        let auction = load_auction(&env, auction_id)?;
        Ok(Phase::at(
            env.ledger().timestamp(),
            auction.deadline,
            auction.ended,
        ))
    }

    pub fn has_bid(env: Env, auction_id: u64, bidder: Address) -> bool {
        storage::has_committed(&env, auction_id, &bidder)
    }

    pub fn get_commitment(env: Env, auction_id: u64, bidder: Address) -> Result<Commitment, Error> {
        load_auction(&env, auction_id)?;
        storage::get_commitment(&env, auction_id, &bidder).ok_or(Error::NoBid)
    }

    pub fn escrow_balance(env: Env, auction_id: u64) -> Result<i128, Error> {
        load_auction(&env, auction_id).map(|auction| auction.escrow_balance)
    }

    /// The digest `place_bid` expects for (`bid_value`, `nonce`, `bidder`).
    pub fn compute_commitment(
        env: Env,
        bid_value: u128,
        nonce: BytesN<32>,
        bidder: Address,
    ) -> BytesN<32> {
        commitment::compute(&env, bid_value, &nonce, &bidder)
    }
}

fn load_config(env: &Env) -> Result<AuctionConfig, Error> {
    if !storage::is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    storage::get_config(env).ok_or(Error::NotInitialized)
}

fn load_auction(env: &Env, auction_id: u64) -> Result<Auction, Error> {
    storage::get_auction(env, auction_id).ok_or(Error::AuctionNotFound)
}

#[cfg(test)]
mod test;
