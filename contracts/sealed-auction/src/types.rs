use soroban_sdk::{contracttype, Address, BytesN};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Contract-wide settings written by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    /// Operator identity; the only caller allowed to create and finalize auctions.
    pub admin: Address,
    /// Token the application fee is paid in.
    pub fee_token: Address,
    /// Fee charged per commitment for auctions created from now on.
    pub fee_amount: i128,
    /// Registry that mints the winner's record.
    pub asset_registry: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub auction_id: u64,
    pub created_at: u64,
    /// Commitments are accepted strictly before this timestamp.
    pub deadline: u64,
    /// Terminal flag. Flips to true once, on a successful finalize.
    pub ended: bool,
    pub highest_value: u128,
    pub winner: Option<Address>,
    /// Fee snapshot taken at creation.
    pub fee_amount: i128,
    /// Fees held for this auction; `fee_amount * bid_count` until finalized, then 0.
    pub escrow_balance: i128,
    pub bid_count: u32,
}

/// A bidder's sealed bid.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commitment {
    pub hash: BytesN<32>,
    pub owner: Address,
    pub has_committed: bool,
    pub committed_at: u64,
    pub revealed: bool,
    pub revealed_value: u128,
}

/// Answer to `get_status`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusReport {
    pub is_active: bool,
    pub time_remaining: u64,
}

/// What a successful finalize did.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FinalizeOutcome {
    pub winner: Option<Address>,
    pub highest_value: u128,
    pub asset_id: Option<u64>,
    pub amount_withdrawn: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    AuctionCounter,
    Auction(u64),
    Commitment(u64, Address),
}
