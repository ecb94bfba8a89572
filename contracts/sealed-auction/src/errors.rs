use soroban_sdk::contracterror;

/// Error codes for the sealed auction engine.
///
/// The hundreds digit groups codes by [`ErrorKind`].
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Commitments are only accepted before the deadline of an unfinalized auction
    AuctionNotOpen = 100,
    /// Caller already holds a commitment in this auction
    DuplicateBid = 101,
    /// Reveals open at the deadline
    RevealTooEarly = 102,
    /// Auction was finalized; reveals are closed
    RevealAfterFinalize = 103,
    /// Finalize requires the deadline to have passed
    AuctionStillActive = 104,

    /// Payment must equal the auction's fee exactly
    IncorrectFee = 200,

    NotInitialized = 300,
    AlreadyInitialized = 301,
    AuctionNotFound = 302,
    /// Caller has no commitment in this auction
    NoBid = 303,
    AlreadyFinalized = 304,
    AlreadyRevealed = 305,
    /// The all-zero digest is never a valid commitment
    InvalidCommitment = 306,
    InvalidDuration = 307,
    InvalidFee = 308,

    /// Revealed value and nonce do not hash to the stored commitment
    RevealMismatch = 400,

    /// Caller is not the operator
    NotOperator = 500,
}

/// Coarse classification used by callers deciding whether a retry can help.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Wrong phase; waiting for (or triggering) the right phase fixes it.
    Phase,
    /// Wrong escrow amount; resubmit with the exact fee.
    Payment,
    /// A precondition about stored records does not hold.
    State,
    /// Reveal failed verification.
    Integrity,
    /// Caller lacks the operator capability.
    Auth,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 / 100 {
            1 => ErrorKind::Phase,
            2 => ErrorKind::Payment,
            4 => ErrorKind::Integrity,
            5 => ErrorKind::Auth,
            _ => ErrorKind::State,
        }
    }
}
