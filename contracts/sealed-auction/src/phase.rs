use soroban_sdk::contracttype;

/// Lifecycle phase of an auction.
///
/// Phases are never stored. They are derived from the clock and the terminal
/// flag each time an entry point runs, so there is no timer that "enters" the
/// reveal window.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Accepting commitments.
    Open = 0,
    /// Deadline passed; accepting reveals and a finalize.
    RevealWindow = 1,
    /// Finalized. Terminal.
    Closed = 2,
}

impl Phase {
    pub fn at(now: u64, deadline: u64, ended: bool) -> Phase {
        if ended {
            Phase::Closed
        } else if now < deadline {
            Phase::Open
        } else {
            Phase::RevealWindow
        }
    }

    pub fn is_active(&self) -> bool {
        *self == Phase::Open
    }
}
