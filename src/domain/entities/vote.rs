use serde::{Deserialize, Serialize};

/// Aggregate vote tally for one piece of content.
///
/// Counts only move backwards on a vote retraction; the at-most-one-live-vote
/// rule is enforced by the vote ledger upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCount {
    pub up: u64,
    pub down: u64,
}

impl VoteCount {
    pub fn new(up: u64, down: u64) -> Self {
        Self { up, down }
    }

    pub fn summation(&self) -> u64 {
        self.up + self.down
    }

    pub fn difference(&self) -> i64 {
        self.up as i64 - self.down as i64
    }
}
