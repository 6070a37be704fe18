use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default number of live votes an address needs to become the majority.
pub const DEFAULT_VOTE_THRESHOLD: usize = 10;
/// Any requested threshold below this is raised to it, since a single vote
/// should never be able to decide the majority on its own.
pub const MIN_VOTE_THRESHOLD: usize = 2;
/// Default duration a vote counts for after it was cast.
pub const DEFAULT_VOTE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
/// Vote ledger configurations
pub struct Config {
    /// Minimum number of live votes for one address to be declared the majority.
    ///
    /// Values below [MIN_VOTE_THRESHOLD] are clamped when the ledger is created.
    ///
    /// Defaults to [DEFAULT_VOTE_THRESHOLD]
    pub threshold: usize,
    /// How long a vote counts after it was cast.
    ///
    /// The longer this duration is, the slower the majority follows an actual change
    /// of the public address (a new NAT mapping for example).
    /// The shorter it is, the more peers need to report within the window to reach
    /// the threshold.
    ///
    /// Defaults to [DEFAULT_VOTE_TIMEOUT]
    pub vote_timeout: Duration,
}

impl Config {
    /// Set [Config::threshold].
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;

        self
    }

    /// Set [Config::vote_timeout].
    pub fn vote_timeout(mut self, vote_timeout: Duration) -> Self {
        self.vote_timeout = vote_timeout;

        self
    }

    /// The threshold a ledger built from this config will actually use.
    pub fn effective_threshold(&self) -> usize {
        self.threshold.max(MIN_VOTE_THRESHOLD)
    }

    /// Check for values that would make a ledger useless.
    ///
    /// Ledger constructors never fail; use this when loading a config from
    /// an untrusted source.
    pub fn validate(&self) -> Result<()> {
        if self.vote_timeout.is_zero() {
            return Err(Error::ZeroVoteTimeout);
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VOTE_THRESHOLD,
            vote_timeout: DEFAULT_VOTE_TIMEOUT,
        }
    }
}
