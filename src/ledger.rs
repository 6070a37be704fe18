//! Majority vote over the addresses peers report seeing us at.
//!
//! Every peer gets exactly one vote, a new vote from the same peer replaces the
//! old one. Votes expire after [Config::vote_timeout] and are pruned lazily,
//! whenever the majority is queried.

use std::{
    collections::HashMap,
    fmt::{self, Debug, Formatter},
    hash::Hash,
    time::{Duration, Instant},
};

use tracing::{debug, trace};

use crate::{
    clock::{Clock, SystemClock},
    config::Config,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Vote<A> {
    address: A,
    /// `None` when `now + vote_timeout` doesn't fit in an [Instant], the vote never expires.
    expires_at: Option<Instant>,
}

impl<A> Vote<A> {
    fn is_expired(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at < now,
            None => false,
        }
    }
}

/// One vote per voter, for the address that voter observed for us.
///
/// Not synchronized; wrap it in a `Mutex` if more than one thread needs it.
pub struct VoteLedger<I, A, C = SystemClock> {
    votes: HashMap<I, Vote<A>>,
    threshold: usize,
    vote_timeout: Duration,
    clock: C,
}

impl<I, A> VoteLedger<I, A>
where
    I: Eq + Hash,
    A: Eq + Hash + Clone,
{
    /// Create an empty ledger using the system clock and the default vote timeout.
    ///
    /// A `threshold` below [MIN_VOTE_THRESHOLD](crate::MIN_VOTE_THRESHOLD) is raised to it.
    pub fn new(threshold: usize) -> Self {
        Self::with_config(Config::default().threshold(threshold))
    }

    /// Create an empty ledger using the system clock.
    pub fn with_config(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<I, A, C> VoteLedger<I, A, C>
where
    I: Eq + Hash,
    A: Eq + Hash + Clone,
    C: Clock,
{
    /// Create an empty ledger reading time from `clock`.
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self {
            votes: HashMap::new(),
            threshold: config.effective_threshold(),
            vote_timeout: config.vote_timeout,
            clock,
        }
    }

    // === Getters ===

    /// Minimum live votes an address needs to be the majority, always `>= 2`.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// How long a vote counts after it was inserted.
    pub fn vote_timeout(&self) -> Duration {
        self.vote_timeout
    }

    /// Number of tracked votes, including expired ones that weren't pruned yet.
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// The address `voter` last voted for, if its vote wasn't pruned yet.
    pub fn vote(&self, voter: &I) -> Option<&A> {
        self.votes.get(voter).map(|vote| &vote.address)
    }

    // === Public Methods ===

    /// Record that `voter` sees us at `address`, replacing any previous vote
    /// from the same voter, address and expiry alike.
    pub fn insert(&mut self, voter: I, address: A) {
        let expires_at = self.clock.now().checked_add(self.vote_timeout);

        self.votes.insert(
            voter,
            Vote {
                address,
                expires_at,
            },
        );

        trace!(votes = self.votes.len(), "Inserted address vote");
    }

    /// Remove every vote that expired strictly before now and return how many were removed.
    pub fn prune(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.votes.len();

        self.votes.retain(|_, vote| !vote.is_expired(now));

        before - self.votes.len()
    }

    /// Prune expired votes, then count the live votes per address.
    pub fn tally(&mut self) -> HashMap<A, usize> {
        self.prune();

        let mut counts: HashMap<A, usize> = HashMap::with_capacity(self.votes.len());

        for vote in self.votes.values() {
            *counts.entry(vote.address.clone()).or_insert(0) += 1;
        }

        counts
    }

    /// Prune expired votes, and return the address with the most live votes
    /// if it has at least [Self::threshold] of them.
    ///
    /// When several addresses share the highest count, which one is returned
    /// is unspecified.
    pub fn majority(&mut self) -> Option<A> {
        let before = self.votes.len();
        let counts = self.tally();
        let pruned = before - self.votes.len();

        let mut max = 0_usize;
        let mut best = None;

        for (address, count) in counts {
            if count > max {
                max = count;
                best = Some(address);
            }
        }

        debug!(
            pruned,
            live = self.votes.len(),
            best_votes = max,
            threshold = self.threshold,
            "Resolved address votes"
        );

        if max >= self.threshold {
            best
        } else {
            None
        }
    }
}

impl<I, A, C> Debug for VoteLedger<I, A, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoteLedger")
            .field("votes", &self.votes.len())
            .field("threshold", &self.threshold)
            .field("vote_timeout", &self.vote_timeout)
            .finish()
    }
}
