//! Track this node's public address as peers keep voting on it.

use std::net::SocketAddr;

use tracing::{debug, trace};

use crate::{
    clock::{Clock, SystemClock},
    common::Id,
    config::Config,
    ledger::VoteLedger,
};

/// Outcome of [PublicAddress::refresh].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressUpdate {
    /// Same consensus as the last refresh, or still none.
    Unchanged,
    /// A consensus was reached for the first time, or again after being lost.
    Discovered(SocketAddr),
    /// Consensus moved to a different address.
    Changed { from: SocketAddr, to: SocketAddr },
    /// Not enough live votes agree anymore.
    Lost(SocketAddr),
}

/// This node's public address, as reported by the nodes responding to its requests.
#[derive(Debug)]
pub struct PublicAddress<C = SystemClock> {
    ledger: VoteLedger<Id, SocketAddr, C>,
    current: Option<SocketAddr>,
}

impl PublicAddress {
    /// Start with no votes and no known address, using the system clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> PublicAddress<C> {
    /// Same as [PublicAddress::new], reading time from `clock`.
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self {
            ledger: VoteLedger::with_clock(config, clock),
            current: None,
        }
    }

    // === Getters ===

    /// The consensus as of the last [Self::refresh].
    pub fn current(&self) -> Option<SocketAddr> {
        self.current
    }

    /// The votes behind [Self::current].
    pub fn ledger(&self) -> &VoteLedger<Id, SocketAddr, C> {
        &self.ledger
    }

    // === Public Methods ===

    /// Record the address `voter` observed for us in its response.
    pub fn add_vote(&mut self, voter: Id, observed: SocketAddr) {
        trace!(?voter, ?observed, "Address vote");

        self.ledger.insert(voter, observed);
    }

    /// Resolve the majority and compare it with the previous one.
    pub fn refresh(&mut self) -> AddressUpdate {
        let majority = self.ledger.majority();

        let update = match (self.current, majority) {
            (None, None) => AddressUpdate::Unchanged,
            (None, Some(to)) => {
                debug!(public_address = ?to, "Discovered public address");

                AddressUpdate::Discovered(to)
            }
            (Some(from), None) => {
                debug!(
                    previous = ?from,
                    "Lost consensus on public address, not enough live votes"
                );

                AddressUpdate::Lost(from)
            }
            (Some(from), Some(to)) if from == to => AddressUpdate::Unchanged,
            (Some(from), Some(to)) => {
                debug!(?from, ?to, "Votes suggest a different public address");

                AddressUpdate::Changed { from, to }
            }
        };

        self.current = majority;

        update
    }
}
