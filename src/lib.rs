#![doc = include_str!("../README.md")]
//! ## Feature flags
#![doc = document_features::document_features!()]
//!

mod common;
mod config;
mod error;

pub mod clock;
pub mod ledger;
pub mod public_address;

pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::common::{Id, ID_SIZE};
pub use crate::config::{
    Config, DEFAULT_VOTE_THRESHOLD, DEFAULT_VOTE_TIMEOUT, MIN_VOTE_THRESHOLD,
};
pub use crate::error::{Error, Result};
pub use crate::ledger::VoteLedger;
pub use crate::public_address::{AddressUpdate, PublicAddress};
