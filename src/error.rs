//! Main Crate Error

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Ipvote crate error enum.
pub enum Error {
    /// Node Id bytes were not [ID_SIZE](crate::ID_SIZE) long.
    #[error("Invalid Id size, expected 20 bytes, got {0}")]
    InvalidIdSize(usize),

    /// Node Id string was not 40 hex characters.
    #[error("Invalid Id encoding: {0}")]
    InvalidIdEncoding(String),

    /// A vote that expires as soon as it is cast can never form a majority.
    #[error("Vote timeout must be greater than zero")]
    ZeroVoteTimeout,
}

/// Alias for `Result<T, ipvote::Error>`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
