//! Opaque node Id of a peer casting a vote.
use rand::Rng;
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

use crate::{Error, Result};

/// The size of node IDs in bytes.
pub const ID_SIZE: usize = 20;

#[derive(Clone, Copy, PartialEq, Ord, PartialOrd, Eq, Hash)]
/// Node Id of a voting peer.
pub struct Id(pub [u8; ID_SIZE]);

impl Id {
    pub fn random() -> Id {
        let mut rng = rand::thread_rng();
        let random_bytes: [u8; ID_SIZE] = rng.gen();

        Id(random_bytes)
    }

    /// Create a new Id from some bytes. Returns Err if `bytes` is not of length
    /// [ID_SIZE].
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> Result<Id> {
        let bytes = bytes.as_ref();
        if bytes.len() != ID_SIZE {
            return Err(Error::InvalidIdSize(bytes.len()));
        }

        let mut tmp: [u8; ID_SIZE] = [0; ID_SIZE];
        tmp.copy_from_slice(bytes);

        Ok(Id(tmp))
    }

    pub fn as_bytes(&self) -> &[u8; ID_SIZE] {
        &self.0
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Debug for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self)
    }
}

impl FromStr for Id {
    type Err = Error;

    /// Parse an Id from 40 hex characters, either case.
    fn from_str(s: &str) -> Result<Id> {
        let bytes = hex::decode(s).map_err(|_| Error::InvalidIdEncoding(s.to_string()))?;

        Id::from_bytes(bytes)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_bytes_wrong_size() {
        assert_eq!(Id::from_bytes([0_u8; 19]), Err(Error::InvalidIdSize(19)));
        assert_eq!(Id::from_bytes([0_u8; 21]), Err(Error::InvalidIdSize(21)));

        let id = Id::from_bytes([7_u8; ID_SIZE]).unwrap();
        assert_eq!(id.as_bytes(), &[7_u8; ID_SIZE]);
    }

    #[test]
    fn hex_display_and_parse() {
        let id = Id::from_bytes([0xab_u8; ID_SIZE]).unwrap();
        let hex = id.to_string();

        assert_eq!(hex, "ab".repeat(ID_SIZE));
        assert_eq!(hex.parse::<Id>().unwrap(), id);
        assert_eq!(hex.to_uppercase().parse::<Id>().unwrap(), id);
    }

    #[test]
    fn parse_invalid() {
        assert!("abc".parse::<Id>().is_err());
        assert!("zz".repeat(ID_SIZE).parse::<Id>().is_err());
        assert!("+a".repeat(ID_SIZE).parse::<Id>().is_err());
        assert_eq!(
            "ab".repeat(ID_SIZE - 1).parse::<Id>(),
            Err(Error::InvalidIdSize(ID_SIZE - 1))
        );
        // 40 bytes but not 40 ascii chars
        assert!("é".repeat(ID_SIZE).parse::<Id>().is_err());
    }

    #[test]
    fn random_ids_differ() {
        assert_ne!(Id::random(), Id::random());
    }
}
